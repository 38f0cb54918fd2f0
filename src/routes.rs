use eyre::Result;
use uuid::Uuid;
use validator::Validate;

use crate::domain::room::{CreateRoomRequest, Room};
use crate::error::Error;
use crate::service::rooms::RoomService;

#[derive(Clone)]
pub struct Api {
    pub room_service: RoomService,
}

impl Api {
    pub async fn create_room(&self, request: CreateRoomRequest) -> Result<Room> {
        request.validate().map_err(|_| Error::InvalidRoomRequest)?;
        self.room_service
            .create_room_and_host(
                request.name,
                request.ball_time,
                request.user_cards,
                request.nickname,
            )
            .await
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.room_service.list_rooms().await
    }

    pub async fn get_room(&self, room_id: Uuid) -> Result<Room> {
        self.room_service.get_room(room_id).await
    }
}
