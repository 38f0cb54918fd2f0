use std::sync::Arc;

use eyre::{ensure, Result};
use log::{debug, error, info};
use serde_json::Value;
use tap::TapFallible;
use uuid::Uuid;

use crate::domain::room::{NewRoom, Room};
use crate::error::Error;
use crate::repository::rooms::RoomRepository;
use crate::service::users::UserService;

#[derive(Clone)]
pub struct RoomService {
    pub room_repository: Arc<RoomRepository>,
    pub user_service: UserService,
}

impl RoomService {
    // The room and its host are written separately. A failed host insert leaves the room in place.
    pub async fn create_room_and_host(
        &self,
        name: String,
        ball_time: i32,
        user_cards: Value,
        nickname: String,
    ) -> Result<Room> {
        let room = self
            .room_repository
            .create(NewRoom::open(name, ball_time, user_cards))
            .await
            .tap_err(|e| error!("Failed to create room: {:?}", e))?;

        let host = self
            .user_service
            .create_user(nickname, room.id)
            .await
            .tap_err(|e| error!("Room {} was left without a host: {:?}", room.id, e))?;

        info!("Room {} created with host {}", room.id, host.id);
        Ok(Room::with_draw_order(room, vec![host.into()]))
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        let rooms = self.room_repository.get_all().await?;
        let mut users = self
            .user_service
            .get_by_rooms(rooms.iter().map(|room| room.id).collect())
            .await?;
        debug!("Listing {} rooms", rooms.len());
        Ok(rooms
            .into_iter()
            .map(|room| {
                let members = users.remove(&room.id).unwrap_or_default();
                Room::from_record(room, members)
            })
            .collect())
    }

    pub async fn get_room(&self, room_id: Uuid) -> Result<Room> {
        self.assert_room_exists(room_id).await?;
        let room = self
            .room_repository
            .get(room_id)
            .await?
            .ok_or(Error::RoomNotFound(room_id))?;
        let users = self.user_service.get_by_room(room_id).await?;
        Ok(Room::from_record(room, users))
    }

    pub async fn assert_room_exists(&self, room_id: Uuid) -> Result<()> {
        ensure!(
            self.room_repository.exists(room_id).await?,
            Error::RoomNotFound(room_id)
        );
        Ok(())
    }
}
