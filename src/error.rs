use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Room with ID {0} not found")]
    RoomNotFound(Uuid),
    #[error("Room name and host nickname must not be empty")]
    InvalidRoomRequest,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::RoomNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidRoomRequest => StatusCode::BAD_REQUEST,
        }
    }

    pub fn into_response_tuple(self) -> (StatusCode, String) {
        (self.status_code(), self.to_string())
    }
}
