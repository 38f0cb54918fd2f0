use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub nickname: String,
    pub score: i32,
    pub room_id: Uuid,
}

/// What a room exposes about each of its users.
#[derive(Debug, Clone, FromRow, PartialEq, Serialize)]
pub struct RoomUser {
    pub id: Uuid,
    pub nickname: String,
    pub score: i32,
}

impl From<User> for RoomUser {
    fn from(user: User) -> Self {
        RoomUser {
            id: user.id,
            nickname: user.nickname,
            score: user.score,
        }
    }
}
