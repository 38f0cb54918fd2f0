use eyre::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::{RoomUser, User};

#[cfg_attr(test, faux::create)]
pub struct UserRepository {
    pool: PgPool,
}

#[cfg_attr(test, faux::methods)]
impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, nickname: String, room_id: Uuid) -> Result<User> {
        sqlx::query_as(
            r#"
            INSERT INTO users (nickname, room_id)
            VALUES ($1, $2)
            RETURNING id, nickname, score, room_id
            "#,
        )
        .bind(nickname)
        .bind(room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<RoomUser>> {
        sqlx::query_as(
            r#"
            SELECT id, nickname, score FROM users
            WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    pub async fn get_by_rooms(&self, room_ids: Vec<Uuid>) -> Result<Vec<User>> {
        sqlx::query_as(
            r#"
            SELECT id, nickname, score, room_id FROM users
            WHERE room_id = ANY($1)
            "#,
        )
        .bind(room_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }
}
