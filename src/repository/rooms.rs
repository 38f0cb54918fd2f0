use eyre::Result;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::room::{NewRoom, RoomRecord};

#[cfg_attr(test, faux::create)]
pub struct RoomRepository {
    pool: PgPool,
}

#[cfg_attr(test, faux::methods)]
impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        RoomRepository { pool }
    }

    pub async fn create(&self, room: NewRoom) -> Result<RoomRecord> {
        sqlx::query_as(
            r#"
            INSERT INTO rooms (name, status, ball_time, user_cards, drawn_numbers)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, status, ball_time, user_cards, drawn_numbers
            "#,
        )
        .bind(room.name)
        .bind(room.status)
        .bind(room.ball_time)
        .bind(Json(room.user_cards))
        .bind(room.drawn_numbers.as_slice())
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    pub async fn get_all(&self) -> Result<Vec<RoomRecord>> {
        sqlx::query_as(
            r#"
            SELECT id, name, status, ball_time, user_cards, drawn_numbers
            FROM rooms
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<RoomRecord>> {
        sqlx::query_as(
            r#"
            SELECT id, name, status, ball_time, user_cards, drawn_numbers
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        sqlx::query(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM rooms
                WHERE id = $1
            )
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map(|row| row.get(0))
        .map_err(Into::into)
    }
}
