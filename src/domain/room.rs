use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::domain::draw::DrawSequence;
use crate::domain::user::RoomUser;

/// A row of the `rooms` table.
#[derive(Debug, Clone, FromRow)]
pub struct RoomRecord {
    pub id: Uuid,
    pub name: String,
    pub status: bool,
    pub ball_time: i32,
    pub user_cards: Json<Value>,
    pub drawn_numbers: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub status: bool,
    pub ball_time: i32,
    pub user_cards: Value,
    pub drawn_numbers: DrawSequence,
}

impl NewRoom {
    /// An open room with a freshly shuffled draw order.
    pub fn open(name: String, ball_time: i32, user_cards: Value) -> Self {
        NewRoom {
            name,
            status: true,
            ball_time,
            user_cards,
            drawn_numbers: DrawSequence::generate(),
        }
    }
}

/// Room as sent to clients. The draw order is only present on the response to the creator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub status: bool,
    pub ball_time: i32,
    pub user_cards: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawn_numbers: Option<DrawSequence>,
    pub users: Vec<RoomUser>,
}

impl Room {
    pub fn from_record(record: RoomRecord, users: Vec<RoomUser>) -> Self {
        Room {
            id: record.id,
            name: record.name,
            status: record.status,
            ball_time: record.ball_time,
            user_cards: record.user_cards.0,
            drawn_numbers: None,
            users,
        }
    }

    pub fn with_draw_order(mut record: RoomRecord, users: Vec<RoomUser>) -> Self {
        let drawn_numbers = DrawSequence::from(std::mem::take(&mut record.drawn_numbers));
        Room {
            drawn_numbers: Some(drawn_numbers),
            ..Room::from_record(record, users)
        }
    }
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub ball_time: i32,
    pub user_cards: Value,
    #[validate(length(min = 1))]
    pub nickname: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_room_is_active_with_full_draw_order() {
        let room = NewRoom::open("Friday".to_string(), 5, json!({ "cardsPerUser": 2 }));
        assert!(room.status);
        assert!(room.drawn_numbers.is_complete());
    }

    #[test]
    fn request_uses_camel_case_fields() {
        let request: CreateRoomRequest = serde_json::from_value(json!({
            "name": "Friday",
            "ballTime": 5,
            "userCards": { "cardsPerUser": 2 },
            "nickname": "Host",
        }))
        .unwrap();
        assert_eq!(request.ball_time, 5);
        assert_eq!(request.user_cards, json!({ "cardsPerUser": 2 }));
        assert!(request.validate().is_ok());
    }

    #[rstest::rstest]
    #[case("", "Host")]
    #[case("Friday", "")]
    fn request_with_empty_names_is_invalid(#[case] name: &str, #[case] nickname: &str) {
        let request = CreateRoomRequest {
            name: name.to_string(),
            ball_time: 5,
            user_cards: Value::Null,
            nickname: nickname.to_string(),
        };
        assert!(request.validate().is_err());
    }

    fn record() -> RoomRecord {
        RoomRecord {
            id: Uuid::from_u128(1),
            name: "Friday".to_string(),
            status: true,
            ball_time: 5,
            user_cards: Json(json!([])),
            drawn_numbers: (1..=75).collect(),
        }
    }

    fn host() -> RoomUser {
        RoomUser {
            id: Uuid::from_u128(2),
            nickname: "Host".to_string(),
            score: 0,
        }
    }

    #[test]
    fn room_view_serializes_users_with_public_fields_only() {
        let value = serde_json::to_value(Room::from_record(record(), vec![host()])).unwrap();
        let keys: Vec<&String> = value["users"][0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "nickname", "score"]);
        assert_eq!(value["ballTime"], json!(5));
    }

    #[test]
    fn room_view_hides_draw_order() {
        let value = serde_json::to_value(Room::from_record(record(), vec![host()])).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["ballTime", "id", "name", "status", "userCards", "users"]
        );
    }

    #[test]
    fn created_room_view_carries_draw_order() {
        let room = Room::with_draw_order(record(), vec![host()]);
        assert!(room.drawn_numbers.as_ref().unwrap().is_complete());
        let value = serde_json::to_value(room).unwrap();
        assert_eq!(value["drawnNumbers"].as_array().unwrap().len(), 75);
    }
}
