use std::collections::HashMap;
use std::sync::Arc;

use eyre::Result;
use itertools::Itertools;
use uuid::Uuid;

use crate::domain::user::{RoomUser, User};
use crate::repository::users::UserRepository;

#[derive(Clone)]
pub struct UserService {
    pub user_repository: Arc<UserRepository>,
}

impl UserService {
    pub async fn create_user(&self, nickname: String, room_id: Uuid) -> Result<User> {
        self.user_repository.create_user(nickname, room_id).await
    }

    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<RoomUser>> {
        self.user_repository.get_by_room(room_id).await
    }

    /// Users of each given room, keyed by room id. Rooms without users have no entry.
    pub async fn get_by_rooms(&self, room_ids: Vec<Uuid>) -> Result<HashMap<Uuid, Vec<RoomUser>>> {
        if room_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let users = self.user_repository.get_by_rooms(room_ids).await?;
        Ok(users
            .into_iter()
            .into_group_map_by(|user| user.room_id)
            .into_iter()
            .map(|(room_id, users)| (room_id, users.into_iter().map(RoomUser::from).collect()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u128, nickname: &str, room_id: u128) -> User {
        User {
            id: Uuid::from_u128(id),
            nickname: nickname.to_string(),
            score: 0,
            room_id: Uuid::from_u128(room_id),
        }
    }

    #[tokio::test]
    async fn groups_users_by_room() -> Result<()> {
        let mut user_repository = UserRepository::faux();
        faux::when!(user_repository.get_by_rooms).then(|_| {
            Ok(vec![
                user(1, "Alice", 10),
                user(2, "Bob", 20),
                user(3, "Charlie", 10),
            ])
        });
        let service = UserService {
            user_repository: Arc::new(user_repository),
        };

        let grouped = service
            .get_by_rooms(vec![Uuid::from_u128(10), Uuid::from_u128(20), Uuid::from_u128(30)])
            .await?;

        let nicknames = |room: u128| -> Vec<String> {
            grouped[&Uuid::from_u128(room)]
                .iter()
                .map(|u| u.nickname.clone())
                .collect()
        };
        assert_eq!(nicknames(10), vec!["Alice", "Charlie"]);
        assert_eq!(nicknames(20), vec!["Bob"]);
        assert!(!grouped.contains_key(&Uuid::from_u128(30)));
        Ok(())
    }

    #[tokio::test]
    async fn no_rooms_means_no_query() -> Result<()> {
        // an unexpected call on a faux mock panics
        let service = UserService {
            user_repository: Arc::new(UserRepository::faux()),
        };
        assert!(service.get_by_rooms(vec![]).await?.is_empty());
        Ok(())
    }
}
