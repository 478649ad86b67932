//! Room Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{RestaurantId, Room, RoomId, RoomPatch};

pub const TABLE: &str = "room";

/// 带餐厅摘要的查询
const SELECT_ROOM: &str = "SELECT *, restaurant.name AS restaurant_name, \
     restaurant.location AS restaurant_location FROM";

#[derive(Clone)]
pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find rooms, optionally restricted to one restaurant
    pub async fn find_all(&self, restaurant: Option<&RestaurantId>) -> RepoResult<Vec<Room>> {
        let rooms: Vec<Room> = match restaurant {
            Some(rid) => self
                .base
                .db()
                .query(format!(
                    "{SELECT_ROOM} room WHERE restaurant = $restaurant ORDER BY created_at ASC"
                ))
                .bind(("restaurant", rid.clone()))
                .await?
                .take(0)?,
            None => self
                .base
                .db()
                .query(format!("{SELECT_ROOM} room ORDER BY created_at ASC"))
                .await?
                .take(0)?,
        };
        Ok(rooms)
    }

    pub async fn find_by_id(&self, id: &RoomId) -> RepoResult<Option<Room>> {
        let mut result = self
            .base
            .db()
            .query(format!("{SELECT_ROOM} $room"))
            .bind(("room", id.clone()))
            .await?;
        let rooms: Vec<Room> = result.take(0)?;
        Ok(rooms.into_iter().next())
    }

    pub async fn create(&self, mut data: Room) -> RepoResult<Room> {
        data.id = None;
        let created: Option<Room> = self.base.db().create(TABLE).content(data).await?;
        let id = created
            .and_then(|r| r.id)
            .ok_or_else(|| RepoError::Database("Failed to create room".to_string()))?;
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create room".to_string()))
    }

    pub async fn update(&self, id: &RoomId, patch: RoomPatch) -> RepoResult<Room> {
        let existing: Option<Room> = self.base.db().select(id.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound("Room not found".to_string()));
        }
        let _: Option<Room> = self.base.db().update(id.clone()).merge(patch).await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Room not found".to_string()))
    }

    pub async fn delete(&self, id: &RoomId) -> RepoResult<bool> {
        let deleted: Option<Room> = self.base.db().delete(id.clone()).await?;
        Ok(deleted.is_some())
    }
}
