//! Restaurant Repository

use std::collections::HashMap;

use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Restaurant, RestaurantId, RestaurantPatch};

pub const TABLE: &str = "restaurant";

#[derive(Debug, Deserialize)]
struct RoomCountRow {
    restaurant: RecordId,
    total: usize,
}

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * FROM restaurant ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    pub async fn find_by_id(&self, id: &RestaurantId) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> = self.base.db().select(id.clone()).await?;
        Ok(restaurant)
    }

    /// 每个餐厅的房间数，键为 `restaurant:key`
    pub async fn room_counts(&self) -> RepoResult<HashMap<String, usize>> {
        let rows: Vec<RoomCountRow> = self
            .base
            .db()
            .query("SELECT restaurant, count() AS total FROM room GROUP BY restaurant")
            .await?
            .take(0)?;
        Ok(rows
            .into_iter()
            .map(|r| (r.restaurant.to_string(), r.total))
            .collect())
    }

    pub async fn create(&self, mut data: Restaurant) -> RepoResult<Restaurant> {
        data.id = None;
        let created: Option<Restaurant> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }

    pub async fn update(&self, id: &RestaurantId, patch: RestaurantPatch) -> RepoResult<Restaurant> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound("Restaurant not found".to_string()));
        }
        let updated: Option<Restaurant> = self.base.db().update(id.clone()).merge(patch).await?;
        updated.ok_or_else(|| RepoError::NotFound("Restaurant not found".to_string()))
    }

    /// Delete a restaurant together with every room that references it
    ///
    /// Both deletes run in one transaction.
    pub async fn delete_cascade(&self, id: &RestaurantId) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                DELETE room WHERE restaurant = $restaurant;
                DELETE $restaurant;
                COMMIT TRANSACTION;"#,
            )
            .bind(("restaurant", id.clone()))
            .await?
            .check()?;
        Ok(true)
    }
}
