// Postgres 存储实现

pub mod ad;
pub mod game;

pub use ad::AdOperation;
pub use game::GameOperation;

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::models::{AdEntity, AdSummaryEntity, GameWithAdCountEntity, NewAdEntity};
use crate::database::store::{AdStore, StoreError};

/// 基于 Postgres 连接池的存储
pub struct PgAdStore {
    games: GameOperation,
    ads: AdOperation,
}

impl PgAdStore {
    pub fn new(pool: PgPool) -> Self {
        let db = Arc::new(pool);
        Self {
            games: GameOperation::new(db.clone()),
            ads: AdOperation::new(db),
        }
    }
}

#[async_trait]
impl AdStore for PgAdStore {
    async fn list_games_with_ad_count(&self) -> Result<Vec<GameWithAdCountEntity>, StoreError> {
        Ok(self.games.list_with_ad_count().await?)
    }

    async fn create_ad(&self, new_ad: NewAdEntity) -> Result<AdEntity, StoreError> {
        Ok(self.ads.create_ad(&new_ad).await?)
    }

    async fn list_ads_by_game(&self, game_id: &str) -> Result<Vec<AdSummaryEntity>, StoreError> {
        Ok(self.ads.find_by_game(game_id).await?)
    }

    async fn find_ad_discord(&self, ad_id: &str) -> Result<String, StoreError> {
        self.ads
            .find_discord(ad_id)
            .await?
            .ok_or(StoreError::NotFound)
    }
}
