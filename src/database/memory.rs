// 内存存储，供测试使用
// 模拟数据库的外键约束与排序规则

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::database::models::{
    AdEntity, AdSummaryEntity, GameEntity, GameWithAdCountEntity, NewAdEntity,
};
use crate::database::store::{AdStore, StoreError};

#[derive(Default)]
pub struct MemoryAdStore {
    games: Vec<GameEntity>,
    // (插入序号, 广告)，序号用于创建时间相同时的排序
    ads: Mutex<Vec<(u64, AdEntity)>>,
}

impl MemoryAdStore {
    pub fn with_games(games: Vec<GameEntity>) -> Self {
        Self {
            games,
            ads: Mutex::new(Vec::new()),
        }
    }

    /// 直接写入一条存储形式的广告，用于构造损坏数据
    pub fn insert_raw(&self, ad: AdEntity) {
        let mut ads = self.ads.lock().unwrap();
        let seq = ads.len() as u64;
        ads.push((seq, ad));
    }
}

#[async_trait]
impl AdStore for MemoryAdStore {
    async fn list_games_with_ad_count(&self) -> Result<Vec<GameWithAdCountEntity>, StoreError> {
        let ads = self.ads.lock().unwrap();
        let mut games: Vec<GameWithAdCountEntity> = self
            .games
            .iter()
            .map(|game| GameWithAdCountEntity {
                id: game.id.clone(),
                title: game.title.clone(),
                banner_url: game.banner_url.clone(),
                ad_count: ads.iter().filter(|(_, ad)| ad.game_id == game.id).count() as i64,
            })
            .collect();
        games.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(games)
    }

    async fn create_ad(&self, new_ad: NewAdEntity) -> Result<AdEntity, StoreError> {
        if !self.games.iter().any(|game| game.id == new_ad.game_id) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "game {} does not exist",
                new_ad.game_id
            )));
        }

        let ad = AdEntity {
            id: Uuid::new_v4().to_string(),
            game_id: new_ad.game_id,
            name: new_ad.name,
            years_playing: new_ad.years_playing,
            discord: new_ad.discord,
            week_days: new_ad.week_days,
            hour_start: new_ad.hour_start,
            hour_end: new_ad.hour_end,
            use_voice_channel: new_ad.use_voice_channel,
            created_at: Utc::now(),
        };
        self.insert_raw(ad.clone());
        Ok(ad)
    }

    async fn list_ads_by_game(&self, game_id: &str) -> Result<Vec<AdSummaryEntity>, StoreError> {
        let ads = self.ads.lock().unwrap();
        let mut matching: Vec<&(u64, AdEntity)> =
            ads.iter().filter(|(_, ad)| ad.game_id == game_id).collect();
        matching.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });

        Ok(matching
            .into_iter()
            .map(|(_, ad)| AdSummaryEntity {
                id: ad.id.clone(),
                name: ad.name.clone(),
                week_days: ad.week_days.clone(),
                use_voice_channel: ad.use_voice_channel,
                years_playing: ad.years_playing,
                hour_start: ad.hour_start,
                hour_end: ad.hour_end,
            })
            .collect())
    }

    async fn find_ad_discord(&self, ad_id: &str) -> Result<String, StoreError> {
        self.ads
            .lock()
            .unwrap()
            .iter()
            .find(|(_, ad)| ad.id == ad_id)
            .map(|(_, ad)| ad.discord.clone())
            .ok_or(StoreError::NotFound)
    }
}
