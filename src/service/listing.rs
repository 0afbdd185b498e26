// 广告列表服务
// 负责传输形式与存储形式之间的转换，存储操作委托给 AdStore

use std::sync::Arc;

use crate::api::models::{
    AdContactResponse, AdListItem, CreateAdRequest, CreateAdResponse, GameResponse,
};
use crate::database::models::{AdEntity, AdSummaryEntity, NewAdEntity};
use crate::database::{AdStore, StoreError};
use crate::error::AppError;
use crate::utils::{hour_to_minutes, join_week_days, minutes_to_hour, split_week_days};

pub struct ListingService {
    store: Arc<dyn AdStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn AdStore>) -> Self {
        Self { store }
    }

    /// 查询所有游戏及广告数量
    pub async fn list_games(&self) -> Result<Vec<GameResponse>, AppError> {
        let games = self.store.list_games_with_ad_count().await?;
        tracing::debug!("查询到 {} 个游戏", games.len());

        Ok(games
            .into_iter()
            .map(|game| GameResponse {
                id: game.id,
                title: game.title,
                banner_url: game.banner_url,
                ad_count: game.ad_count,
            })
            .collect())
    }

    /// 创建广告，时间与星期先转换为存储形式
    pub async fn create_ad(
        &self,
        game_id: &str,
        request: CreateAdRequest,
    ) -> Result<CreateAdResponse, AppError> {
        let hour_start = hour_to_minutes(&request.hour_start)
            .map_err(|e| AppError::Validation(format!("hourStart: {e}")))?;
        let hour_end = hour_to_minutes(&request.hour_end)
            .map_err(|e| AppError::Validation(format!("hourEnd: {e}")))?;
        let years_playing = i32::try_from(request.years_playing)
            .map_err(|_| AppError::Validation("yearsPlaying 超出范围".to_string()))?;

        let new_ad = NewAdEntity {
            game_id: game_id.to_string(),
            name: request.name,
            years_playing,
            discord: request.discord,
            week_days: join_week_days(&request.week_days),
            hour_start,
            hour_end,
            use_voice_channel: request.use_voice_channel,
        };

        let ad = self.store.create_ad(new_ad).await.map_err(|e| match e {
            StoreError::ForeignKeyViolation(_) => {
                AppError::NotFound(format!("游戏 {game_id} 不存在"))
            }
            other => AppError::from(other),
        })?;

        tracing::info!("游戏 {} 新增广告 {}", game_id, ad.id);
        to_created_response(ad)
    }

    /// 查询游戏下的广告，最新的在前
    pub async fn list_ads_for_game(&self, game_id: &str) -> Result<Vec<AdListItem>, AppError> {
        let ads = self.store.list_ads_by_game(game_id).await?;
        tracing::debug!("游戏 {} 下有 {} 条广告", game_id, ads.len());

        ads.into_iter().map(to_list_item).collect()
    }

    /// 查询广告的联系方式
    pub async fn get_ad_contact(&self, ad_id: &str) -> Result<AdContactResponse, AppError> {
        let discord = self.store.find_ad_discord(ad_id).await.map_err(|e| match e {
            StoreError::NotFound => AppError::NotFound(format!("广告 {ad_id} 不存在")),
            other => AppError::from(other),
        })?;

        Ok(AdContactResponse { discord })
    }
}

fn to_created_response(ad: AdEntity) -> Result<CreateAdResponse, AppError> {
    Ok(CreateAdResponse {
        week_days: decode_week_days(&ad.id, &ad.week_days)?,
        hour_start: decode_minutes(&ad.id, ad.hour_start)?,
        hour_end: decode_minutes(&ad.id, ad.hour_end)?,
        id: ad.id,
        game_id: ad.game_id,
        name: ad.name,
        years_playing: ad.years_playing,
        discord: ad.discord,
        use_voice_channel: ad.use_voice_channel,
        created_at: ad.created_at,
    })
}

fn to_list_item(ad: AdSummaryEntity) -> Result<AdListItem, AppError> {
    Ok(AdListItem {
        week_days: decode_week_days(&ad.id, &ad.week_days)?,
        hour_start: decode_minutes(&ad.id, ad.hour_start)?,
        hour_end: decode_minutes(&ad.id, ad.hour_end)?,
        id: ad.id,
        name: ad.name,
        use_voice_channel: ad.use_voice_channel,
        years_playing: ad.years_playing,
    })
}

// 已存数据无法解码属于数据完整性问题，按内部错误处理
fn decode_week_days(ad_id: &str, stored: &str) -> Result<Vec<u8>, AppError> {
    split_week_days(stored)
        .map_err(|e| AppError::from(StoreError::Corrupt(format!("ad {ad_id}: {e}"))))
}

fn decode_minutes(ad_id: &str, minutes: i32) -> Result<String, AppError> {
    minutes_to_hour(minutes)
        .map_err(|e| AppError::from(StoreError::Corrupt(format!("ad {ad_id}: {e}"))))
}
