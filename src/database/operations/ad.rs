// 广告存储库
// 包含广告相关的数据库操作

use crate::database::models::{AdEntity, AdSummaryEntity, NewAdEntity};
use sqlx::{Error as SqlxError, PgPool};
use std::sync::Arc;
use uuid::Uuid;

/// 广告存储库，处理所有与广告相关的数据库操作
pub struct AdOperation {
    db: Arc<PgPool>,
}

impl AdOperation {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }

    /// 创建广告并返回落库后的完整记录
    pub async fn create_ad(&self, new_ad: &NewAdEntity) -> Result<AdEntity, SqlxError> {
        let ad_id = Uuid::new_v4().to_string();

        sqlx::query_as::<_, AdEntity>(
            r#"
            INSERT INTO ads (
                id, game_id, name, years_playing, discord,
                week_days, hour_start, hour_end, use_voice_channel
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, game_id, name, years_playing, discord,
                week_days, hour_start, hour_end, use_voice_channel, created_at
            "#,
        )
        .bind(&ad_id)
        .bind(&new_ad.game_id)
        .bind(&new_ad.name)
        .bind(new_ad.years_playing)
        .bind(&new_ad.discord)
        .bind(&new_ad.week_days)
        .bind(new_ad.hour_start)
        .bind(new_ad.hour_end)
        .bind(new_ad.use_voice_channel)
        .fetch_one(&*self.db)
        .await
    }

    /// 查询游戏下的全部广告，按创建时间倒序
    pub async fn find_by_game(&self, game_id: &str) -> Result<Vec<AdSummaryEntity>, SqlxError> {
        sqlx::query_as::<_, AdSummaryEntity>(
            r#"
            SELECT
                id, name, week_days, use_voice_channel,
                years_playing, hour_start, hour_end
            FROM ads
            WHERE game_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(game_id)
        .fetch_all(&*self.db)
        .await
    }

    /// 查询广告的 Discord
    pub async fn find_discord(&self, ad_id: &str) -> Result<Option<String>, SqlxError> {
        sqlx::query_scalar::<_, String>("SELECT discord FROM ads WHERE id = $1")
            .bind(ad_id)
            .fetch_optional(&*self.db)
            .await
    }
}
