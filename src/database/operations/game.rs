// 游戏存储库
// 游戏表只读

use crate::database::models::GameWithAdCountEntity;
use sqlx::{Error as SqlxError, PgPool};
use std::sync::Arc;

pub struct GameOperation {
    db: Arc<PgPool>,
}

impl GameOperation {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }

    /// 查询所有游戏并统计各自的广告数量
    pub async fn list_with_ad_count(&self) -> Result<Vec<GameWithAdCountEntity>, SqlxError> {
        sqlx::query_as::<_, GameWithAdCountEntity>(
            r#"
            SELECT
                g.id,
                g.title,
                g.banner_url,
                COUNT(a.id) AS ad_count
            FROM games g
            LEFT JOIN ads a ON a.game_id = g.id
            GROUP BY g.id, g.title, g.banner_url
            ORDER BY g.title ASC
            "#,
        )
        .fetch_all(&*self.db)
        .await
    }
}
