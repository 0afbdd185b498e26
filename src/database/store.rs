// 存储接口
// 服务层只依赖该 trait，Postgres 与内存实现均满足它

use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::{AdEntity, AdSummaryEntity, GameWithAdCountEntity, NewAdEntity};

// Postgres 错误码
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";
const NOT_NULL_VIOLATION: &str = "23502";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("referenced record does not exist: {0}")]
    ForeignKeyViolation(String),

    #[error("constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    StoreError::ForeignKeyViolation(db_err.message().to_string())
                }
                Some(UNIQUE_VIOLATION | CHECK_VIOLATION | NOT_NULL_VIOLATION) => {
                    StoreError::ConstraintViolation(db_err.message().to_string())
                }
                _ => StoreError::Database(sqlx::Error::Database(db_err)),
            },
            other => StoreError::Database(other),
        }
    }
}

/// 游戏与广告的持久化接口
#[async_trait]
pub trait AdStore: Send + Sync {
    /// 查询所有游戏及其广告数量，按名称排序
    async fn list_games_with_ad_count(&self) -> Result<Vec<GameWithAdCountEntity>, StoreError>;

    /// 新建广告，ID 与创建时间由存储分配
    async fn create_ad(&self, new_ad: NewAdEntity) -> Result<AdEntity, StoreError>;

    /// 查询游戏下的广告，最新的在前
    async fn list_ads_by_game(&self, game_id: &str) -> Result<Vec<AdSummaryEntity>, StoreError>;

    /// 查询广告的 Discord，不存在时返回 NotFound
    async fn find_ad_discord(&self, ad_id: &str) -> Result<String, StoreError>;
}
