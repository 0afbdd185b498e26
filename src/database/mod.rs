// 数据库模块
// 包含数据库实体定义、存储接口和 Postgres 实现

pub mod models; // 数据库实体定义
pub mod operations; // Postgres 操作实现
pub mod store; // 存储接口

#[cfg(test)]
pub mod memory;

use sqlx::PgPool;
use sqlx::migrate::MigrateError;

// 重新导出常用类型，方便其他模块使用
pub use operations::PgAdStore;
pub use store::{AdStore, StoreError};

/// 执行 migrations 目录下的建表脚本
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("开始执行数据库迁移");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("数据库迁移完成");
    Ok(())
}
