// 游戏实体
// 游戏由运营方预先录入，本服务只读

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 游戏实体，对应数据库中的 games 表
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameEntity {
    /// 游戏ID
    pub id: String,
    /// 游戏名称
    pub title: String,
    /// 封面图片地址
    pub banner_url: String,
}

/// 带广告数量的游戏，用于游戏列表查询
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameWithAdCountEntity {
    pub id: String,
    pub title: String,
    pub banner_url: String,
    /// 该游戏下的广告数量
    pub ad_count: i64,
}
