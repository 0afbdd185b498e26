// 广告实体
// 定义组队广告相关的数据库实体（存储形式）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 广告实体，对应数据库中的 ads 表
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdEntity {
    /// 广告ID
    pub id: String,
    /// 所属游戏ID
    pub game_id: String,
    /// 发布者昵称
    pub name: String,
    /// 游戏年限
    pub years_playing: i32,
    /// Discord 联系方式
    pub discord: String,
    /// 可游戏的星期，逗号拼接，如 "1,3,5"
    pub week_days: String,
    /// 开始时间，午夜起算的分钟数
    pub hour_start: i32,
    /// 结束时间，午夜起算的分钟数
    pub hour_end: i32,
    /// 是否使用语音频道
    pub use_voice_channel: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 广告列表查询的投影，不含 discord 与 game_id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdSummaryEntity {
    pub id: String,
    pub name: String,
    pub week_days: String,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: i32,
    pub hour_end: i32,
}

/// 新建广告所需字段（已转换为存储形式）
#[derive(Debug, Clone)]
pub struct NewAdEntity {
    pub game_id: String,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
}
