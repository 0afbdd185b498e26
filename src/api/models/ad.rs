// 广告相关的数据结构定义（传输形式）

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// 创建广告请求
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    /// 发布者昵称
    pub name: String,
    /// 游戏年限
    pub years_playing: u32,
    /// Discord 联系方式
    pub discord: String,
    /// 可游戏的星期，0 为周日
    #[serde(deserialize_with = "deserialize_week_days")]
    pub week_days: Vec<u8>,
    /// 开始时间 "HH:MM"
    pub hour_start: String,
    /// 结束时间 "HH:MM"
    pub hour_end: String,
    /// 是否使用语音频道
    pub use_voice_channel: bool,
}

/// 创建广告响应，与列表使用同一套传输形式
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdResponse {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: Vec<u8>,
    pub hour_start: String,
    pub hour_end: String,
    pub use_voice_channel: bool,
    pub created_at: DateTime<Utc>,
}

/// 广告列表项，不包含联系方式
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListItem {
    pub id: String,
    pub name: String,
    pub week_days: Vec<u8>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
}

/// 广告联系方式响应
#[derive(Debug, Serialize, Deserialize)]
pub struct AdContactResponse {
    pub discord: String,
}

// 星期既可以是数字也可以是数字字符串，旧版网页端发送的是字符串
#[derive(Deserialize)]
#[serde(untagged)]
enum WeekDayInput {
    Code(u8),
    Text(String),
}

fn deserialize_week_days<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<WeekDayInput>::deserialize(deserializer)?
        .into_iter()
        .map(|entry| match entry {
            WeekDayInput::Code(code) => Ok(code),
            WeekDayInput::Text(text) => text
                .trim()
                .parse::<u8>()
                .map_err(|_| de::Error::custom(format!("invalid weekday {text:?}"))),
        })
        .collect()
}
