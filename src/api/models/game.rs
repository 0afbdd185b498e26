// 游戏相关的数据结构定义

use serde::{Deserialize, Serialize};

/// 游戏列表项
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// 游戏ID
    pub id: String,
    /// 游戏名称
    pub title: String,
    /// 封面图片地址
    pub banner_url: String,
    /// 广告数量
    pub ad_count: i64,
}
