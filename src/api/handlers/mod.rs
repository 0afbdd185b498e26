// API 处理器模块
// 包含所有 API 请求处理逻辑

pub mod ad;
pub mod game;
pub mod health;

// 重新导出常用处理器
pub use ad::*;
pub use game::*;
pub use health::*;
