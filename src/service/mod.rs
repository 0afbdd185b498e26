// 业务服务模块

pub mod listing;

pub use listing::ListingService;
