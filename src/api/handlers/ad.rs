// 广告处理器
// 处理广告相关的API请求

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::AppState;
use crate::api::models::{AdContactResponse, AdListItem, CreateAdRequest, CreateAdResponse};
use crate::error::AppError;
use crate::service::ListingService;

/// 为游戏创建广告
pub async fn create_ad(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    payload: Result<Json<CreateAdRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAdResponse>), AppError> {
    let Json(request) = payload?;
    tracing::debug!("游戏 {} 收到新广告，发布者: {}", game_id, request.name);

    let service = ListingService::new(state.store.clone());
    let ad = service.create_ad(&game_id, request).await?;

    Ok((StatusCode::CREATED, Json(ad)))
}

/// 获取游戏下的广告列表
pub async fn list_ads(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<AdListItem>>, AppError> {
    let service = ListingService::new(state.store.clone());
    Ok(Json(service.list_ads_for_game(&game_id).await?))
}

/// 获取广告的 Discord
pub async fn get_ad_discord(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<Json<AdContactResponse>, AppError> {
    let service = ListingService::new(state.store.clone());
    Ok(Json(service.get_ad_contact(&ad_id).await?))
}
