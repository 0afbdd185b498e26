// 游戏处理器

use axum::{Json, extract::State};

use crate::AppState;
use crate::api::models::GameResponse;
use crate::error::AppError;
use crate::service::ListingService;

/// 获取游戏列表及各游戏的广告数量
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameResponse>>, AppError> {
    let service = ListingService::new(state.store.clone());
    let games = service.list_games().await?;
    Ok(Json(games))
}
