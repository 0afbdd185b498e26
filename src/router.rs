use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::api::handlers;
use crate::middleware::log_errors;

// 游戏与广告相关的路由
fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(handlers::list_games))
        .route(
            "/games/{game_id}/ads",
            get(handlers::list_ads).post(handlers::create_ad),
        )
        .route("/ads/{ad_id}/discord", get(handlers::get_ad_discord))
        .route("/health", get(handlers::ping))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let base_uri = state.config.api_base_uri.clone();
    let router = if base_uri.is_empty() {
        listing_routes()
    } else {
        Router::new().nest(&base_uri, listing_routes())
    };

    router
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TimeoutLayer::new(state.config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
