use axum::Json;

use crate::api::models::PingResponse;

/// 健康检查接口
pub async fn ping() -> Json<PingResponse> {
    let now = chrono::Utc::now();

    Json(PingResponse {
        status: "ok".to_string(),
        timestamp: now.timestamp(),
    })
}
