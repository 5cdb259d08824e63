use axum::{
    routing::{get, post},
    Router,
};
use crate::shared::services::AppState;

use super::handlers;

/// 픽업 라우터 생성
/// Create pickup router
///
/// # Routes
/// - `POST   /api/pickups` - 픽업 코드 발급
/// - `GET    /api/pickups/:pickup_code` - 픽업 코드로 조회
/// - `GET    /api/pickups/order/:order_id` - 주문 ID로 조회
/// - `POST   /api/pickups/:pickup_code/collect` - 매장 수령 처리
pub fn create_pickup_router() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_pickup))
        .route("/order/:order_id", get(handlers::get_pickup_by_order))
        .route("/:pickup_code", get(handlers::get_pickup))
        .route("/:pickup_code/collect", post(handlers::collect_pickup))
}

/// 통화 라우터 생성
/// Create currency router
///
/// # Routes
/// - `GET    /api/currency/format?amount=` - 금액 포맷
pub fn create_currency_router() -> Router<AppState> {
    Router::new().route("/format", get(handlers::format_amount))
}
