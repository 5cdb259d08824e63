use crate::domains::pickup::models::{CreatePickupRequest, PickupResponse};
use crate::shared::middleware::{ApiRejection, ValidJson};
use crate::shared::services::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

// =====================================================
// Pickup Handler
// =====================================================
// 역할: 매장 수령 픽업 관련 HTTP API 엔드포인트
//
// 특징:
// - 코드 발급 시 중복 재시도는 서비스가 처리 (클라이언트는 모름)
// - 모든 응답에 표시용 금액(formatted_total) 포함
// =====================================================

type ApiError = ApiRejection;

/// 픽업 코드 발급 핸들러
/// Issue pickup code handler
///
/// # Response
/// - 201: 발급 성공
/// - 400: 잘못된 본문 / 주문 ID 누락·초과 / 금액 범위 초과
/// - 409: 이미 픽업이 있는 주문
/// - 503: 유일한 코드 발급 실패
#[utoipa::path(
    post,
    path = "/api/pickups",
    request_body = CreatePickupRequest,
    responses(
        (status = 201, description = "Pickup code issued", body = PickupResponse),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Order already has a pickup"),
        (status = 503, description = "Could not allocate a unique pickup code")
    ),
    tag = "Pickups"
)]
pub async fn create_pickup(
    State(app_state): State<AppState>,
    ValidJson(request): ValidJson<CreatePickupRequest>,
) -> Result<(StatusCode, Json<PickupResponse>), ApiError> {
    let pickup = app_state
        .pickup_state
        .pickup_service
        .create_pickup(&request.order_id, request.total_amount)
        .await?;

    Ok((StatusCode::CREATED, Json(pickup.into())))
}

/// 픽업 코드로 조회 핸들러
/// Get pickup by code handler
///
/// 코드는 대소문자/앞뒤 공백 무시
#[utoipa::path(
    get,
    path = "/api/pickups/{pickup_code}",
    params(
        ("pickup_code" = String, Path, description = "Pickup code (PU-YYMMDD-XXXXX)")
    ),
    responses(
        (status = 200, description = "Pickup found", body = PickupResponse),
        (status = 400, description = "Malformed pickup code"),
        (status = 404, description = "Pickup not found")
    ),
    tag = "Pickups"
)]
pub async fn get_pickup(
    State(app_state): State<AppState>,
    Path(pickup_code): Path<String>,
) -> Result<Json<PickupResponse>, ApiError> {
    let pickup = app_state
        .pickup_state
        .pickup_service
        .get_pickup(&pickup_code)
        .await?;

    Ok(Json(pickup.into()))
}

/// 주문 ID로 픽업 조회 핸들러
/// Get pickup by order ID handler
#[utoipa::path(
    get,
    path = "/api/pickups/order/{order_id}",
    params(
        ("order_id" = String, Path, description = "Storefront order ID")
    ),
    responses(
        (status = 200, description = "Pickup found", body = PickupResponse),
        (status = 404, description = "No pickup for this order")
    ),
    tag = "Pickups"
)]
pub async fn get_pickup_by_order(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<PickupResponse>, ApiError> {
    let pickup = app_state
        .pickup_state
        .pickup_service
        .get_pickup_by_order(&order_id)
        .await?;

    Ok(Json(pickup.into()))
}

/// 매장 수령 처리 핸들러
/// Collect pickup handler
///
/// # Response
/// - 200: 수령 완료
/// - 404: 없는 코드
/// - 409: 이미 수령됨
#[utoipa::path(
    post,
    path = "/api/pickups/{pickup_code}/collect",
    params(
        ("pickup_code" = String, Path, description = "Pickup code (PU-YYMMDD-XXXXX)")
    ),
    responses(
        (status = 200, description = "Pickup collected", body = PickupResponse),
        (status = 400, description = "Malformed pickup code"),
        (status = 404, description = "Pickup not found"),
        (status = 409, description = "Pickup already collected")
    ),
    tag = "Pickups"
)]
pub async fn collect_pickup(
    State(app_state): State<AppState>,
    Path(pickup_code): Path<String>,
) -> Result<Json<PickupResponse>, ApiError> {
    let pickup = app_state
        .pickup_state
        .pickup_service
        .collect_pickup(&pickup_code)
        .await?;

    Ok(Json(pickup.into()))
}
