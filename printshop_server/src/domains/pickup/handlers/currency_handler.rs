use crate::domains::pickup::models::FormattedAmountResponse;
use crate::shared::middleware::ValidQuery;
use crate::shared::utils::currency::format_inr;
use axum::Json;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// 금액 포맷 쿼리 파라미터
/// Query parameters for currency formatting
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormatAmountQuery {
    /// 금액 ("NaN", "inf" 허용)
    /// Amount ("NaN" and "inf" accepted)
    pub amount: f64,
}

/// 금액 포맷 핸들러
/// Format amount handler
///
/// 주문 요약 화면 등에서 서버와 같은 표기를 쓰기 위한 엔드포인트
#[utoipa::path(
    get,
    path = "/api/currency/format",
    params(
        FormatAmountQuery
    ),
    responses(
        (status = 200, description = "Formatted amount", body = FormattedAmountResponse),
        (status = 400, description = "Amount is not a number")
    ),
    tag = "Currency"
)]
pub async fn format_amount(
    ValidQuery(query): ValidQuery<FormatAmountQuery>,
) -> Json<FormattedAmountResponse> {
    Json(FormattedAmountResponse {
        amount: query.amount.is_finite().then_some(query.amount),
        formatted: format_inr(query.amount),
    })
}
