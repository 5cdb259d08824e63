use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::shared::utils::currency::format_inr_decimal;

// =====================================================
// OrderPickup 모델
// =====================================================
// 역할: 매장 수령용 픽업 정보
// 설명: 인쇄 주문 하나당 픽업 코드 하나가 발급됨
//
// 픽업 상태:
// - ready: 수령 대기
// - collected: 수령 완료
// =====================================================

/// 수령 대기
pub const STATUS_READY: &str = "ready";
/// 수령 완료
pub const STATUS_COLLECTED: &str = "collected";

/// 픽업 정보 (저장소에서 조회한 픽업)
/// Pickup record (as stored)
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[schema(as = OrderPickup)]
pub struct OrderPickup {
    /// Pickup ID (BIGSERIAL)
    pub id: u64,

    /// 주문 ID (스토어프론트 주문 번호)
    /// Storefront order ID
    #[schema(example = "ORD-10293")]
    pub order_id: String,

    /// 픽업 코드
    /// Pickup code shown to the customer
    #[schema(example = "PU-250307-K3Z9Q")]
    pub pickup_code: String,

    /// 주문 총액 (INR)
    /// Order total (INR)
    #[schema(value_type = String, example = "1499.50")]
    pub total_amount: Decimal,

    /// 상태: 'ready' 또는 'collected'
    #[schema(example = "ready")]
    pub status: String,

    pub created_at: DateTime<Utc>,

    /// 수령 시간 (수령 전에는 NULL)
    pub collected_at: Option<DateTime<Utc>>,
}

/// 저장 전 픽업 (ID, 상태, 시간은 저장소가 채움)
/// Pickup to be inserted
#[derive(Debug, Clone)]
pub struct NewOrderPickup {
    pub order_id: String,
    pub pickup_code: String,
    pub total_amount: Decimal,
}

// =====================================================
// 픽업 생성 요청 (Create Pickup Request)
// =====================================================
/// 픽업 생성 요청 모델
/// Request model for issuing a pickup code
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = CreatePickupRequest)]
pub struct CreatePickupRequest {
    /// 주문 ID
    #[schema(example = "ORD-10293")]
    pub order_id: String,

    /// 주문 총액 (INR)
    #[schema(value_type = String, example = "1499.50")]
    pub total_amount: Decimal,
}

/// 픽업 응답 모델 (표시용 금액 포함)
/// Pickup response (with display amount)
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[schema(as = PickupResponse)]
pub struct PickupResponse {
    #[serde(flatten)]
    pub pickup: OrderPickup,

    /// 표시용 총액
    /// Display total
    #[schema(example = "₹1,499.50")]
    pub formatted_total: String,
}

impl From<OrderPickup> for PickupResponse {
    fn from(pickup: OrderPickup) -> Self {
        let formatted_total = format_inr_decimal(pickup.total_amount);
        Self {
            pickup,
            formatted_total,
        }
    }
}

/// 금액 포맷 응답
/// Currency format response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = FormattedAmountResponse)]
pub struct FormattedAmountResponse {
    /// 입력 금액 (NaN/무한대는 null)
    pub amount: Option<f64>,

    #[schema(example = "₹12,34,567.89")]
    pub formatted: String,
}
