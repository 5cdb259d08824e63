use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use tracing::error;

/// 픽업 저장소 에러
/// Pickup store errors
///
/// 유니크 제약 위반을 구분해야 서비스가 재시도 여부를 판단할 수 있음
#[derive(Error, Debug)]
pub enum StoreError {
    /// 픽업 코드 중복 (재시도 대상)
    /// Pickup code already taken
    #[error("Pickup code already exists: {code}")]
    DuplicateCode { code: String },

    /// 이미 픽업이 등록된 주문
    /// Order already has a pickup
    #[error("Pickup already exists for order: {order_id}")]
    DuplicateOrder { order_id: String },

    /// 그 외 백엔드 에러
    /// Any other backend failure
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// 픽업 관련 에러
/// Pickup-related errors
#[derive(Error, Debug)]
pub enum PickupError {
    /// 주문 ID 누락
    /// Order ID missing
    #[error("Order ID is required")]
    OrderIdRequired,

    /// 음수 금액
    /// Negative total amount
    #[error("Total amount must not be negative: {amount}")]
    NegativeAmount { amount: String },

    /// 주문 ID 길이 초과
    /// Order ID longer than the column allows
    #[error("Order ID must be at most {max} characters")]
    OrderIdTooLong { max: usize },

    /// 금액 한도 초과 (NUMERIC(14, 2))
    /// Total amount above the storable maximum
    #[error("Total amount is too large: {amount}")]
    AmountTooLarge { amount: String },

    /// 잘못된 픽업 코드 형식
    /// Malformed pickup code
    #[error("Invalid pickup code: {code}")]
    InvalidCode { code: String },

    /// 이미 픽업이 존재하는 주문
    /// Pickup already exists for the order
    #[error("Pickup already exists for order: {order_id}")]
    AlreadyExists { order_id: String },

    /// 픽업을 찾을 수 없음
    /// Pickup not found
    #[error("Pickup not found: {key}")]
    NotFound { key: String },

    /// 이미 수령 완료된 픽업
    /// Pickup already collected
    #[error("Pickup already collected: {code}")]
    AlreadyCollected { code: String },

    /// 재시도 횟수 내에 유일한 코드를 만들지 못함
    /// No unique code within the retry budget
    #[error("Could not allocate a unique pickup code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<StoreError> for PickupError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateOrder { order_id } => PickupError::AlreadyExists { order_id },
            StoreError::Backend(source) => {
                error!(error = ?source, "Pickup store failure");
                // {:#}: context 체인 전체 유지
                PickupError::DatabaseError(format!("{source:#}"))
            }
            other => {
                error!(error = %other, "Unexpected pickup store conflict");
                PickupError::DatabaseError(other.to_string())
            }
        }
    }
}

/// PickupError를 HTTP 응답으로 변환
impl From<PickupError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: PickupError) -> Self {
        let status = match &err {
            PickupError::OrderIdRequired
            | PickupError::NegativeAmount { .. }
            | PickupError::OrderIdTooLong { .. }
            | PickupError::AmountTooLarge { .. }
            | PickupError::InvalidCode { .. } => StatusCode::BAD_REQUEST,
            PickupError::NotFound { .. } => StatusCode::NOT_FOUND,
            PickupError::AlreadyExists { .. } | PickupError::AlreadyCollected { .. } => {
                StatusCode::CONFLICT
            }
            PickupError::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PickupError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
