// Pickup Service
// 픽업 서비스
// 역할: 픽업 코드 발급 (중복 시 재시도), 조회, 수령 처리

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::domains::pickup::models::{NewOrderPickup, OrderPickup};
use crate::shared::database::PickupStore;
use crate::shared::errors::{PickupError, StoreError};
use crate::shared::utils::pickup_code::{is_valid_pickup_code, normalize_pickup_code, GenerateCode};

/// 기본 코드 발급 시도 횟수
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// 주문 ID 최대 길이 (order_pickups.order_id VARCHAR(64))
pub const MAX_ORDER_ID_LEN: usize = 64;

/// 최대 주문 총액 (order_pickups.total_amount NUMERIC(14, 2))
pub const MAX_TOTAL_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// 픽업 서비스
/// Pickup Service
///
/// 역할:
/// - 주문에 픽업 코드 발급
/// - 코드 중복(유니크 제약 위반) 시 새 코드로 재시도
/// - 픽업 코드/주문 ID로 조회
/// - 매장 수령 처리 (ready → collected)
///
/// 코드 생성기 자체는 유일성을 보장하지 않음.
/// 유일성은 저장소의 유니크 제약이 보장하고, 재시도는 이 서비스가 담당함.
#[derive(Clone)]
pub struct PickupService {
    store: Arc<dyn PickupStore>,
    generator: Arc<dyn GenerateCode>,
    max_attempts: u32,
}

impl PickupService {
    /// 생성자
    /// Constructor
    ///
    /// # Arguments
    /// * `store` - 픽업 저장소 (PostgreSQL 또는 메모리)
    /// * `generator` - 픽업 코드 생성기
    /// * `max_attempts` - 코드 중복 시 최대 시도 횟수 (최소 1)
    pub fn new(
        store: Arc<dyn PickupStore>,
        generator: Arc<dyn GenerateCode>,
        max_attempts: u32,
    ) -> Self {
        Self {
            store,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// 픽업 코드 발급
    /// Issue a pickup code for an order
    ///
    /// # Arguments
    /// * `order_id` - 주문 ID (앞뒤 공백 제거)
    /// * `total_amount` - 주문 총액 (소수점 2자리로 반올림하여 저장)
    ///
    /// # Returns
    /// * `Ok(OrderPickup)` - 발급된 픽업
    /// * `Err(PickupError::OrderIdTooLong)` / `Err(PickupError::AmountTooLarge)` - 컬럼 범위 초과
    /// * `Err(PickupError::AlreadyExists)` - 이미 픽업이 있는 주문
    /// * `Err(PickupError::CodeSpaceExhausted)` - 재시도 횟수 내에 유일한 코드를 못 만듦
    ///
    /// # Examples
    /// ```ignore
    /// let pickup = pickup_service.create_pickup("ORD-10293", Decimal::new(149950, 2)).await?;
    /// println!("픽업 코드: {}", pickup.pickup_code);
    /// ```
    pub async fn create_pickup(
        &self,
        order_id: &str,
        total_amount: Decimal,
    ) -> Result<OrderPickup, PickupError> {
        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Err(PickupError::OrderIdRequired);
        }
        if order_id.chars().count() > MAX_ORDER_ID_LEN {
            return Err(PickupError::OrderIdTooLong {
                max: MAX_ORDER_ID_LEN,
            });
        }
        if total_amount.is_sign_negative() && !total_amount.is_zero() {
            return Err(PickupError::NegativeAmount {
                amount: total_amount.to_string(),
            });
        }
        let total_amount =
            total_amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if total_amount > MAX_TOTAL_AMOUNT {
            return Err(PickupError::AmountTooLarge {
                amount: total_amount.to_string(),
            });
        }

        for attempt in 1..=self.max_attempts {
            let pickup_code = self.generator.generate();

            let new_pickup = NewOrderPickup {
                order_id: order_id.to_string(),
                pickup_code,
                total_amount,
            };

            match self.store.insert(new_pickup).await {
                Ok(pickup) => {
                    info!(
                        order_id = %pickup.order_id,
                        pickup_code = %pickup.pickup_code,
                        attempt,
                        "Pickup code issued"
                    );
                    return Ok(pickup);
                }
                Err(StoreError::DuplicateCode { code }) => {
                    warn!(
                        order_id,
                        pickup_code = %code,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Pickup code collision, retrying"
                    );
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(PickupError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// 픽업 코드로 조회 (입력은 정규화 후 형식 검사)
    /// Get pickup by code
    pub async fn get_pickup(&self, pickup_code: &str) -> Result<OrderPickup, PickupError> {
        let code = Self::parse_code(pickup_code)?;

        self.store
            .find_by_code(&code)
            .await?
            .ok_or(PickupError::NotFound { key: code })
    }

    /// 주문 ID로 조회
    /// Get pickup by order ID
    pub async fn get_pickup_by_order(&self, order_id: &str) -> Result<OrderPickup, PickupError> {
        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Err(PickupError::OrderIdRequired);
        }

        self.store
            .find_by_order_id(order_id)
            .await?
            .ok_or_else(|| PickupError::NotFound {
                key: order_id.to_string(),
            })
    }

    /// 매장 수령 처리
    /// Mark a pickup as collected
    ///
    /// # Returns
    /// * `Err(PickupError::NotFound)` - 없는 코드
    /// * `Err(PickupError::AlreadyCollected)` - 이미 수령된 픽업
    pub async fn collect_pickup(&self, pickup_code: &str) -> Result<OrderPickup, PickupError> {
        let code = Self::parse_code(pickup_code)?;

        if let Some(pickup) = self.store.mark_collected(&code, Utc::now()).await? {
            info!(pickup_code = %pickup.pickup_code, order_id = %pickup.order_id, "Pickup collected");
            return Ok(pickup);
        }

        // 전환 실패: 없는 코드인지 이미 수령된 코드인지 구분
        match self.store.find_by_code(&code).await? {
            Some(_) => Err(PickupError::AlreadyCollected { code }),
            None => Err(PickupError::NotFound { key: code }),
        }
    }

    fn parse_code(input: &str) -> Result<String, PickupError> {
        let code = normalize_pickup_code(input);
        if !is_valid_pickup_code(&code) {
            return Err(PickupError::InvalidCode { code });
        }
        Ok(code)
    }
}
