use async_trait::async_trait;
use sqlx::{PgPool, Row};
use anyhow::Context;
use chrono::{DateTime, Utc};
use crate::domains::pickup::models::{NewOrderPickup, OrderPickup, STATUS_COLLECTED, STATUS_READY};
use crate::shared::errors::StoreError;

/// Postgres unique_violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";
const PICKUP_CODE_CONSTRAINT: &str = "order_pickups_pickup_code_key";
const ORDER_ID_CONSTRAINT: &str = "order_pickups_order_id_key";

/// 픽업 저장소 추상화
/// Pickup store abstraction
///
/// 구현체:
/// - PickupRepository: PostgreSQL
/// - InMemoryPickupStore: DATABASE_URL 미설정 시 / 테스트용
///
/// 두 구현 모두 pickup_code, order_id 유니크를 보장해야 함
#[async_trait]
pub trait PickupStore: Send + Sync {
    /// 픽업 저장
    /// Insert a pickup; uniqueness violations come back as
    /// `StoreError::DuplicateCode` / `StoreError::DuplicateOrder`
    async fn insert(&self, pickup: NewOrderPickup) -> Result<OrderPickup, StoreError>;

    async fn find_by_code(&self, pickup_code: &str) -> Result<Option<OrderPickup>, StoreError>;

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<OrderPickup>, StoreError>;

    /// ready → collected 전환
    /// Transition ready → collected; `None` when no ready pickup has this code
    async fn mark_collected(
        &self,
        pickup_code: &str,
        collected_at: DateTime<Utc>,
    ) -> Result<Option<OrderPickup>, StoreError>;
}

pub struct PickupRepository {
    pool: PgPool,
}

impl PickupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Row를 OrderPickup으로 변환하는 헬퍼 메서드
    /// Helper method to convert Row to OrderPickup
    fn row_to_pickup(&self, row: &sqlx::postgres::PgRow) -> OrderPickup {
        OrderPickup {
            id: row.get::<i64, _>("id") as u64,
            order_id: row.get("order_id"),
            pickup_code: row.get("pickup_code"),
            total_amount: row.get("total_amount"),
            status: row.get("status"),
            created_at: row.get("created_at"),
            collected_at: row.get("collected_at"),
        }
    }
}

/// 유니크 제약 위반을 StoreError로 분류
/// Classify unique violations by constraint name
fn classify_insert_error(err: sqlx::Error, pickup: &NewOrderPickup) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            match db_err.constraint() {
                Some(PICKUP_CODE_CONSTRAINT) => {
                    return StoreError::DuplicateCode {
                        code: pickup.pickup_code.clone(),
                    };
                }
                Some(ORDER_ID_CONSTRAINT) => {
                    return StoreError::DuplicateOrder {
                        order_id: pickup.order_id.clone(),
                    };
                }
                _ => {}
            }
        }
    }

    StoreError::Backend(anyhow::Error::new(err).context("Failed to insert order pickup"))
}

#[async_trait]
impl PickupStore for PickupRepository {
    async fn insert(&self, pickup: NewOrderPickup) -> Result<OrderPickup, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO order_pickups (order_id, pickup_code, total_amount, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, order_id, pickup_code, total_amount, status, created_at, collected_at
            "#,
        )
        .bind(&pickup.order_id)
        .bind(&pickup.pickup_code)
        .bind(pickup.total_amount)
        .bind(STATUS_READY)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify_insert_error(e, &pickup))?;

        Ok(self.row_to_pickup(&row))
    }

    async fn find_by_code(&self, pickup_code: &str) -> Result<Option<OrderPickup>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, order_id, pickup_code, total_amount, status, created_at, collected_at
            FROM order_pickups
            WHERE pickup_code = $1
            "#,
        )
        .bind(pickup_code)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch order pickup by code")?;

        Ok(row.map(|r| self.row_to_pickup(&r)))
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<OrderPickup>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, order_id, pickup_code, total_amount, status, created_at, collected_at
            FROM order_pickups
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch order pickup by order id")?;

        Ok(row.map(|r| self.row_to_pickup(&r)))
    }

    async fn mark_collected(
        &self,
        pickup_code: &str,
        collected_at: DateTime<Utc>,
    ) -> Result<Option<OrderPickup>, StoreError> {
        // status 조건으로 이중 수령 방지
        let row = sqlx::query(
            r#"
            UPDATE order_pickups
            SET status = $2, collected_at = $3
            WHERE pickup_code = $1 AND status = $4
            RETURNING id, order_id, pickup_code, total_amount, status, created_at, collected_at
            "#,
        )
        .bind(pickup_code)
        .bind(STATUS_COLLECTED)
        .bind(collected_at)
        .bind(STATUS_READY)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to mark order pickup as collected")?;

        Ok(row.map(|r| self.row_to_pickup(&r)))
    }
}
