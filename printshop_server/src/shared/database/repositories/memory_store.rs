use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domains::pickup::models::{NewOrderPickup, OrderPickup, STATUS_COLLECTED, STATUS_READY};
use crate::shared::errors::StoreError;
use super::pickup_repository::PickupStore;

/// 메모리 기반 픽업 저장소
/// In-memory pickup store
///
/// DATABASE_URL 없이 서버를 띄울 때, 그리고 테스트에서 사용
/// PostgreSQL 테이블과 같은 유니크 규칙 적용 (pickup_code, order_id)
pub struct InMemoryPickupStore {
    pickups: RwLock<PickupTables>,
    next_id: AtomicU64,
}

/// 두 맵은 항상 같은 lock 아래에서 함께 갱신
#[derive(Default)]
struct PickupTables {
    /// pickup_code → OrderPickup
    by_code: HashMap<String, OrderPickup>,
    /// order_id → pickup_code
    code_by_order: HashMap<String, String>,
}

impl InMemoryPickupStore {
    pub fn new() -> Self {
        Self {
            pickups: RwLock::new(PickupTables::default()),
            next_id: AtomicU64::new(1),
        }
    }

    /// 저장된 픽업 수 (디버깅/테스트용)
    pub fn len(&self) -> usize {
        self.pickups.read().by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickups.read().by_code.is_empty()
    }
}

impl Default for InMemoryPickupStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PickupStore for InMemoryPickupStore {
    async fn insert(&self, pickup: NewOrderPickup) -> Result<OrderPickup, StoreError> {
        // 검사와 삽입을 같은 write lock 안에서 수행
        let mut pickups = self.pickups.write();

        if pickups.by_code.contains_key(&pickup.pickup_code) {
            return Err(StoreError::DuplicateCode {
                code: pickup.pickup_code,
            });
        }
        if pickups.code_by_order.contains_key(&pickup.order_id) {
            return Err(StoreError::DuplicateOrder {
                order_id: pickup.order_id,
            });
        }

        let stored = OrderPickup {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            order_id: pickup.order_id.clone(),
            pickup_code: pickup.pickup_code.clone(),
            total_amount: pickup.total_amount,
            status: STATUS_READY.to_string(),
            created_at: Utc::now(),
            collected_at: None,
        };
        pickups
            .code_by_order
            .insert(pickup.order_id, pickup.pickup_code.clone());
        pickups.by_code.insert(pickup.pickup_code, stored.clone());

        Ok(stored)
    }

    async fn find_by_code(&self, pickup_code: &str) -> Result<Option<OrderPickup>, StoreError> {
        Ok(self.pickups.read().by_code.get(pickup_code).cloned())
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<OrderPickup>, StoreError> {
        let pickups = self.pickups.read();

        Ok(pickups
            .code_by_order
            .get(order_id)
            .and_then(|code| pickups.by_code.get(code))
            .cloned())
    }

    async fn mark_collected(
        &self,
        pickup_code: &str,
        collected_at: DateTime<Utc>,
    ) -> Result<Option<OrderPickup>, StoreError> {
        let mut pickups = self.pickups.write();

        match pickups.by_code.get_mut(pickup_code) {
            Some(pickup) if pickup.status == STATUS_READY => {
                pickup.status = STATUS_COLLECTED.to_string();
                pickup.collected_at = Some(collected_at);
                Ok(Some(pickup.clone()))
            }
            _ => Ok(None),
        }
    }
}
