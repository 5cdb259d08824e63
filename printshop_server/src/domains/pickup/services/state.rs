// Pickup domain state
// 픽업 도메인 상태
use std::sync::Arc;

use crate::domains::pickup::services::PickupService;
use crate::shared::database::PickupStore;
use crate::shared::utils::pickup_code::GenerateCode;

/// Pickup domain state
/// 픽업 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct PickupState {
    pub pickup_service: PickupService,
}

impl PickupState {
    /// Create PickupState with a store and code generator
    pub fn new(
        store: Arc<dyn PickupStore>,
        generator: Arc<dyn GenerateCode>,
        max_attempts: u32,
    ) -> Self {
        Self {
            pickup_service: PickupService::new(store, generator, max_attempts),
        }
    }
}
