use std::sync::Arc;
use crate::config::AppConfig;
use crate::domains::pickup::services::state::PickupState;
use crate::shared::database::PickupStore;
use crate::shared::utils::pickup_code::{GenerateCode, PickupCodeGenerator};

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 저장소는 main에서 결정 (PostgreSQL 또는 메모리)
#[derive(Clone)]
pub struct AppState {
    pub pickup_state: PickupState,
}

impl AppState {
    /// Create AppState with a pickup store
    /// 실제 픽업 코드 생성기 사용
    pub fn new(config: &AppConfig, store: Arc<dyn PickupStore>) -> Self {
        Self::with_generator(config, store, Arc::new(PickupCodeGenerator::new()))
    }

    /// 코드 생성기를 직접 지정 (테스트에서 결정적인 코드 사용)
    pub fn with_generator(
        config: &AppConfig,
        store: Arc<dyn PickupStore>,
        generator: Arc<dyn GenerateCode>,
    ) -> Self {
        let pickup_state = PickupState::new(store, generator, config.pickup_max_attempts);

        Self { pickup_state }
    }
}
