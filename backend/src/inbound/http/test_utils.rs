//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{MockRecordAdmin, MockStoreHealth, StoreHealth};
use crate::domain::{Assignment, Module, User};

use super::state::HttpState;

/// Mocks for every port; set expectations on the ones a test exercises.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockRecordAdmin<User>,
    pub modules: MockRecordAdmin<Module>,
    pub assignments: MockRecordAdmin<Assignment>,
    pub store_health: MockStoreHealth,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.users),
            Arc::new(self.modules),
            Arc::new(self.assignments),
            Arc::new(self.store_health),
        )
    }
}

/// State whose record ports expect no calls.
pub fn http_state_with_health(store_health: Arc<dyn StoreHealth>) -> HttpState {
    let ports = MockPorts::default().into_state();
    HttpState {
        store_health,
        ..ports
    }
}
