//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be exercised against mocks without a store.

use std::sync::Arc;

use crate::domain::ports::{RecordAdmin, StoreHealth};
use crate::domain::{Assignment, Module, User};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn RecordAdmin<User>>,
    pub modules: Arc<dyn RecordAdmin<Module>>,
    pub assignments: Arc<dyn RecordAdmin<Assignment>>,
    pub store_health: Arc<dyn StoreHealth>,
}

impl HttpState {
    /// Bundle the per-record ports with the store health check.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use academic_backend::domain::{Assignment, Module, RecordService, User};
    /// use academic_backend::inbound::http::state::HttpState;
    /// use academic_backend::outbound::memory::InMemoryDocumentStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryDocumentStore::new());
    /// let clock: Arc<dyn mockable::Clock> = Arc::new(DefaultClock);
    /// let state = HttpState::new(
    ///     Arc::new(RecordService::<User, _>::new(Arc::clone(&store), Arc::clone(&clock))),
    ///     Arc::new(RecordService::<Module, _>::new(Arc::clone(&store), Arc::clone(&clock))),
    ///     Arc::new(RecordService::<Assignment, _>::new(Arc::clone(&store), clock)),
    ///     store,
    /// );
    /// let _users = Arc::clone(&state.users);
    /// ```
    pub fn new(
        users: Arc<dyn RecordAdmin<User>>,
        modules: Arc<dyn RecordAdmin<Module>>,
        assignments: Arc<dyn RecordAdmin<Assignment>>,
        store_health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            users,
            modules,
            assignments,
            store_health,
        }
    }
}
