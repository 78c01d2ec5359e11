//! Builders wiring one document store into the three record services.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{RecordStore, StoreHealth};
use crate::domain::{Assignment, Error, Module, RecordService, User};
use crate::inbound::http::state::HttpState;

/// Record services sharing a single store and clock.
pub struct RecordServices<S> {
    pub users: RecordService<User, S>,
    pub modules: RecordService<Module, S>,
    pub assignments: RecordService<Assignment, S>,
    store: Arc<S>,
}

impl<S> RecordServices<S>
where
    S: RecordStore<User> + RecordStore<Module> + RecordStore<Assignment> + StoreHealth + 'static,
{
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: RecordService::new(Arc::clone(&store), Arc::clone(&clock)),
            modules: RecordService::new(Arc::clone(&store), Arc::clone(&clock)),
            assignments: RecordService::new(Arc::clone(&store), clock),
            store,
        }
    }

    /// Create the unique key index for every collection.
    ///
    /// # Errors
    /// Fails on the first collection whose index cannot be created.
    pub async fn prepare(&self) -> Result<(), Error> {
        self.users.prepare().await?;
        self.modules.prepare().await?;
        self.assignments.prepare().await
    }

    pub fn into_http_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.users),
            Arc::new(self.modules),
            Arc::new(self.assignments),
            self.store,
        )
    }
}
