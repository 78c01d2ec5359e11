//! Driving port used by inbound adapters to administer records.
//!
//! Handlers depend on this trait rather than on the service so they can be
//! tested against mocks without a store.

use async_trait::async_trait;

use crate::domain::{Acknowledgement, Error, Record};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordAdmin<R: Record>: Send + Sync {
    /// Store a new record unless its natural key is taken.
    async fn create(&self, draft: R::Draft) -> Result<Acknowledgement, Error>;

    /// Records matching the kind-specific filter.
    async fn list(&self, filter: R::ListFilter) -> Result<Vec<R>, Error>;

    /// Remove the record with the given natural key.
    async fn delete(&self, key: R::Key) -> Result<Acknowledgement, Error>;
}
