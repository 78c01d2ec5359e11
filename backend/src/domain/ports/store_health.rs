//! Liveness check against the backing document store.

use async_trait::async_trait;

use super::RecordStoreError;

/// Used by the readiness probe.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), RecordStoreError>;
}
