//! Driven port over a document collection holding one record kind.
//!
//! Adapters address the collection named by [`Record::COLLECTION`] and must
//! strip any store-internal identifier before handing records back.

use async_trait::async_trait;

use crate::domain::{FieldFilter, Record};

use super::define_port_error;

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum RecordStoreError {
        /// The store could not be reached.
        Connection { message: String } => "document store connection failed: {message}",
        /// A query or write failed during execution.
        Query { message: String } => "document store query failed: {message}",
        /// A write violated the unique index on the natural key.
        DuplicateKey { message: String } => "document store rejected duplicate key: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// First record matching `filter`, if any.
    async fn find_one(&self, filter: FieldFilter) -> Result<Option<R>, RecordStoreError>;

    /// Every record matching `filter` in storage order; `None` matches all.
    async fn find(&self, filter: Option<FieldFilter>) -> Result<Vec<R>, RecordStoreError>;

    /// Persist a new record.
    ///
    /// Returns [`RecordStoreError::DuplicateKey`] when the unique key index
    /// already holds the record's key.
    async fn insert_one(&self, record: R) -> Result<(), RecordStoreError>;

    /// Remove at most one record matching `filter`, returning the count removed.
    async fn delete_one(&self, filter: FieldFilter) -> Result<u64, RecordStoreError>;

    /// Create the unique index on [`Record::KEY_FIELD`] if it is missing.
    async fn ensure_unique_key(&self) -> Result<(), RecordStoreError>;
}
