//! Record administration service.
//!
//! One generic service backs users, modules, and assignments:
//! - create checks the natural key is free, stamps `createdAt`, and writes;
//! - list returns every record matching the kind's filter;
//! - delete removes by natural key and reports missing records.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::ports::{RecordAdmin, RecordStore, RecordStoreError};
use crate::domain::{Acknowledgement, Error, FieldFilter, Record};

/// Domain service implementing [`RecordAdmin`] for one record kind.
pub struct RecordService<R, S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    record: PhantomData<fn() -> R>,
}

impl<R, S> Clone for RecordService<R, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            record: PhantomData,
        }
    }
}

impl<R, S> RecordService<R, S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            record: PhantomData,
        }
    }
}

impl<R, S> RecordService<R, S>
where
    R: Record,
    S: RecordStore<R>,
{
    /// Ensure the store enforces natural key uniqueness.
    ///
    /// Called once at startup, before the service receives traffic.
    pub async fn prepare(&self) -> Result<(), Error> {
        self.store
            .ensure_unique_key()
            .await
            .map_err(Self::map_store_error)
    }

    fn key_filter(key: R::Key) -> FieldFilter {
        FieldFilter::eq(R::KEY_FIELD, key)
    }

    fn map_store_error(error: RecordStoreError) -> Error {
        match error {
            RecordStoreError::Connection { message } => {
                warn!(collection = R::COLLECTION, %message, "document store unavailable");
                Error::service_unavailable(format!("document store unavailable: {message}"))
            }
            RecordStoreError::Query { message } => {
                warn!(collection = R::COLLECTION, %message, "document store query failed");
                Error::internal(format!("document store error: {message}"))
            }
            RecordStoreError::DuplicateKey { .. } => Error::conflict(R::exists_message()),
        }
    }
}

#[async_trait]
impl<R, S> RecordAdmin<R> for RecordService<R, S>
where
    R: Record,
    S: RecordStore<R>,
{
    async fn create(&self, draft: R::Draft) -> Result<Acknowledgement, Error> {
        let key = R::draft_key(&draft);
        let existing = self
            .store
            .find_one(Self::key_filter(key.clone()))
            .await
            .map_err(Self::map_store_error)?;
        if existing.is_some() {
            debug!(collection = R::COLLECTION, %key, "rejecting duplicate record");
            return Err(Error::conflict(R::exists_message()));
        }

        let record = R::from_draft(draft, self.clock.utc());
        // A concurrent create can slip past the pre-read; the unique index
        // turns that into DuplicateKey, which maps to the same conflict.
        self.store
            .insert_one(record)
            .await
            .map_err(Self::map_store_error)?;

        debug!(collection = R::COLLECTION, %key, "record created");
        Ok(Acknowledgement::new(R::created_message()))
    }

    async fn list(&self, filter: R::ListFilter) -> Result<Vec<R>, Error> {
        let records = self
            .store
            .find(R::list_filter(filter))
            .await
            .map_err(Self::map_store_error)?;
        debug!(collection = R::COLLECTION, count = records.len(), "records listed");
        Ok(records)
    }

    async fn delete(&self, key: R::Key) -> Result<Acknowledgement, Error> {
        let deleted = self
            .store
            .delete_one(Self::key_filter(key.clone()))
            .await
            .map_err(Self::map_store_error)?;
        if deleted == 0 {
            return Err(Error::not_found(R::not_found_message()));
        }

        debug!(collection = R::COLLECTION, %key, "record removed");
        Ok(Acknowledgement::new(R::removed_message()))
    }
}

#[cfg(test)]
#[path = "record_service_tests.rs"]
mod tests;
