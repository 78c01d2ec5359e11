//! In-process document store.
//!
//! Collections hold records as JSON documents keyed by collection name. The
//! uniqueness check and the insert happen under one lock, so the adapter
//! enforces a unique key the way a database index would. Used by the test
//! suites and for running the service without MongoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::ports::{RecordStore, RecordStoreError, StoreHealth};
use crate::domain::{FieldFilter, FieldValue, Record};

#[derive(Debug, Default)]
struct Collection {
    documents: Vec<Value>,
    unique_key: Option<&'static str>,
}

impl Collection {
    fn holds_key(&self, field: &str, value: Option<&Value>) -> bool {
        self.documents
            .iter()
            .any(|document| document.get(field) == value)
    }
}

/// Document store kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<&'static str, Collection>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Value, filter: &FieldFilter) -> bool {
    match (&filter.value, document.get(filter.field)) {
        (FieldValue::Text(expected), Some(Value::String(actual))) => actual == expected,
        (FieldValue::Integer(expected), Some(actual)) => actual.as_i64() == Some(*expected),
        _ => false,
    }
}

fn decode<R: Record>(document: &Value) -> Result<R, RecordStoreError> {
    serde_json::from_value(document.clone()).map_err(|err| {
        RecordStoreError::query(format!("{} document is malformed: {err}", R::COLLECTION))
    })
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryDocumentStore {
    async fn find_one(&self, filter: FieldFilter) -> Result<Option<R>, RecordStoreError> {
        let collections = self.collections.lock().await;
        collections
            .get(R::COLLECTION)
            .and_then(|collection| {
                collection
                    .documents
                    .iter()
                    .find(|document| matches(document, &filter))
            })
            .map(decode::<R>)
            .transpose()
    }

    async fn find(&self, filter: Option<FieldFilter>) -> Result<Vec<R>, RecordStoreError> {
        let collections = self.collections.lock().await;
        let Some(collection) = collections.get(R::COLLECTION) else {
            return Ok(Vec::new());
        };
        collection
            .documents
            .iter()
            .filter(|document| filter.as_ref().is_none_or(|f| matches(document, f)))
            .map(decode::<R>)
            .collect()
    }

    async fn insert_one(&self, record: R) -> Result<(), RecordStoreError> {
        let document = serde_json::to_value(&record).map_err(|err| {
            RecordStoreError::query(format!("{} record failed to encode: {err}", R::COLLECTION))
        })?;

        let mut collections = self.collections.lock().await;
        let collection = collections.entry(R::COLLECTION).or_default();
        if let Some(field) = collection.unique_key {
            if collection.holds_key(field, document.get(field)) {
                return Err(RecordStoreError::duplicate_key(format!(
                    "{}.{field} already holds {}",
                    R::COLLECTION,
                    record.key()
                )));
            }
        }
        collection.documents.push(document);
        Ok(())
    }

    async fn delete_one(&self, filter: FieldFilter) -> Result<u64, RecordStoreError> {
        let mut collections = self.collections.lock().await;
        let Some(collection) = collections.get_mut(R::COLLECTION) else {
            return Ok(0);
        };
        match collection
            .documents
            .iter()
            .position(|document| matches(document, &filter))
        {
            Some(index) => {
                collection.documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ensure_unique_key(&self) -> Result<(), RecordStoreError> {
        let mut collections = self.collections.lock().await;
        let collection = collections.entry(R::COLLECTION).or_default();
        let mut seen = Vec::with_capacity(collection.documents.len());
        for document in &collection.documents {
            let key = document.get(R::KEY_FIELD);
            if seen.contains(&key) {
                return Err(RecordStoreError::query(format!(
                    "cannot index {}.{}: duplicate key values",
                    R::COLLECTION,
                    R::KEY_FIELD
                )));
            }
            seen.push(key);
        }
        collection.unique_key = Some(R::KEY_FIELD);
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for InMemoryDocumentStore {
    async fn ping(&self) -> Result<(), RecordStoreError> {
        Ok(())
    }
}
