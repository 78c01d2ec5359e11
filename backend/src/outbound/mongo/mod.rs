//! MongoDB-backed document store.
//!
//! One [`MongoDocumentStore`] wraps a database handle shared by every
//! collection. The driver pools connections internally, so the store is
//! built once at startup and cloned behind an `Arc`.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::debug;

pub use self::models::{AssignmentDocument, ModuleDocument, MongoRecord, UserDocument};
use crate::domain::ports::{RecordStore, RecordStoreError, StoreHealth};
use crate::domain::{FieldFilter, FieldValue};

const DUPLICATE_KEY_CODE: i32 = 11000;
const APP_NAME: &str = "academic-backend";

/// Connection settings for [`MongoDocumentStore::connect`].
#[derive(Debug, Clone)]
pub struct MongoConfig {
    url: String,
    database: String,
    server_selection_timeout: Duration,
}

impl MongoConfig {
    /// Server selection defaults to 5 seconds.
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Document store backed by a MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    /// Build a client for `config`.
    ///
    /// The driver connects lazily; an unreachable server surfaces on the
    /// first operation, not here.
    pub async fn connect(config: &MongoConfig) -> Result<Self, RecordStoreError> {
        let mut options = ClientOptions::parse(config.url())
            .await
            .map_err(map_mongo_error)?;
        options.app_name = Some(APP_NAME.to_owned());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options).map_err(map_mongo_error)?;
        Ok(Self::from_database(client.database(config.database())))
    }

    pub fn from_database(database: Database) -> Self {
        Self { database }
    }

    fn collection<R: MongoRecord>(&self) -> Collection<R::Document> {
        self.database.collection(R::COLLECTION)
    }
}

fn store_id_excluded() -> Document {
    doc! { "_id": 0 }
}

pub(crate) fn filter_document(filter: &FieldFilter) -> Document {
    let value = match &filter.value {
        FieldValue::Text(text) => Bson::String(text.clone()),
        FieldValue::Integer(number) => Bson::Int64(*number),
    };
    let mut document = Document::new();
    document.insert(filter.field, value);
    document
}

/// Classify a driver error.
///
/// Only a rejected write counts as a duplicate key. Code 11000 on a command,
/// such as building a unique index over existing duplicates, is a query error.
pub(crate) fn map_mongo_error(error: mongodb::error::Error) -> RecordStoreError {
    let message = error.to_string();
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            RecordStoreError::duplicate_key(message)
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => RecordStoreError::connection(message),
        _ => RecordStoreError::query(message),
    }
}

#[async_trait]
impl<R: MongoRecord> RecordStore<R> for MongoDocumentStore {
    async fn find_one(&self, filter: FieldFilter) -> Result<Option<R>, RecordStoreError> {
        let document = self
            .collection::<R>()
            .find_one(filter_document(&filter))
            .projection(store_id_excluded())
            .await
            .map_err(map_mongo_error)?;
        Ok(document.map(R::from_document))
    }

    async fn find(&self, filter: Option<FieldFilter>) -> Result<Vec<R>, RecordStoreError> {
        let query = filter.as_ref().map(filter_document).unwrap_or_default();
        let documents: Vec<R::Document> = self
            .collection::<R>()
            .find(query)
            .projection(store_id_excluded())
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;
        Ok(documents.into_iter().map(R::from_document).collect())
    }

    async fn insert_one(&self, record: R) -> Result<(), RecordStoreError> {
        self.collection::<R>()
            .insert_one(record.into_document())
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    async fn delete_one(&self, filter: FieldFilter) -> Result<u64, RecordStoreError> {
        let result = self
            .collection::<R>()
            .delete_one(filter_document(&filter))
            .await
            .map_err(map_mongo_error)?;
        Ok(result.deleted_count)
    }

    async fn ensure_unique_key(&self) -> Result<(), RecordStoreError> {
        let mut keys = Document::new();
        keys.insert(R::KEY_FIELD, 1_i32);
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let created = self
            .collection::<R>()
            .create_index(index)
            .await
            .map_err(map_mongo_error)?;
        debug!(
            collection = R::COLLECTION,
            index = %created.index_name,
            "unique key index ensured"
        );
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for MongoDocumentStore {
    async fn ping(&self) -> Result<(), RecordStoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }
}
