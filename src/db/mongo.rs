use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::Document;
use mongodb::{Client, Collection};

use crate::config::MongoConfig;
use crate::db::query::{JobFilter, JobQuery};
use crate::db::{JobStore, StoreError};

/// Job collection backed by a MongoDB deployment.
#[derive(Clone)]
pub struct MongoJobStore {
    collection: Collection<Document>,
}

impl MongoJobStore {
    /// Connect using the configured URI, database and collection names.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);
        Ok(Self::new(collection))
    }

    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl JobStore for MongoJobStore {
    async fn find(&self, query: &JobQuery) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection
            .find(query.filter.to_document(), query.find_options())
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, filter: &JobFilter) -> Result<Option<Document>, StoreError> {
        Ok(self.collection.find_one(filter.to_document(), None).await?)
    }

    async fn count(&self, filter: &JobFilter) -> Result<u64, StoreError> {
        Ok(self
            .collection
            .count_documents(filter.to_document(), None)
            .await?)
    }
}
