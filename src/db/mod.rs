pub mod jobs;
pub mod memory;
pub mod mongo;
pub mod query;

use async_trait::async_trait;
use mongodb::bson::Document;
use thiserror::Error;

pub use memory::MemoryJobStore;
pub use mongo::MongoJobStore;
pub use query::{JobFilter, JobQuery, SortOrder};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Read access to the job collection.
///
/// Implementations execute a [`JobQuery`] and hand back raw documents; mapping
/// onto `JobRecord` happens in the caller so a bad field never fails a query.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn find(&self, query: &JobQuery) -> Result<Vec<Document>, StoreError>;

    async fn find_one(&self, filter: &JobFilter) -> Result<Option<Document>, StoreError>;

    async fn count(&self, filter: &JobFilter) -> Result<u64, StoreError>;
}
