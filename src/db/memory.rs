use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use std::cmp::Ordering;
use std::sync::{Arc, RwLock};

use crate::db::query::{JobFilter, JobQuery, SortOrder};
use crate::db::{JobStore, StoreError};
use crate::models::jobs::fields;

/// Job collection held in process memory.
///
/// Evaluates the same [`JobQuery`] values as [`super::MongoJobStore`], which
/// makes it a drop-in store for tests and local runs without a database.
/// Sorting by `id` follows MongoDB's cross-type order: a missing or null id
/// sorts below numbers, and numbers sort below strings.
#[derive(Clone, Default)]
pub struct MemoryJobStore {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl MemoryJobStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }

    pub fn insert(&self, document: Document) {
        self.documents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(document);
    }

    fn matching(&self, filter: &JobFilter) -> Result<Vec<Document>, StoreError> {
        let matches = filter.matcher()?;
        let documents = self
            .documents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(documents.iter().filter(|doc| matches(*doc)).cloned().collect())
    }
}

/// Sort key for a document `id`, variants in ascending BSON type order.
#[derive(PartialEq, PartialOrd)]
enum IdKey<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
    Other,
}

impl<'a> IdKey<'a> {
    fn of(doc: &'a Document) -> Self {
        match doc.get(fields::ID) {
            None | Some(Bson::Null) => Self::Missing,
            Some(Bson::Int32(v)) => Self::Number(f64::from(*v)),
            Some(Bson::Int64(v)) => Self::Number(*v as f64),
            Some(Bson::Double(v)) => Self::Number(*v),
            Some(Bson::String(s)) => Self::Text(s),
            Some(_) => Self::Other,
        }
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn find(&self, query: &JobQuery) -> Result<Vec<Document>, StoreError> {
        let mut documents = self.matching(&query.filter)?;

        if query.sort == SortOrder::IdDescending {
            documents.sort_by(|a, b| {
                IdKey::of(b)
                    .partial_cmp(&IdKey::of(a))
                    .unwrap_or(Ordering::Equal)
            });
        }

        let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
        let limit = query
            .limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        Ok(documents.into_iter().skip(skip).take(limit).collect())
    }

    async fn find_one(&self, filter: &JobFilter) -> Result<Option<Document>, StoreError> {
        Ok(self.matching(filter)?.into_iter().next())
    }

    async fn count(&self, filter: &JobFilter) -> Result<u64, StoreError> {
        Ok(self.matching(filter)?.len() as u64)
    }
}
