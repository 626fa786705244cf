#![allow(dead_code)]

use async_trait::async_trait;
use developerjobs_backend::JobService;
use developerjobs_backend::db::{JobFilter, JobQuery, JobStore, MemoryJobStore, StoreError};
use developerjobs_backend::mail::{ContactMessage, MailError, Mailer};
use mongodb::bson::{Document, doc};
use std::sync::{Arc, Mutex};

/// Mailer that keeps every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: ContactMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// Mailer whose transport always rejects the message.
pub struct RejectingMailer;

#[async_trait]
impl Mailer for RejectingMailer {
    async fn send(&self, _message: ContactMessage) -> Result<(), MailError> {
        let err = "rejected".parse::<lettre::Address>().unwrap_err();
        Err(MailError::Address(err))
    }
}

/// Store that fails every call, standing in for a lost connection.
pub struct UnavailableStore;

#[async_trait]
impl JobStore for UnavailableStore {
    async fn find(&self, _query: &JobQuery) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::InvalidQuery("connection refused".into()))
    }

    async fn find_one(&self, _filter: &JobFilter) -> Result<Option<Document>, StoreError> {
        Err(StoreError::InvalidQuery("connection refused".into()))
    }

    async fn count(&self, _filter: &JobFilter) -> Result<u64, StoreError> {
        Err(StoreError::InvalidQuery("connection refused".into()))
    }
}

pub fn job(id: i32, country_code: &str, title: &str, company: &str, content: &str) -> Document {
    doc! {
        "id": id,
        "urlSuffix": format!("job-{id}"),
        "countryCode": country_code,
        "title": title,
        "company": company,
        "content": content,
        "website": "boss.az",
    }
}

/// 25 AZ jobs (odd ids descending, then even ids ascending) and 3 DE jobs (ids 101..=103).
pub fn seeded_store() -> MemoryJobStore {
    let store = MemoryJobStore::default();
    for id in (1..=25).rev().step_by(2) {
        store.insert(job(id, "AZ", "Backend Developer", "Acme", "Remote friendly"));
    }
    for id in (2..=24).step_by(2) {
        store.insert(job(id, "AZ", "Java Developer", "Initech", "Spring and Kafka"));
    }
    store.insert(job(101, "DE", "Senior JAVA Engineer", "Globex", "Hamburg office"));
    store.insert(job(102, "DE", "Rust Engineer", "Hooli", "uses java tooling"));
    store.insert(job(103, "DE", "Data Analyst", "Java Corp", "SQL"));
    store
}

pub fn service_with(store: impl JobStore + 'static, mailer: impl Mailer + 'static) -> JobService {
    JobService::new(Arc::new(store), Arc::new(mailer))
}
