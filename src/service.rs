use std::sync::Arc;

use crate::db::query::sort_by_id_desc;
use crate::db::{JobStore, jobs as job_queries};
use crate::error::ServiceError;
use crate::mail::{ContactMessage, Mailer};
use crate::models::jobs::JobRecord;
use crate::models::pagination::{PAGE_SIZE, Pagination};

/// Job listing, search and contact operations over an injected store and mailer.
///
/// Every call is a single round trip to the store; nothing is cached.
#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobStore>,
    mailer: Arc<dyn Mailer>,
}

impl JobService {
    pub fn new(store: Arc<dyn JobStore>, mailer: Arc<dyn Mailer>) -> Self {
        Self { store, mailer }
    }

    /// One page (`page_index` is zero-based) of a country's jobs, newest first.
    pub async fn list_jobs(
        &self,
        country_code: &str,
        page_index: u64,
        page_size: u64,
    ) -> Result<Vec<JobRecord>, ServiceError> {
        let query = job_queries::listing(country_code, page_index, page_size.max(1));
        let documents = self.store.find(&query).await?;
        Ok(documents.iter().map(JobRecord::from_document).collect())
    }

    /// [`Self::list_jobs`] with the default page size.
    pub async fn list_jobs_page(
        &self,
        country_code: &str,
        page_index: u64,
    ) -> Result<Vec<JobRecord>, ServiceError> {
        self.list_jobs(country_code, page_index, PAGE_SIZE).await
    }

    /// A single job by `id` and slug; `None` if the pair does not exist.
    pub async fn get_job(&self, id: i64, url_suffix: &str) -> Result<Option<JobRecord>, ServiceError> {
        let filter = job_queries::by_id_and_slug(id, url_suffix);
        let document = self.store.find_one(&filter).await?;
        Ok(document.as_ref().map(JobRecord::from_document))
    }

    pub async fn count_by_country(&self, country_code: &str) -> Result<u64, ServiceError> {
        Ok(self.store.count(&job_queries::by_country(country_code)).await?)
    }

    /// Case-insensitive substring search, evaluated by the store.
    pub async fn search_case_insensitive(&self, text: &str) -> Result<Vec<JobRecord>, ServiceError> {
        let documents = self.store.find(&job_queries::text_search(text)).await?;
        Ok(documents.iter().map(JobRecord::from_document).collect())
    }

    /// Case-sensitive substring search over title, company and content.
    ///
    /// Loads the whole collection and filters in process, so the cost grows
    /// with the collection size rather than the number of hits.
    pub async fn search_case_sensitive(&self, text: &str) -> Result<Vec<JobRecord>, ServiceError> {
        tracing::info!(text, "Starting case-sensitive search");
        let documents = self.store.find(&job_queries::everything()).await?;
        let scanned = documents.len();

        let mut jobs: Vec<JobRecord> = documents
            .iter()
            .map(JobRecord::from_document)
            .filter(|job| job.contains_text(text))
            .collect();
        sort_by_id_desc(&mut jobs);

        tracing::info!(scanned, results = jobs.len(), "Finished case-sensitive search");
        Ok(jobs)
    }

    /// Pager for `current_page` (1-based) of a country's listing.
    pub async fn compute_window(
        &self,
        country_code: &str,
        current_page: u64,
    ) -> Result<Pagination, ServiceError> {
        let total = self.count_by_country(country_code).await?;
        Ok(Pagination::compute(total, current_page, PAGE_SIZE))
    }

    pub async fn send_mail(&self, contact: ContactMessage) -> Result<(), ServiceError> {
        if contact.is_blank() {
            return Err(ServiceError::InvalidInput(
                "from, subject and message are required".to_string(),
            ));
        }
        Ok(self.mailer.send(contact).await?)
    }
}
