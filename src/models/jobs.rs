use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::models::image::ImageSource;

/// Field names of a job document, as written by the ingestion process.
pub mod fields {
    pub const ID: &str = "id";
    pub const URL_SUFFIX: &str = "urlSuffix";
    pub const COUNTRY_CODE: &str = "countryCode";
    pub const TITLE: &str = "title";
    pub const COMPANY: &str = "company";
    pub const CONTENT: &str = "content";
    pub const WEBSITE: &str = "website";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const SALARY: &str = "salary";
    pub const LOCATION: &str = "location";
    pub const JOB_TYPE: &str = "jobType";
    pub const DEADLINE: &str = "deadline";
    pub const LINK: &str = "link";
}

/// A single job posting as returned to callers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: i64,
    pub url_suffix: String,
    pub country_code: String,
    pub job_title: String,
    pub company: String,
    pub content: String,
    pub website: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub deadline: Option<String>,
    pub link: Option<String>,
    pub image_src: String,
}

impl JobRecord {
    /// Map a stored document onto the fixed record shape.
    ///
    /// Every field is extracted on its own: a missing or mistyped value falls
    /// back to its default instead of rejecting the whole document.
    pub fn from_document(doc: &Document) -> Self {
        let job_title = string_field(doc, fields::TITLE);
        let website = string_field(doc, fields::WEBSITE);
        let image_src = ImageSource::for_job(&website, &job_title).to_string();

        Self {
            id: document_id(doc).unwrap_or_default(),
            url_suffix: string_field(doc, fields::URL_SUFFIX),
            country_code: string_field(doc, fields::COUNTRY_CODE),
            job_title,
            company: string_field(doc, fields::COMPANY),
            content: string_field(doc, fields::CONTENT),
            website,
            created_at: timestamp_field(doc, fields::CREATED_AT),
            updated_at: timestamp_field(doc, fields::UPDATED_AT),
            salary: optional_string(doc, fields::SALARY),
            location: optional_string(doc, fields::LOCATION),
            job_type: optional_string(doc, fields::JOB_TYPE),
            deadline: optional_string(doc, fields::DEADLINE),
            link: optional_string(doc, fields::LINK),
            image_src,
        }
    }

    /// Plain substring containment over title, company and content.
    pub fn contains_text(&self, text: &str) -> bool {
        self.job_title.contains(text) || self.company.contains(text) || self.content.contains(text)
    }
}

/// Numeric `id` of a document, whichever numeric BSON type it was stored as.
pub fn document_id(doc: &Document) -> Option<i64> {
    match doc.get(fields::ID)? {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        Bson::Double(v) if v.fract() == 0.0 => Some(*v as i64),
        _ => None,
    }
}

fn string_field(doc: &Document, key: &str) -> String {
    doc.get_str(key).map(str::to_owned).unwrap_or_default()
}

fn optional_string(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key)? {
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(v) => Some(v.to_string()),
        Bson::Int64(v) => Some(v.to_string()),
        Bson::Double(v) => Some(v.to_string()),
        Bson::DateTime(dt) => Some(dt.to_chrono().to_rfc3339()),
        _ => None,
    }
}

fn timestamp_field(doc: &Document, key: &str) -> Option<DateTime<Utc>> {
    match doc.get(key)? {
        Bson::DateTime(dt) => Some(dt.to_chrono()),
        Bson::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub jobs: Vec<JobRecord>,
    pub pagination: crate::models::pagination::Pagination,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryCount {
    pub country_code: String,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub case_sensitive: Option<bool>,
}

impl SearchQuery {
    /// The search text as given, `None` when it is missing or only whitespace.
    pub fn text(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.trim().is_empty())
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive.unwrap_or(false)
    }
}
