use mongodb::bson::{Document, doc};
use mongodb::options::FindOptions;
use regex::RegexBuilder;

use crate::db::StoreError;
use crate::models::jobs::{JobRecord, document_id, fields};

/// Which job documents a query selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFilter {
    /// Every document in the collection.
    All,
    /// Exact, case-sensitive `countryCode` equality.
    Country(String),
    /// Both `id` and `urlSuffix` must match.
    IdAndSlug { id: i64, url_suffix: String },
    /// Case-insensitive literal substring in title, company or content.
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Whatever order the store returns.
    #[default]
    Natural,
    IdDescending,
}

/// A find request against the job collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub filter: JobFilter,
    pub sort: SortOrder,
    pub skip: u64,
    pub limit: Option<u64>,
}

impl JobQuery {
    pub fn new(filter: JobFilter) -> Self {
        Self {
            filter,
            sort: SortOrder::Natural,
            skip: 0,
            limit: None,
        }
    }

    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn window(mut self, skip: u64, limit: u64) -> Self {
        self.skip = skip;
        self.limit = Some(limit);
        self
    }

    pub fn find_options(&self) -> FindOptions {
        let sort = match self.sort {
            SortOrder::Natural => None,
            SortOrder::IdDescending => Some(doc! { "id": -1 }),
        };

        FindOptions::builder()
            .sort(sort)
            .skip((self.skip > 0).then_some(self.skip))
            .limit(self.limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX)))
            .build()
    }
}

impl JobFilter {
    /// Render as a MongoDB filter document.
    pub fn to_document(&self) -> Document {
        match self {
            Self::All => doc! {},
            Self::Country(country_code) => doc! { "countryCode": country_code.as_str() },
            Self::IdAndSlug { id, url_suffix } => doc! {
                "id": *id,
                "urlSuffix": url_suffix.as_str(),
            },
            Self::Text(text) => {
                let pattern = regex::escape(text);
                doc! {
                    "$or": [
                        { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                        { "company": { "$regex": pattern.as_str(), "$options": "i" } },
                        { "content": { "$regex": pattern.as_str(), "$options": "i" } },
                    ]
                }
            }
        }
    }

    /// Build a predicate that evaluates this filter in process, with the same
    /// semantics the store applies to [`JobFilter::to_document`].
    pub fn matcher(&self) -> Result<impl Fn(&Document) -> bool + '_, StoreError> {
        let text = match self {
            Self::Text(text) => Some(
                RegexBuilder::new(&regex::escape(text))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| StoreError::InvalidQuery(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(move |doc: &Document| match self {
            Self::All => true,
            Self::Country(country_code) => doc
                .get_str(fields::COUNTRY_CODE)
                .is_ok_and(|cc| cc == country_code),
            Self::IdAndSlug { id, url_suffix } => {
                document_id(doc) == Some(*id)
                    && doc
                        .get_str(fields::URL_SUFFIX)
                        .is_ok_and(|slug| slug == url_suffix)
            }
            Self::Text(_) => text.as_ref().is_some_and(|re| {
                [fields::TITLE, fields::COMPANY, fields::CONTENT]
                    .iter()
                    .any(|field| doc.get_str(field).is_ok_and(|value| re.is_match(value)))
            }),
        })
    }
}

/// Sort records by `id`, highest first.
pub fn sort_by_id_desc(records: &mut [JobRecord]) {
    records.sort_by(|a, b| b.id.cmp(&a.id));
}
