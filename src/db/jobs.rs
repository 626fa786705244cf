use crate::db::query::{JobFilter, JobQuery, SortOrder};

/// One page of a country's listing, newest `id` first.
pub fn listing(country_code: &str, page_index: u64, page_size: u64) -> JobQuery {
    JobQuery::new(by_country(country_code))
        .sorted(SortOrder::IdDescending)
        .window(page_index.saturating_mul(page_size), page_size)
}

pub fn by_country(country_code: &str) -> JobFilter {
    JobFilter::Country(country_code.to_string())
}

pub fn by_id_and_slug(id: i64, url_suffix: &str) -> JobFilter {
    JobFilter::IdAndSlug {
        id,
        url_suffix: url_suffix.to_string(),
    }
}

/// Case-insensitive search pushed down to the store.
pub fn text_search(text: &str) -> JobQuery {
    JobQuery::new(JobFilter::Text(text.to_string())).sorted(SortOrder::IdDescending)
}

/// The whole collection, unfiltered and unsorted.
pub fn everything() -> JobQuery {
    JobQuery::new(JobFilter::All)
}
