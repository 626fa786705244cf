pub mod image;
pub mod jobs;
pub mod pagination;

use serde::Deserialize;

use crate::models::pagination::PAGE_SIZE;

/// Highest page whose skip offset still fits the store's signed 64-bit skip.
pub const MAX_PAGE: u64 = i64::MAX as u64 / PAGE_SIZE;

/// `?page=N` on listing routes, 1-based.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

impl PageQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// The requested page, or `None` when it is past [`MAX_PAGE`].
    pub fn checked_page(&self) -> Option<u64> {
        Some(self.page()).filter(|page| *page <= MAX_PAGE)
    }
}
