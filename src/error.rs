use thiserror::Error;

use crate::db::StoreError;
use crate::mail::MailError;

/// Failures surfaced by [`crate::service::JobService`].
///
/// A missing record is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Job store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error("Mail delivery failed: {0}")]
    MailDeliveryFailure(#[from] MailError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
