pub mod contact;
pub mod jobs;

use actix_web::{HttpResponse, Responder, web};

use crate::error::ServiceError;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));

    // ── Listing routes ──
    cfg.service(
        web::scope("/jobs")
            .route("/{country_code}", web::get().to(jobs::list_jobs))
            .route("/{country_code}/count", web::get().to(jobs::count_jobs)),
    );
    cfg.route("/job/{id}/{url_suffix}", web::get().to(jobs::get_job));
    cfg.route("/search", web::get().to(jobs::search_jobs));

    // ── Contact form ──
    cfg.route("/contact", web::post().to(contact::send_contact));
}

/// GET /api/health
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON error body with the status matching the failure.
pub(crate) fn error_response(e: &ServiceError, context: &str) -> HttpResponse {
    let mut status = match e {
        ServiceError::StoreUnavailable(_) => HttpResponse::ServiceUnavailable(),
        ServiceError::MailDeliveryFailure(_) => HttpResponse::BadGateway(),
        ServiceError::InvalidInput(_) => HttpResponse::BadRequest(),
    };
    match e {
        ServiceError::InvalidInput(_) => tracing::warn!(error = %e, "{context}"),
        _ => tracing::error!(error = %e, "{context}"),
    }
    status.json(serde_json::json!({
        "error": format!("{context}: {e}"),
    }))
}
