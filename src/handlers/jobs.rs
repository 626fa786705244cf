use actix_web::{HttpResponse, Responder, web};

use crate::handlers::error_response;
use crate::models::{MAX_PAGE, PageQuery};
use crate::models::jobs::{CountryCount, JobListing, SearchQuery};
use crate::service::JobService;

/// GET /api/jobs/{country_code}?page=N — one page of listings plus the pager.
pub async fn list_jobs(
    service: web::Data<JobService>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let country_code = path.into_inner();
    let Some(page) = query.checked_page() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("page must be between 1 and {MAX_PAGE}"),
        }));
    };

    let jobs = match service.list_jobs_page(&country_code, page - 1).await {
        Ok(jobs) => jobs,
        Err(e) => return error_response(&e, "Failed to fetch jobs"),
    };

    match service.compute_window(&country_code, page).await {
        Ok(pagination) => HttpResponse::Ok().json(JobListing { jobs, pagination }),
        Err(e) => error_response(&e, "Failed to build pagination"),
    }
}

/// GET /api/jobs/{country_code}/count
pub async fn count_jobs(
    service: web::Data<JobService>,
    path: web::Path<String>,
) -> impl Responder {
    let country_code = path.into_inner();
    match service.count_by_country(&country_code).await {
        Ok(count) => HttpResponse::Ok().json(CountryCount { country_code, count }),
        Err(e) => error_response(&e, "Failed to count jobs"),
    }
}

/// GET /api/job/{id}/{url_suffix}
pub async fn get_job(
    service: web::Data<JobService>,
    path: web::Path<(i64, String)>,
) -> impl Responder {
    let (id, url_suffix) = path.into_inner();
    match service.get_job(id, &url_suffix).await {
        Ok(Some(job)) => HttpResponse::Ok().json(job),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Job {id}/{url_suffix} not found"),
        })),
        Err(e) => error_response(&e, "Failed to fetch job"),
    }
}

/// GET /api/search?q=...&case_sensitive=true
pub async fn search_jobs(
    service: web::Data<JobService>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let Some(text) = query.text() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Search text must not be empty",
        }));
    };

    let result = if query.case_sensitive() {
        service.search_case_sensitive(text).await
    } else {
        service.search_case_insensitive(text).await
    };

    match result {
        Ok(jobs) => HttpResponse::Ok().json(jobs),
        Err(e) => error_response(&e, "Search failed"),
    }
}
