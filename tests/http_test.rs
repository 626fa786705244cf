//! HTTP-level tests: routes, status codes and JSON shapes, with the
//! in-memory store and a recording mailer behind the service.
//!
//! Run with: `cargo test --test http_test`
mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use common::{RecordingMailer, RejectingMailer, UnavailableStore, seeded_store, service_with};
use developerjobs_backend::JobService;
use developerjobs_backend::handlers::init_routes;
use developerjobs_backend::mail::Mailer;
use developerjobs_backend::models::MAX_PAGE;

macro_rules! app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($service))
                .service(web::scope("/api").configure(init_routes)),
        )
        .await
    };
}

#[actix_web::test]
async fn listing_returns_jobs_and_pager() {
    let app = app!(service_with(seeded_store(), RecordingMailer::default()));

    let req = test::TestRequest::get().uri("/api/jobs/AZ?page=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let jobs = body["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 10);
    assert_eq!(jobs[0]["id"], 15);
    assert_eq!(jobs[0]["image_src"], "/images/boss_az.png");
    assert_eq!(
        body["pagination"],
        json!({ "total_pages": 3, "begin": 1, "end": 3, "previous": 1, "next": 3 })
    );
}

#[actix_web::test]
async fn missing_page_defaults_to_the_first() {
    let app = app!(service_with(seeded_store(), RecordingMailer::default()));

    let req = test::TestRequest::get().uri("/api/jobs/AZ").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["jobs"][0]["id"], 25);
    assert_eq!(body["pagination"]["previous"], 1);
}

#[actix_web::test]
async fn out_of_range_page_is_a_bad_request() {
    let app = app!(service_with(seeded_store(), RecordingMailer::default()));

    let req = test::TestRequest::get()
        .uri("/api/jobs/AZ?page=18446744073709551615")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The highest accepted page lists nothing but still builds a pager.
    let uri = format!("/api/jobs/AZ?page={MAX_PAGE}");
    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["jobs"], json!([]));
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["pagination"]["end"], 3);
}

#[actix_web::test]
async fn count_by_country() {
    let app = app!(service_with(seeded_store(), RecordingMailer::default()));

    let req = test::TestRequest::get().uri("/api/jobs/DE/count").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "country_code": "DE", "count": 3 }));
}

#[actix_web::test]
async fn single_job_lookup() {
    let app = app!(service_with(seeded_store(), RecordingMailer::default()));

    let req = test::TestRequest::get().uri("/api/job/101/job-101").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["job_title"], "Senior JAVA Engineer");

    let req = test::TestRequest::get().uri("/api/job/101/job-102").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn search_switches_on_case_sensitivity() {
    let app = app!(service_with(seeded_store(), RecordingMailer::default()));

    let req = test::TestRequest::get().uri("/api/search?q=java").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 15);

    let req = test::TestRequest::get()
        .uri("/api/search?q=java&case_sensitive=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 102);

    // The trailing space is kept: "Java Corp" has no "Corp " in it.
    let req = test::TestRequest::get()
        .uri("/api/search?q=Corp%20&case_sensitive=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));

    let req = test::TestRequest::get()
        .uri("/api/search?q=Corp&case_sensitive=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["id"], 103);

    let req = test::TestRequest::get().uri("/api/search?q=%20").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn store_outage_maps_to_503() {
    let app = app!(service_with(UnavailableStore, RecordingMailer::default()));

    for uri in ["/api/jobs/AZ", "/api/jobs/AZ/count", "/api/job/1/job-1", "/api/search?q=x"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE, "{uri}");
    }
}

#[actix_web::test]
async fn contact_form_is_mailed() {
    let mailer = Arc::new(RecordingMailer::default());
    let service = JobService::new(Arc::new(seeded_store()), mailer.clone() as Arc<dyn Mailer>);
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "from": "visitor@example.com",
            "subject": "Hi",
            "message": "Hello!",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Hi");
}

#[actix_web::test]
async fn contact_errors_map_to_status_codes() {
    let app = app!(service_with(seeded_store(), RejectingMailer));

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({ "from": "a@b.c", "subject": "Hi", "message": "Hello" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_GATEWAY);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({ "from": "a@b.c", "subject": "", "message": "Hello" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_check() {
    let app = app!(service_with(seeded_store(), RecordingMailer::default()));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "status": "ok" }));
}
