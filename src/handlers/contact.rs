use actix_web::{HttpResponse, Responder, web};

use crate::handlers::error_response;
use crate::mail::ContactMessage;
use crate::service::JobService;

/// POST /api/contact — forward a contact-form message to the site inbox.
pub async fn send_contact(
    service: web::Data<JobService>,
    body: web::Json<ContactMessage>,
) -> impl Responder {
    match service.send_mail(body.into_inner()).await {
        Ok(()) => HttpResponse::Accepted().json(serde_json::json!({
            "message": "Mail sent",
        })),
        Err(e) => error_response(&e, "Failed to send mail"),
    }
}
