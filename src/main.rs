use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use developerjobs_backend::db::MongoJobStore;
use developerjobs_backend::handlers;
use developerjobs_backend::mail::SmtpMailer;
use developerjobs_backend::{AppConfig, JobService};
use dotenv::dotenv;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let store = MongoJobStore::connect(&config.mongo)
        .await
        .expect("Failed to connect to MongoDB");
    tracing::info!(
        database = %config.mongo.database,
        collection = %config.mongo.collection,
        "Connected to MongoDB"
    );

    let mailer = SmtpMailer::new(&config.smtp).expect("Failed to configure SMTP transport");

    let service = web::Data::new(JobService::new(Arc::new(store), Arc::new(mailer)));

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(service.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
