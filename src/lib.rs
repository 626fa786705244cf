pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use service::JobService;
