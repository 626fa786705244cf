use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde::Deserialize;
use thiserror::Error;

use crate::config::SmtpConfig;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("Mail task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    pub from: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_blank(&self) -> bool {
        [&self.from, &self.subject, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

/// Delivers contact-form messages to the site's inbox.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: ContactMessage) -> Result<(), MailError>;
}

/// SMTP relay delivery through lettre.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let mut builder = SmtpTransport::relay(&config.server)?;
        if let (Some(user), Some(pass)) = (&config.user, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }
        Self::with_transport(builder.build(), &config.contact_address)
    }

    pub fn with_transport(transport: SmtpTransport, contact_address: &str) -> Result<Self, MailError> {
        Ok(Self {
            transport,
            to: contact_address.parse()?,
        })
    }

    /// Plain-text message from the visitor to the contact address.
    pub fn build_message(&self, contact: &ContactMessage) -> Result<Message, MailError> {
        Ok(Message::builder()
            .from(contact.from.trim().parse()?)
            .to(self.to.clone())
            .subject(contact.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(contact.message.clone())?)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, contact: ContactMessage) -> Result<(), MailError> {
        let email = self.build_message(&contact)?;
        let transport = self.transport.clone();

        tokio::task::spawn_blocking(move || transport.send(&email)).await??;
        tracing::info!(to = %self.to, "Mail sent");
        Ok(())
    }
}
