use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::models::SubmissionRecord;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Best-effort delivery of an accepted submission to the staff recipient.
/// The outcome is a logging signal only; the ingestion pipeline must never
/// let it affect acceptance of the submission itself.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, record: &SubmissionRecord) -> Result<(), String>;
}

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig, recipient: &str) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP transport error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            to: recipient.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, record: &SubmissionRecord) -> Result<(), String> {
        let subject = format!("Website Contact: {} - {}", record.service, record.name);
        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\nService: {}\n\nMessage:\n{}",
            record.name,
            record.email,
            record.phone.as_deref().unwrap_or(""),
            record.service,
            record.message,
        );

        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .reply_to(
                record
                    .email
                    .parse()
                    .map_err(|e| format!("Invalid reply-to address: {e}"))?,
            )
            .to(self
                .to
                .parse()
                .map_err(|e| format!("Invalid recipient address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("Failed to build email: {e}"))?;

        match tokio::time::timeout(SEND_TIMEOUT, self.transport.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(format!("Failed to send email: {e}")),
            Err(_) => Err(format!(
                "Send timed out after {}s",
                SEND_TIMEOUT.as_secs()
            )),
        }
    }
}
