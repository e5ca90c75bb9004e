//! Outbound mail via SMTP.
//!
//! Sends are best-effort: a disabled or misconfigured mailer, an invalid
//! address, or a transport failure logs the problem and reports `false`.
//! Nothing here ever fails a request.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;

/// SMTP mail sender configured from the environment.
pub struct Mailer {
    enabled: bool,
    sender: String,
    password: String,
    manager_email: String,
    smtp_server: String,
    smtp_port: u16,
}

impl Mailer {
    pub fn new(config: &Config) -> Self {
        Self {
            enabled: config.email_enabled,
            sender: config.email_sender.clone(),
            password: config.email_password.clone(),
            manager_email: config.manager_email.clone(),
            smtp_server: config.smtp_server.clone(),
            smtp_port: config.smtp_port,
        }
    }

    /// Send an HTML mail. `to` defaults to the manager address. Returns
    /// whether the mail actually went out.
    pub async fn send(&self, subject: &str, body: String, to: Option<&str>) -> bool {
        if !self.enabled {
            tracing::info!("Email disabled. Would have sent: {}", subject);
            return false;
        }
        if self.password.is_empty() {
            tracing::warn!("Email password not configured");
            return false;
        }

        let recipient = to.unwrap_or(&self.manager_email);
        match self.try_send(subject, body, recipient).await {
            Ok(()) => {
                tracing::info!("Email sent successfully: {}", subject);
                true
            }
            Err(err) => {
                tracing::error!("Error sending email: {}", err);
                false
            }
        }
    }

    async fn try_send(
        &self,
        subject: &str,
        body: String,
        to: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let message = Message::builder()
            .from(self.sender.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_server)?
            .port(self.smtp_port)
            .credentials(Credentials::new(
                self.sender.clone(),
                self.password.clone(),
            ))
            .build();

        transport.send(message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer(enabled: bool, password: &str) -> Mailer {
        Mailer {
            enabled,
            sender: "team.bot@example.com".to_string(),
            password: password.to_string(),
            manager_email: "manager@example.com".to_string(),
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: 587,
        }
    }

    #[tokio::test]
    async fn test_disabled_mailer_reports_not_sent() {
        let sent = mailer(false, "app-password")
            .send("subject", "<p>body</p>".to_string(), None)
            .await;
        assert!(!sent);
    }

    #[tokio::test]
    async fn test_missing_password_reports_not_sent() {
        let sent = mailer(true, "")
            .send("subject", "<p>body</p>".to_string(), None)
            .await;
        assert!(!sent);
    }
}
