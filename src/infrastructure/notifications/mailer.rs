// src/infrastructure/notifications/mailer.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::{EmailMessage, Mailer},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, instrument};

#[derive(Debug, Serialize)]
struct MailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
}

/// Delivers mail through a JSON mail API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
}

impl HttpMailer {
    pub fn new(
        client: Client,
        api_url: impl Into<String>,
        api_key: Option<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key,
            from: from.into(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    #[instrument(skip(self, message), fields(recipients = message.recipients.len()))]
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        let body = MailRequest {
            from: &self.from,
            to: &message.recipients,
            subject: &message.subject,
            text: &message.body,
        };

        let mut request = self.client.post(&self.api_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|err| {
            error!(error = ?err, "mail request failed");
            ApplicationError::infrastructure(format!("mail request failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "mail API returned an error");
            return Err(ApplicationError::infrastructure(format!(
                "mail API returned {status}"
            )));
        }
        Ok(())
    }
}

/// Writes messages to the log instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        info!(
            subject = %message.subject,
            recipients = ?message.recipients,
            body = %message.body,
            "email (log only)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notifications::test_server::{Endpoint, refused_url};
    use axum::http::StatusCode;
    use serde_json::json;
    use std::time::Duration;

    fn client() -> Client {
        Client::builder()
            .timeout(Duration::from_millis(300))
            .build()
            .unwrap()
    }

    fn message() -> EmailMessage {
        EmailMessage {
            subject: "New Article: Big Story".into(),
            body: "Hello!".into(),
            recipients: vec!["a@example.com".into(), "b@example.com".into()],
        }
    }

    #[tokio::test]
    async fn sends_one_request_for_all_recipients() {
        let endpoint = Endpoint::start(StatusCode::ACCEPTED, Duration::ZERO).await;
        let mailer = HttpMailer::new(
            client(),
            &endpoint.url,
            Some("mail-key".into()),
            "noreply@example.com",
        );

        mailer.send(&message()).await.unwrap();

        let received = endpoint.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].authorization.as_deref(), Some("Bearer mail-key"));
        assert_eq!(
            received[0].body,
            json!({
                "from": "noreply@example.com",
                "to": ["a@example.com", "b@example.com"],
                "subject": "New Article: Big Story",
                "text": "Hello!",
            })
        );
    }

    #[tokio::test]
    async fn omits_authorization_without_a_key() {
        let endpoint = Endpoint::start(StatusCode::OK, Duration::ZERO).await;
        let mailer = HttpMailer::new(client(), &endpoint.url, None, "noreply@example.com");

        mailer.send(&message()).await.unwrap();

        assert_eq!(endpoint.received()[0].authorization, None);
    }

    #[tokio::test]
    async fn error_status_is_a_failure() {
        let endpoint = Endpoint::start(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
        let mailer = HttpMailer::new(client(), &endpoint.url, None, "noreply@example.com");

        let err = mailer.send(&message()).await.unwrap_err();
        assert!(err.to_string().contains("500"), "{err}");
    }

    #[tokio::test]
    async fn slow_or_unreachable_api_is_a_failure() {
        let slow = Endpoint::start(StatusCode::OK, Duration::from_secs(5)).await;
        let mailer = HttpMailer::new(client(), &slow.url, None, "noreply@example.com");
        assert!(mailer.send(&message()).await.is_err());

        let mailer = HttpMailer::new(client(), refused_url().await, None, "noreply@example.com");
        assert!(mailer.send(&message()).await.is_err());
    }
}
