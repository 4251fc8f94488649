// src/infrastructure/notifications/social.rs
use std::time::Duration;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::SocialPublisher,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{error, info, instrument};

/// Posts status updates to a tweet-style endpoint with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpSocialPublisher {
    client: Client,
    api_url: String,
    bearer_token: String,
}

impl HttpSocialPublisher {
    pub fn new(
        api_url: impl Into<String>,
        bearer_token: impl Into<String>,
        timeout: Duration,
    ) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            bearer_token: bearer_token.into(),
        })
    }
}

#[async_trait]
impl SocialPublisher for HttpSocialPublisher {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn publish(&self, text: &str) -> ApplicationResult<()> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.bearer_token)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|err| {
                let kind = if err.is_timeout() {
                    "timed out"
                } else if err.is_connect() {
                    "could not connect"
                } else {
                    "failed"
                };
                error!(error = ?err, "social post {kind}");
                ApplicationError::infrastructure(format!("social post {kind}: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "social API returned an error");
            return Err(ApplicationError::infrastructure(format!(
                "social API returned {status}"
            )));
        }
        info!("social post accepted");
        Ok(())
    }
}

/// Stands in when no bearer token is configured.
#[derive(Debug, Clone, Default)]
pub struct DisabledSocialPublisher;

#[async_trait]
impl SocialPublisher for DisabledSocialPublisher {
    async fn publish(&self, _text: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure(
            "social posting is not configured",
        ))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
