// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
    pub recipients: Vec<String>,
}

/// Delivers one message to all of its recipients in a single attempt.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()>;
}

/// Publishes a short status update to an external social network.
#[async_trait]
pub trait SocialPublisher: Send + Sync {
    async fn publish(&self, text: &str) -> ApplicationResult<()>;

    /// False when no credentials are configured; posts are then skipped.
    fn is_enabled(&self) -> bool {
        true
    }
}
