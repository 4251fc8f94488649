// tests/support/mocks/notify.rs
use async_trait::async_trait;
use newsroom_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::notification::{EmailMessage, Mailer, SocialPublisher},
};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl CapturingMailer {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Simulates an unreachable mail server.
#[derive(Debug, Default)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &EmailMessage) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("smtp connection refused"))
    }
}

#[derive(Debug, Default)]
pub struct CapturingSocial {
    posts: Mutex<Vec<String>>,
}

impl CapturingSocial {
    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialPublisher for CapturingSocial {
    async fn publish(&self, text: &str) -> ApplicationResult<()> {
        self.posts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Simulates a social API timeout.
#[derive(Debug, Default)]
pub struct FailingSocial;

#[async_trait]
impl SocialPublisher for FailingSocial {
    async fn publish(&self, _text: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("social api timed out"))
    }
}
