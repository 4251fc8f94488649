// src/infrastructure/notifications/mod.rs
mod mailer;
mod social;
#[cfg(test)]
mod test_server;

pub use mailer::{HttpMailer, LogMailer};
pub use social::{DisabledSocialPublisher, HttpSocialPublisher};
