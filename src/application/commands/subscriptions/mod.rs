// src/application/commands/subscriptions/mod.rs
mod service;
mod toggle;

pub use service::SubscriptionCommandService;
pub use toggle::ToggleSubscriptionCommand;
