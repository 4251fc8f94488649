// src/application/commands/publishers/mod.rs
mod create;
mod membership;
mod service;

pub use create::CreatePublisherCommand;
pub use membership::{JoinPublisherCommand, LeavePublisherCommand};
pub use service::PublisherCommandService;
