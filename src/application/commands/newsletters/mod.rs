// src/application/commands/newsletters/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateNewsletterCommand;
pub use delete::DeleteNewsletterCommand;
pub use service::NewsletterCommandService;
pub use update::UpdateNewsletterCommand;
