// src/application/commands/mod.rs
pub mod articles;
mod capability;
pub mod newsletters;
pub mod publishers;
pub mod subscriptions;
pub mod users;

pub(crate) use capability::ensure_capability;
