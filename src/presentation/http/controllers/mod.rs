// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod auth;
pub mod newsletters;
pub mod publishers;
pub mod subscriptions;
