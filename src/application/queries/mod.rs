// src/application/queries/mod.rs
pub mod articles;
pub mod dashboard;
pub mod newsletters;
pub mod publishers;
pub mod subscriptions;
