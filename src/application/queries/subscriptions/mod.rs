// src/application/queries/subscriptions/mod.rs
mod service;

pub use service::SubscriptionQueryService;
