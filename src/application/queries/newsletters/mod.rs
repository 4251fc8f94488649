// src/application/queries/newsletters/mod.rs
mod service;

pub use service::{GetNewsletterQuery, NewsletterQueryService};
