// src/application/queries/publishers/mod.rs
mod service;

pub use service::PublisherQueryService;
