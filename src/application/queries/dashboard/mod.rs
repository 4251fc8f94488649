// src/application/queries/dashboard/mod.rs
mod service;

pub use service::DashboardQueryService;
