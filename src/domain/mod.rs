// src/domain/mod.rs
pub mod access;
pub mod article;
pub mod errors;
pub mod newsletter;
pub mod publisher;
pub mod subscription;
pub mod user;
