// src/application/ports/mod.rs
pub mod notification;
pub mod security;
pub mod time;
