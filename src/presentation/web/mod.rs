// src/presentation/web/mod.rs
//! Server-rendered pages. Sessions carry the same access token the JSON API
//! accepts, stored in a cookie.

mod context;
mod error;
mod handlers;
pub mod routes;
mod session;
mod templates;

pub use session::{FLASH_COOKIE, SESSION_COOKIE};
