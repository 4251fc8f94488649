// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Adds `Secure` to the session and flash cookies.
    pub cookie_secure: bool,
    pub site_name: Arc<str>,
}
