// src/presentation/web/session.rs
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE: &str = "newsroom_session";
pub const FLASH_COOKIE: &str = "newsroom_flash";

const FLASH_MAX_AGE_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

/// A one-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Cookie-safe form: urlencoded pairs, so `;` and `,` never reach the
    /// header.
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        serde_urlencoded::from_str(raw).ok()
    }
}

fn cookie(name: &str, value: &str, max_age: i64, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn session_cookie(token: &str, max_age: i64, secure: bool) -> String {
    cookie(SESSION_COOKIE, token, max_age, secure)
}

pub fn clear_session_cookie(secure: bool) -> String {
    cookie(SESSION_COOKIE, "", 0, secure)
}

pub fn flash_cookie(flash: &Flash, secure: bool) -> String {
    cookie(FLASH_COOKIE, &flash.encode(), FLASH_MAX_AGE_SECS, secure)
}

pub fn clear_flash_cookie(secure: bool) -> String {
    cookie(FLASH_COOKIE, "", 0, secure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_survives_cookie_encoding() {
        let flash = Flash::success("Article \"Big; News, Today\" approved!");
        let encoded = flash.encode();
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(','));
        assert!(!encoded.contains(' '));
        assert_eq!(Flash::decode(&encoded), Some(flash));
    }

    #[test]
    fn garbage_flash_is_ignored() {
        assert_eq!(Flash::decode("level=shout&message=x"), None);
        assert_eq!(Flash::decode(""), None);
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("tok", 3600, true);
        assert!(cookie.starts_with("newsroom_session=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(cookie.ends_with("; Secure"));
        assert!(!clear_session_cookie(false).contains("Secure"));
        assert!(clear_session_cookie(false).contains("Max-Age=0"));
    }
}
