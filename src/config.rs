// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    biscuit_private_key: String,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    allowed_origins: Vec<String>,
    cookie_secure: bool,
    site_name: String,
    mail: MailConfig,
    social: SocialConfig,
}

/// Outbound mail delivery. Without an API URL messages are only logged.
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub from_address: String,
}

/// Outbound social post. Without a bearer token posting is disabled.
#[derive(Clone, Debug)]
pub struct SocialConfig {
    pub api_url: String,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://newsroom.db".into()
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const DEFAULT_ACCESS_TTL_SECS: u64 = 3600;
const DEFAULT_REFRESH_TTL_SECS: u64 = 86_400;
const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_SOCIAL_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SOCIAL_API_URL: &str = "https://api.twitter.com/2/tweets";

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let biscuit_private_key =
            get("BISCUIT_ROOT_PRIVATE_KEY").ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;

        if biscuit_private_key.len() != 64
            || !biscuit_private_key.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let access_ttl = parse_number(&get, "ACCESS_TOKEN_TTL_SECONDS", DEFAULT_ACCESS_TTL_SECS)?;
        let refresh_ttl =
            parse_number(&get, "REFRESH_TOKEN_TTL_SECONDS", DEFAULT_REFRESH_TTL_SECS)?;
        if access_ttl == 0 || refresh_ttl == 0 {
            return Err(ConfigError::Invalid("token TTLs must be positive".into()));
        }

        let database_max_connections = u32::try_from(parse_number(
            &get,
            "DATABASE_MAX_CONNECTIONS",
            u64::from(DEFAULT_MAX_CONNECTIONS),
        )?)
        .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS is too large".into()))?;

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let cookie_secure = get("COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let site_name = get("SITE_NAME").unwrap_or_else(|| "NewsApp".into());

        let mail = MailConfig {
            api_url: get("MAIL_API_URL"),
            api_key: get("MAIL_API_KEY"),
            from_address: get("MAIL_FROM").unwrap_or_else(|| "noreply@newsapp.local".into()),
        };

        let social = SocialConfig {
            api_url: get("SOCIAL_API_URL").unwrap_or_else(|| DEFAULT_SOCIAL_API_URL.into()),
            bearer_token: get("SOCIAL_BEARER_TOKEN"),
            timeout: Duration::from_secs(parse_number(
                &get,
                "SOCIAL_TIMEOUT_SECONDS",
                DEFAULT_SOCIAL_TIMEOUT_SECS,
            )?),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            biscuit_private_key,
            access_token_ttl: Duration::from_secs(access_ttl),
            refresh_token_ttl: Duration::from_secs(refresh_ttl),
            allowed_origins,
            cookie_secure,
            site_name,
            mail,
            social,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub const fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    pub const fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub const fn mail(&self) -> &MailConfig {
        &self.mail
    }

    pub const fn social(&self) -> &SocialConfig {
        &self.social
    }
}

fn parse_number<G>(get: &G, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    get(key).map_or(Ok(default), |raw| {
        raw.parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer")))
    })
}
