// src/main.rs
use anyhow::{Context, Result};
use newsroom_core::application::{
    notifications::NotificationSettings,
    ports::{
        notification::{Mailer, SocialPublisher},
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::{ApplicationServices, Outbound},
};
use newsroom_core::config::AppConfig;
use newsroom_core::infrastructure::{
    database,
    notifications::{DisabledSocialPublisher, HttpMailer, HttpSocialPublisher, LogMailer},
    repositories::sqlite_repositories,
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("opening database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let repos = sqlite_repositories(&pool);
    let outbound = Outbound {
        mailer: build_mailer(&config),
        social: build_social(&config)?,
        settings: NotificationSettings::new(config.site_name()),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.access_token_ttl(),
        config.refresh_token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        repos,
        outbound,
        password_hasher,
        token_manager,
        clock,
    ));

    let state = HttpState {
        services,
        cookie_secure: config.cookie_secure(),
        site_name: Arc::from(config.site_name()),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_mailer(config: &AppConfig) -> Arc<dyn Mailer> {
    let mail = config.mail();
    match &mail.api_url {
        Some(url) => {
            tracing::info!(%url, "sending approval emails through mail API");
            Arc::new(HttpMailer::new(
                reqwest::Client::new(),
                url.clone(),
                mail.api_key.clone(),
                mail.from_address.clone(),
            ))
        }
        None => {
            tracing::info!("MAIL_API_URL not set, approval emails will be logged");
            Arc::new(LogMailer)
        }
    }
}

fn build_social(config: &AppConfig) -> Result<Arc<dyn SocialPublisher>> {
    let social = config.social();
    match &social.bearer_token {
        Some(token) => Ok(Arc::new(HttpSocialPublisher::new(
            social.api_url.clone(),
            token.clone(),
            social.timeout,
        )?)),
        None => {
            tracing::info!("SOCIAL_BEARER_TOKEN not set, social posting disabled");
            Ok(Arc::new(DisabledSocialPublisher))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
