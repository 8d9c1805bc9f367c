use heritage_core::application::{
    ports::{time::Clock, util::Transliterator},
    services::ApplicationServices,
};
use heritage_core::config::AppConfig;
use heritage_core::domain::monument::{MonumentReadRepository, MonumentWriteRepository};
use heritage_core::infrastructure::{
    database,
    repositories::{SqliteMonumentReadRepository, SqliteMonumentWriteRepository},
    time::SystemClock,
    util::DeunicodeTransliterator,
};
use heritage_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let monument_write_repo: Arc<dyn MonumentWriteRepository> =
        Arc::new(SqliteMonumentWriteRepository::new(Arc::clone(&pool)));
    let monument_read_repo: Arc<dyn MonumentReadRepository> =
        Arc::new(SqliteMonumentReadRepository::new(Arc::clone(&pool)));

    let transliterator: Arc<dyn Transliterator> = Arc::new(DeunicodeTransliterator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&monument_write_repo),
        Arc::clone(&monument_read_repo),
        Arc::clone(&transliterator),
        Arc::clone(&clock),
        config.service_settings()?,
    ));

    tracing::info!(
        max_suffix = config.slug_max_suffix(),
        persist_attempts = config.slug_persist_attempts(),
        "slug assignment configured"
    );

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
