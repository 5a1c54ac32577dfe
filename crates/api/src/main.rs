use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loto_core::catalog::CatalogService;
use loto_core::ingest::provider::HttpCatalogSource;

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = loto_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let source = HttpCatalogSource::from_settings(&settings)?;
    let policy = source.policy();
    tracing::info!(
        url = %source.url(),
        attempts = policy.attempts,
        timeout = ?policy.timeout,
        worst_case = ?policy.worst_case(),
        cache_ttl = ?settings.cache_ttl,
        "catalog source configured"
    );

    let state = routes::AppState {
        catalog: Arc::new(CatalogService::new(Arc::new(source), settings.cache_ttl)),
    };
    let app = routes::app(state, &settings, &policy);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

fn init_sentry(settings: &loto_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
