use anyhow::Context;
use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loto_core::catalog::{CatalogService, CatalogSnapshot};
use loto_core::domain::contract::validate_preferences;
use loto_core::domain::preferences::UserPreferences;
use loto_core::ingest::provider::HttpCatalogSource;

#[derive(Debug, Parser)]
#[command(name = "loto_worker")]
struct Args {
    /// UserPreferences JSON file. When given, prints recommendations instead of the catalog.
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Lottery ids the user has already seen.
    #[arg(long, value_delimiter = ',')]
    previous_ids: Option<Vec<String>>,

    /// Skip the upstream and use the built-in catalog.
    #[arg(long)]
    fallback_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = loto_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args, &settings).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %format!("{err:#}"), "worker failed");
        return Err(err);
    }
    Ok(())
}

async fn run(args: &Args, settings: &loto_core::config::Settings) -> anyhow::Result<()> {
    let snapshot = if args.fallback_only {
        CatalogService::fallback()
    } else {
        let source = HttpCatalogSource::from_settings(settings)?;
        tracing::info!(url = %source.url(), "resolving catalog");
        let service = CatalogService::new(Arc::new(source), settings.cache_ttl);
        service.resolve().await
    };

    tracing::info!(
        origin = ?snapshot.origin,
        fetched_at = %snapshot.fetched_at.to_rfc3339(),
        lotteries = snapshot.lotteries.len(),
        "catalog resolved"
    );

    let out = match &args.preferences {
        None => serde_json::to_string_pretty(&snapshot)?,
        Some(path) => {
            let prefs = read_preferences(path)?;
            let previous = args.previous_ids.as_deref().map(previous_id_set);
            let response = recommend_active(&snapshot, &prefs, previous.as_ref());
            serde_json::to_string_pretty(&response)?
        }
    };

    println!("{out}");
    Ok(())
}

fn read_preferences(path: &std::path::Path) -> anyhow::Result<UserPreferences> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read preferences file {}", path.display()))?;
    let prefs: UserPreferences = serde_json::from_str(&raw)
        .with_context(|| format!("parse preferences file {}", path.display()))?;
    validate_preferences(&prefs).context("invalid preferences")?;
    Ok(prefs)
}

fn previous_id_set(ids: &[String]) -> BTreeSet<String> {
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn recommend_active(
    snapshot: &CatalogSnapshot,
    prefs: &UserPreferences,
    previous: Option<&BTreeSet<String>>,
) -> loto_core::domain::recommendation::RecommendationResponse {
    loto_core::recommend::recommend(&snapshot.active_lotteries(), prefs, previous)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "loto_worker",
            "--preferences",
            "prefs.json",
            "--previous-ids",
            "1, 6",
            "--fallback-only",
        ]);
        assert!(args.fallback_only);
        assert_eq!(args.preferences, Some(PathBuf::from("prefs.json")));

        let ids = previous_id_set(args.previous_ids.as_deref().unwrap());
        assert_eq!(ids, BTreeSet::from(["1".to_string(), "6".to_string()]));
    }

    #[test]
    fn recommends_from_fallback_snapshot() {
        let prefs: UserPreferences = serde_json::from_value(serde_json::json!({
            "ticketPrice": {"min": 50, "max": 100},
            "playFrequency": "ежедневно",
            "maxJackpot": {"min": 1000000, "max": 10000000},
            "winProbability": {"min": 0.001, "max": 1},
        }))
        .unwrap();

        let mut snapshot = CatalogService::fallback();
        snapshot.lotteries[4].is_active = false;
        let hidden = snapshot.lotteries[4].id.clone();

        let response = recommend_active(&snapshot, &prefs, None);
        assert!(response.total_matches > 0);
        assert!(response.recommendations.iter().all(|r| r.lottery.id != hidden));
    }
}
