use crate::catalog::cache::{CatalogCache, CatalogOrigin, CatalogSnapshot};
use crate::domain::lottery::Lottery;
use crate::domain::preferences::FilterCriteria;
use crate::ingest::convert::convert_game;
use crate::ingest::fallback::fallback_catalog;
use crate::ingest::provider::CatalogSource;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Resolves the catalog through the upstream source, substituting the fallback catalog on
/// any upstream failure, and memoizes the result.
///
/// Accessors only fail if the refresh task itself dies (a panic in the source), which is an
/// internal error rather than an upstream one.
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    cache: Arc<CatalogCache>,
    // Serializes refreshes so concurrent misses share one upstream round trip.
    refresh: Arc<Mutex<()>>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: Arc::new(CatalogCache::new(ttl)),
            refresh: Arc::new(Mutex::new(())),
        }
    }

    /// The cached catalog, refreshing it first when the window has elapsed.
    ///
    /// The refresh runs on its own task: a caller that is dropped mid-refresh does not
    /// cancel it, and the result still lands in the cache.
    pub async fn catalog(&self) -> Result<Arc<CatalogSnapshot>> {
        if let Some(snapshot) = self.cache.get().await {
            return Ok(snapshot);
        }

        let source = self.source.clone();
        let cache = self.cache.clone();
        let refresh = self.refresh.clone();
        let task = tokio::spawn(async move {
            let _guard = refresh.lock().await;
            if let Some(snapshot) = cache.get().await {
                return snapshot;
            }

            let snapshot = resolve_from(source.as_ref()).await;
            tracing::debug!(
                origin = ?snapshot.origin,
                lotteries = snapshot.lotteries.len(),
                "catalog cache refreshed"
            );
            cache.set(snapshot).await
        });

        task.await.context("catalog refresh task failed")
    }

    /// Fetches and converts the upstream catalog without touching the cache.
    pub async fn resolve(&self) -> CatalogSnapshot {
        resolve_from(self.source.as_ref()).await
    }

    pub fn fallback() -> CatalogSnapshot {
        CatalogSnapshot::new(CatalogOrigin::Fallback, fallback_catalog())
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    pub async fn lotteries(&self) -> Result<Vec<Lottery>> {
        Ok(self.catalog().await?.lotteries.clone())
    }

    pub async fn active_lotteries(&self) -> Result<Vec<Lottery>> {
        Ok(self.catalog().await?.active_lotteries())
    }

    pub async fn lottery_by_id(&self, id: &str) -> Result<Option<Lottery>> {
        if let Some(hit) = self.cache.lookup(id).await {
            return Ok(Some(hit));
        }
        Ok(self.catalog().await?.find(id).cloned())
    }

    pub async fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Lottery>> {
        Ok(self
            .catalog()
            .await?
            .lotteries
            .iter()
            .filter(|l| criteria.matches(l))
            .cloned()
            .collect())
    }
}

async fn resolve_from(source: &dyn CatalogSource) -> CatalogSnapshot {
    let name = source.source_name();
    match source.fetch_games().await {
        Ok(games) if !games.is_empty() => {
            let lotteries: Vec<Lottery> = games.iter().map(convert_game).collect();
            tracing::info!(source = name, games = lotteries.len(), "loaded catalog from upstream");
            CatalogSnapshot::new(CatalogOrigin::Upstream, lotteries)
        }
        Ok(_) => {
            tracing::warn!(source = name, "upstream returned no games; using fallback catalog");
            CatalogService::fallback()
        }
        Err(err) => {
            tracing::warn!(source = name, error = %format!("{err:#}"), "upstream unavailable; using fallback catalog");
            CatalogService::fallback()
        }
    }
}
