use crate::domain::lottery::Lottery;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Upstream,
    Fallback,
}

/// One resolved catalog. Replaced wholesale on refresh, never edited in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub origin: CatalogOrigin,
    pub fetched_at: DateTime<Utc>,
    pub lotteries: Vec<Lottery>,
}

impl CatalogSnapshot {
    pub fn new(origin: CatalogOrigin, lotteries: Vec<Lottery>) -> Self {
        Self {
            origin,
            fetched_at: Utc::now(),
            lotteries,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Lottery> {
        self.lotteries.iter().find(|l| l.id == id)
    }

    /// Lotteries eligible for recommendation.
    pub fn active_lotteries(&self) -> Vec<Lottery> {
        self.lotteries.iter().filter(|l| l.is_active).cloned().collect()
    }
}

#[derive(Debug)]
struct CachedCatalog {
    snapshot: Arc<CatalogSnapshot>,
    stored_at: Instant,
}

/// Time-boxed holder for the last resolved catalog. Expiry is passive and all-or-nothing:
/// once the window has elapsed every read misses, even though the entry is still held.
#[derive(Debug)]
pub struct CatalogCache {
    ttl: Duration,
    slot: Mutex<Option<CachedCatalog>>,
}

impl CatalogCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub async fn get(&self) -> Option<Arc<CatalogSnapshot>> {
        let guard = self.slot.lock().await;
        guard
            .as_ref()
            .filter(|cached| cached.stored_at.elapsed() < self.ttl)
            .map(|cached| cached.snapshot.clone())
    }

    pub async fn set(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(snapshot);
        let mut guard = self.slot.lock().await;
        *guard = Some(CachedCatalog {
            snapshot: snapshot.clone(),
            stored_at: Instant::now(),
        });
        snapshot
    }

    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    pub async fn lookup(&self, id: &str) -> Option<Lottery> {
        self.get().await?.find(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lottery::LotteryType;
    use crate::testutil::lottery;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(
            CatalogOrigin::Upstream,
            vec![lottery("a", LotteryType::Instant, 50.0, 1_000_000.0, 0.01)],
        )
    }

    #[tokio::test(start_paused = true)]
    async fn serves_entries_until_ttl_elapses() {
        let cache = CatalogCache::new(Duration::from_secs(300));
        assert!(cache.get().await.is_none());

        cache.set(snapshot()).await;
        tokio::time::advance(Duration::from_secs(299)).await;
        assert!(cache.get().await.is_some());
        assert!(cache.lookup("a").await.is_some());
        assert!(cache.lookup("missing").await.is_none());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get().await.is_none());
        // Stale entries are not served by id either.
        assert!(cache.lookup("a").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn set_resets_the_window() {
        let cache = CatalogCache::new(Duration::from_secs(10));
        cache.set(snapshot()).await;
        tokio::time::advance(Duration::from_secs(8)).await;
        cache.set(snapshot()).await;
        tokio::time::advance(Duration::from_secs(8)).await;
        assert!(cache.get().await.is_some());
    }

    #[tokio::test]
    async fn invalidate_drops_the_entry() {
        let cache = CatalogCache::new(Duration::from_secs(300));
        cache.set(snapshot()).await;
        cache.invalidate().await;
        assert!(cache.get().await.is_none());
    }
}
