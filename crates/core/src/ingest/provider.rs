use crate::config::Settings;
use crate::ingest::types::{DrawsResponse, Game};
use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;

#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    fn source_name(&self) -> &'static str;

    /// Fetches and schema-checks the upstream game list. An empty list is a valid result;
    /// deciding what to do with it is up to the caller.
    async fn fetch_games(&self) -> Result<Vec<Game>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub attempts: u32,
    pub base_delay: Duration,
    /// Per-attempt request timeout.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl RetryPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            attempts: settings.catalog_retries.max(1),
            base_delay: settings.catalog_retry_base,
            timeout: settings.catalog_timeout,
        }
    }

    /// Delay slept after failed attempt number `attempt` (1-based): base × 2^(attempt-1).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exp)
    }

    /// Longest a full fetch can take: every attempt timing out plus the sleeps between them.
    pub fn worst_case(&self) -> Duration {
        let attempts = self.attempts.max(1);
        (1..attempts).fold(self.timeout.saturating_mul(attempts), |total, attempt| {
            total.saturating_add(self.backoff(attempt))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Network,
    Http,
    Schema,
}

/// Terminal failure of a catalog fetch, after retries where they apply.
#[derive(Debug, Clone)]
pub struct CatalogFetchError {
    pub stage: FetchStage,
    pub attempts: u32,
    pub detail: String,
}

impl fmt::Display for CatalogFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "catalog fetch failed (stage={:?}, attempts={}): {}",
            self.stage, self.attempts, self.detail
        )
    }
}

impl std::error::Error for CatalogFetchError {}

#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    http: reqwest::Client,
    base_url: String,
    path: String,
    policy: RetryPolicy,
}

impl HttpCatalogSource {
    pub fn new(
        base_url: impl Into<String>,
        path: impl Into<String>,
        policy: RetryPolicy,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(policy.timeout)
            .build()
            .context("failed to build catalog http client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            path: path.into(),
            policy,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.catalog_api_url(),
            settings.catalog_path.clone(),
            RetryPolicy::from_settings(settings),
        )
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn url(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };

        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn fetch_once(&self, attempt: u32) -> std::result::Result<String, CatalogFetchError> {
        let network = |err: reqwest::Error| CatalogFetchError {
            stage: FetchStage::Network,
            attempts: attempt,
            detail: err.to_string(),
        };

        let res = self
            .http
            .get(self.url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network)?;

        let status = res.status();
        let text = res.text().await.map_err(network)?;

        if !status.is_success() {
            return Err(CatalogFetchError {
                stage: FetchStage::Http,
                attempts: attempt,
                detail: format!("HTTP {status}: {text}"),
            });
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    fn source_name(&self) -> &'static str {
        "stoloto_http"
    }

    async fn fetch_games(&self) -> Result<Vec<Game>> {
        let max_attempts = self.policy.attempts.max(1);
        let mut attempt: u32 = 0;
        let body = loop {
            attempt += 1;
            match self.fetch_once(attempt).await {
                Ok(body) => {
                    if attempt > 1 {
                        tracing::info!(attempt, "catalog fetch succeeded after retry");
                    }
                    break body;
                }
                Err(err) => {
                    if attempt >= max_attempts {
                        tracing::warn!(attempts = attempt, error = %err, "catalog fetch attempts exhausted");
                        return Err(err.into());
                    }
                    let backoff = self.policy.backoff(attempt);
                    tracing::warn!(attempt, ?backoff, error = %err, "catalog fetch failed; retrying");
                    tokio::time::sleep(backoff).await;
                }
            }
        };

        parse_draws(&body).map_err(|err| {
            tracing::warn!(error = %err, "catalog payload failed schema validation");
            anyhow::Error::from(CatalogFetchError {
                stage: FetchStage::Schema,
                attempts: attempt,
                detail: format!("{err:#}"),
            })
        })
    }
}

/// Parses and validates an upstream draws payload.
pub fn parse_draws(body: &str) -> Result<Vec<Game>> {
    let parsed = serde_json::from_str::<DrawsResponse>(body)
        .context("catalog response does not match the draws schema")?;

    for game in &parsed.games {
        validate_game(game)?;
    }

    Ok(parsed.games)
}

fn validate_game(game: &Game) -> Result<()> {
    anyhow::ensure!(!game.name.trim().is_empty(), "game name must be non-empty");
    anyhow::ensure!(
        !game.display_name.trim().is_empty(),
        "displayName must be non-empty (game {})",
        game.name
    );
    anyhow::ensure!(
        game.ticket_price > 0,
        "ticketPrice must be positive (game {}, got {})",
        game.name,
        game.ticket_price
    );
    anyhow::ensure!(
        game.jackpot >= 0,
        "jackpot must be non-negative (game {}, got {})",
        game.name,
        game.jackpot
    );
    Ok(())
}
