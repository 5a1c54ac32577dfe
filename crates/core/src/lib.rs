pub mod catalog;
pub mod domain;
pub mod ingest;
pub mod recommend;

#[cfg(test)]
mod testutil;

pub mod config {
    use std::time::Duration;

    const DEFAULT_CATALOG_API_URL: &str = "http://localhost:8080";
    const DEFAULT_CATALOG_PATH: &str = "/api/draws/";
    const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_CATALOG_RETRIES: u32 = 3;
    const DEFAULT_CATALOG_RETRY_BASE_MS: u64 = 500;
    const DEFAULT_CACHE_TTL_SECS: u64 = 300;
    const DEFAULT_PORT: u16 = 5001;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5000,http://localhost:5001";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub catalog_api_url: Option<String>,
        pub catalog_path: String,
        /// Per-attempt upstream timeout, at least one second.
        pub catalog_timeout: Duration,
        /// Total attempts, at least one.
        pub catalog_retries: u32,
        pub catalog_retry_base: Duration,
        pub cache_ttl: Duration,
        pub sentry_dsn: Option<String>,
        pub port: u16,
        pub request_timeout: Duration,
        pub cors_allowed_origins: Vec<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self::from_lookup(|_| None)
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self::from_lookup(|key| std::env::var(key).ok()))
        }

        /// Builds settings from an arbitrary key lookup. Blank or unparsable values fall
        /// back to their defaults.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let text = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
            let parse = |key: &str| text(key).and_then(|s| s.trim().parse::<u64>().ok());

            let cors_allowed_origins = text("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();

            Self {
                catalog_api_url: text("STOLOTO_API_URL"),
                catalog_path: text("CATALOG_PATH").unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string()),
                catalog_timeout: Duration::from_secs(
                    parse("CATALOG_TIMEOUT_SECS")
                        .unwrap_or(DEFAULT_CATALOG_TIMEOUT_SECS)
                        .max(1),
                ),
                catalog_retries: text("CATALOG_RETRIES")
                    .and_then(|s| s.trim().parse::<u32>().ok())
                    .unwrap_or(DEFAULT_CATALOG_RETRIES)
                    .max(1),
                catalog_retry_base: Duration::from_millis(
                    parse("CATALOG_RETRY_BASE_MS").unwrap_or(DEFAULT_CATALOG_RETRY_BASE_MS),
                ),
                cache_ttl: Duration::from_secs(
                    parse("CATALOG_CACHE_TTL_SECS").unwrap_or(DEFAULT_CACHE_TTL_SECS),
                ),
                sentry_dsn: text("SENTRY_DSN"),
                port: text("PORT")
                    .and_then(|s| s.trim().parse::<u16>().ok())
                    .unwrap_or(DEFAULT_PORT),
                request_timeout: Duration::from_secs(
                    parse("REQUEST_TIMEOUT_SECS").unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
                ),
                cors_allowed_origins,
            }
        }

        /// Upstream base URL, falling back to the local catalog service.
        pub fn catalog_api_url(&self) -> &str {
            self.catalog_api_url
                .as_deref()
                .unwrap_or(DEFAULT_CATALOG_API_URL)
        }
    }

}
