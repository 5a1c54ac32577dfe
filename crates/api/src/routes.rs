use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use loto_core::catalog::CatalogService;
use loto_core::config::Settings;
use loto_core::domain::contract::RecommendationRequest;
use loto_core::domain::lottery::Lottery;
use loto_core::domain::preferences::FilterCriteria;
use loto_core::domain::recommendation::RecommendationResponse;
use loto_core::ingest::provider::RetryPolicy;

/// Slack on top of the slowest possible catalog fetch.
const FETCH_HEADROOM: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/lotteries", get(list_lotteries))
        .route("/api/lotteries/:id", get(get_lottery))
        .route("/api/recommendations", post(create_recommendations))
        .route("/api/filter", post(filter_lotteries))
        .with_state(state)
}

/// The served application: routes plus the middleware stack.
pub fn app(state: AppState, settings: &Settings, policy: &RetryPolicy) -> Router {
    with_layers(router(state), settings, policy)
}

fn with_layers(router: Router, settings: &Settings, policy: &RetryPolicy) -> Router {
    router
        .layer(TimeoutLayer::new(request_timeout(settings.request_timeout, policy)))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&settings.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Outer request timeout. Never shorter than a full catalog fetch, so a slow upstream is
/// answered with the fallback catalog instead of a 408.
pub fn request_timeout(configured: Duration, policy: &RetryPolicy) -> Duration {
    let floor = policy.worst_case().saturating_add(FETCH_HEADROOM);
    if configured < floor {
        tracing::warn!(
            ?configured,
            effective = ?floor,
            "request timeout shorter than a full catalog fetch; raising it"
        );
        return floor;
    }
    configured
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// Sentry's panic integration reports the panic itself.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(%detail, "request handler panicked");
    internal_error_response()
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal server error".to_string(),
            details: None,
        }),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(&'static str),
    /// Reported to Sentry; the client only sees a generic 500.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid request data".to_string(),
                    details: Some(details),
                },
            ),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: format!("{what} not found"),
                    details: None,
                },
            ),
            ApiError::Internal(err) => {
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %format!("{err:#}"), "request failed");
                return internal_error_response();
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
}

async fn healthz() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
    })
}

async fn list_lotteries(State(state): State<AppState>) -> Result<Json<Vec<Lottery>>, ApiError> {
    Ok(Json(state.catalog.lotteries().await?))
}

async fn get_lottery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lottery>, ApiError> {
    state
        .catalog
        .lottery_by_id(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Lottery"))
}

async fn create_recommendations(
    State(state): State<AppState>,
    body: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let Json(request) = body?;
    let request = request.validate_and_into_request().map_err(|e| {
        tracing::debug!(error = %e, "rejected recommendation request");
        ApiError::BadRequest(e.to_string())
    })?;

    let catalog = state.catalog.active_lotteries().await?;
    let response = loto_core::recommend::recommend(
        &catalog,
        &request.preferences,
        request.previous_lottery_ids.as_ref(),
    );
    tracing::info!(
        candidates = catalog.len(),
        matches = response.total_matches,
        average = response.average_match_score,
        "recommendations served"
    );
    Ok(Json(response))
}

async fn filter_lotteries(
    State(state): State<AppState>,
    body: Result<Json<FilterCriteria>, JsonRejection>,
) -> Result<Json<Vec<Lottery>>, ApiError> {
    let Json(criteria) = body?;
    criteria
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(state.catalog.filter(&criteria).await?))
}
