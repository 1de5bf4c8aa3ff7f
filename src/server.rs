//! HTTP boundary for the translation engine.
//!
//! Input validation happens here: blank sentences never reach the engine.

use crate::assembler::TranslationResponse;
use crate::engine::{TableSummary, TranslateError, Translator};
use crate::matcher::MatchResult;
use crate::metrics::{MetricsReport, TranslationMetrics};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub metrics: Arc<TranslationMetrics>,
}

impl AppState {
    pub fn new(translator: Translator) -> Self {
        Self {
            translator: Arc::new(translator),
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    pub sentence: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub word: Option<String>,
}

/// One match in a `/lookup` response.
#[derive(Debug, Serialize)]
pub struct LookupMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    pub match_kind: String,
    pub source_table: Option<String>,
}

impl From<MatchResult> for LookupMatch {
    fn from(result: MatchResult) -> Self {
        Self {
            match_kind: result.match_kind.to_string(),
            source_table: result.source_table.clone(),
            result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub word: String,
    pub matches: Vec<LookupMatch>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub tables: Vec<TableSummary>,
}

/// Error body returned for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Request-level failures, all caused by invalid input.
#[derive(Debug)]
pub struct ApiError(TranslateError);

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.0.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Build the CORS layer from the configured origin allow-list.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/translate", get(translate))
        .route("/lookup", get(lookup))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `port` and serve until Ctrl+C, then log the final metrics.
pub async fn serve(state: AppState, cors: CorsLayer, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let metrics = state.metrics.clone();

    info!("Listening on {}", addr);
    axum::serve(listener, create_router(state, cors))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped\n{}", metrics.report().format());
    Ok(())
}

/// Wait for Ctrl+C. Without a signal handler the server runs until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn translate(
    State(state): State<AppState>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let sentence = params.sentence.unwrap_or_default();

    match state.translator.translate(&sentence) {
        Ok(response) => {
            state.metrics.record_translation(&response);
            info!(
                "Translated {} segment(s), {} hypothetical",
                response.morphology.len(),
                response.hypothetical_count()
            );
            Ok(Json(response))
        }
        Err(err) => {
            state.metrics.record_rejected();
            warn!("Rejected translate request: {}", err);
            Err(err.into())
        }
    }
}

async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    let word = params.word.unwrap_or_default();
    let matches = state.translator.lookup(&word)?;

    Ok(Json(LookupResponse {
        word: word.trim().to_string(),
        matches: matches.into_iter().map(LookupMatch::from).collect(),
    }))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        tables: state.translator.table_summaries(),
    })
}

async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.metrics.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_valid_origins() {
        let origins = vec![
            "http://localhost".to_string(),
            "https://quileutelanguage.com".to_string(),
        ];
        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let origins = vec!["http://bad\norigin".to_string()];
        assert!(cors_layer(&origins).is_err());
    }

    #[test]
    fn test_api_error_status() {
        let response = ApiError::from(TranslateError::EmptySentence).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
