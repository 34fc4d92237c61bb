//! Health endpoint: probes postgres and the cache independently.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::warn;

use crate::infra::cache::CacheClient;
use crate::infra::http::api::state::ApiState;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
struct DatabaseHealth {
    postgres: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    valkey: Option<&'static str>,
}

pub async fn health(State(state): State<ApiState>) -> Response {
    let mut healthy = true;

    let postgres = match probe_postgres(&state).await {
        Ok(()) => "ok",
        Err(detail) => {
            warn!(target: "sakaya::http::health", detail = %detail, "postgres probe failed");
            healthy = false;
            "error"
        }
    };

    let valkey = match state.cache.as_ref() {
        Some(cache) => Some(match probe_cache(cache).await {
            Ok(()) => "ok",
            Err(detail) => {
                warn!(target: "sakaya::http::health", detail = %detail, "cache probe failed");
                healthy = false;
                "error"
            }
        }),
        None => None,
    };

    let (status, code) = if healthy {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    let body = HealthResponse {
        status,
        timestamp: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
        database: DatabaseHealth { postgres, valkey },
    };

    (code, Json(body)).into_response()
}

async fn probe_postgres(state: &ApiState) -> Result<(), String> {
    match tokio::time::timeout(PROBE_TIMEOUT, state.db.health_check()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(err.to_string()),
        Err(_) => Err("probe timed out".to_string()),
    }
}

async fn probe_cache(cache: &CacheClient) -> Result<(), String> {
    match tokio::time::timeout(PROBE_TIMEOUT, cache.health_check()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(err.to_string()),
        Err(_) => Err("probe timed out".to_string()),
    }
}
