use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::AppState;

/// Liveness report for the service and its item store.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// `healthy`, or `degraded` when the item store check fails
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
    pub environment: String,
    pub uptime_secs: u64,
    pub item_store: ItemStoreHealth,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemStoreHealth {
    pub status: String,
    /// Number of stored items, when the store answered
    pub item_count: Option<usize>,
    pub response_time_ms: u64,
    pub error_message: Option<String>,
}

impl HealthStatus {
    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Health check backed by a listing of the item store
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 503, description = "Item store unavailable", body = HealthStatus)
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthStatus>) {
    let started = Instant::now();
    let listing = state.item_service.list_items().await;
    let response_time_ms = started.elapsed().as_millis() as u64;

    let item_store = match listing {
        Ok(items) => ItemStoreHealth {
            status: "healthy".to_string(),
            item_count: Some(items.len()),
            response_time_ms,
            error_message: None,
        },
        Err(e) => {
            warn!(error = %e, "Item store health check failed");
            ItemStoreHealth {
                status: "unhealthy".to_string(),
                item_count: None,
                response_time_ms,
                error_message: Some(e.to_string()),
            }
        }
    };

    let health = HealthStatus {
        status: if item_store.error_message.is_none() {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        item_store,
    };

    let status = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health))
}
