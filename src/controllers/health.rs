//! Health check endpoint
//!
//! Reports service health including document-store connectivity

use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::DatabasePool;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Database connection status
    pub database: String,
}

/// Health check including database connectivity
///
/// Issues one lightweight ping against the store, bounded by the configured
/// server-selection timeout.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and store are healthy", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse),
    )
)]
#[get("/api/health")]
pub async fn health(pool: Data<DatabasePool>) -> impl Responder {
    let connected = match pool.ping().await {
        Ok(()) => true,
        Err(e) => {
            ::tracing::warn!(error = %e, "health check failed");
            false
        }
    };

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
    };

    if connected {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
