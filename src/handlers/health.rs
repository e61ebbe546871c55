use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use hubspot_integration_middleware::utils::logging::*;
use hubspot_integration_middleware::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "hubspot-integration-middleware",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_integration_status_check();

    let oauth_configured =
        !state.oauth.client_id.is_empty() && !state.oauth.client_secret.is_empty();

    Json(json!({
        "service": "hubspot-integration-middleware",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        "integrations": {
            "hubspot": {
                "oauth_configured": oauth_configured,
                "redirect_uri": state.oauth.redirect_uri,
                "base_url": state.settings.hubspot.base_url,
                "resource": "contacts"
            }
        },
        "state_store": {
            "backend": "in-memory",
            "ttl_seconds": hubspot_integration_middleware::auth::EPHEMERAL_TTL_SECONDS
        },
        "frontend_origin": state.settings.frontend.origin
    }))
}
