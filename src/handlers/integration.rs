//! Endpoints de credenciais e sincronização consumidos pelo frontend

use axum::extract::State;
use axum::response::Json;
use axum::Form;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use hubspot_integration_middleware::models::Credentials;
use hubspot_integration_middleware::services;
use hubspot_integration_middleware::utils::logging::*;
use hubspot_integration_middleware::utils::AppError;
use hubspot_integration_middleware::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub user_id: String,
    pub org_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LoadRequest {
    /// Credenciais serializadas, como devolvidas por /credentials
    pub credentials: String,
}

/// POST /integrations/hubspot/credentials
///
/// Entrega (e consome) as credenciais cacheadas pelo callback OAuth2.
pub async fn get_credentials(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<CredentialsRequest>,
) -> Result<Json<Credentials>, AppError> {
    log_request_received("/integrations/hubspot/credentials", "POST");

    let credentials =
        services::hubspot_items::get_credentials(state.store.as_ref(), &payload.user_id, &payload.org_id)
            .await?;

    Ok(Json(credentials))
}

/// POST /integrations/hubspot/load
///
/// Sincroniza contatos. `new_credentials` vem preenchido quando o access
/// token foi renovado no meio do fetch — o frontend é responsável por
/// persistir.
pub async fn load_items(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<LoadRequest>,
) -> Result<Json<Value>, AppError> {
    log_request_received("/integrations/hubspot/load", "POST");

    let credentials: Credentials = serde_json::from_str(&payload.credentials)?;

    let (items, updated_credentials) = state.items.fetch_items(credentials).await;

    let new_credentials = match updated_credentials {
        Some(credentials) => Some(serde_json::to_string(&credentials)?),
        None => None,
    };

    Ok(Json(json!({
        "data": items,
        "new_credentials": new_credentials,
    })))
}
