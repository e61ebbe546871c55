//! OAuth2 HTTP Handlers
//!
//! Endpoints HTTP para iniciar e completar o fluxo OAuth2

use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::state::{state_key, AuthorizationState, EPHEMERAL_TTL_SECONDS};
use super::OAuth2Client;
use crate::models::credentials_key;
use crate::services::StateStore;
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

/// Identificação do caller que inicia a autorização
#[derive(Debug, Deserialize)]
pub struct AuthorizeRequest {
    pub user_id: String,
    pub org_id: String,
}

/// Parâmetros do callback OAuth2
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    /// Authorization code retornado pelo HubSpot
    pub code: Option<String>,
    /// State serializado, ecoado pelo redirect
    pub state: Option<String>,
    /// Erro retornado pelo HubSpot (se o usuário negou o consentimento)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// POST /integrations/hubspot/authorize
///
/// Gera o state anti-CSRF, grava a cópia server-side e devolve a URL de
/// autorização para o frontend abrir em popup.
pub async fn authorize(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<AuthorizeRequest>,
) -> Result<Json<String>, AppError> {
    log_request_received("/integrations/hubspot/authorize", "POST");

    let auth_state = AuthorizationState::new(&payload.user_id, &payload.org_id);
    let encoded_state = serde_json::to_string(&auth_state)?;

    state
        .store
        .set(
            &state_key(&payload.org_id, &payload.user_id),
            encoded_state.clone(),
            EPHEMERAL_TTL_SECONDS,
        )
        .await;

    let auth_url = state.oauth.authorization_url(&encoded_state);

    log_info(&format!(
        "🚀 [OAuth2] Autorização iniciada para org={} user={}",
        payload.org_id, payload.user_id
    ));

    Ok(Json(auth_url))
}

/// GET /integrations/hubspot/oauth2callback
///
/// Valida o callback, troca o code por tokens e cacheia as credenciais.
/// Cada falha de validação é terminal (sem retry).
pub async fn oauth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<Html<&'static str>, AppError> {
    log_request_received("/integrations/hubspot/oauth2callback", "GET");

    // 1. Provider recusou o consentimento
    if params.error.is_some() {
        let description = params.error_description.or(params.error).unwrap_or_default();
        log_warning(&format!(
            "⚠️ [OAuth2] Autorização negada pelo HubSpot: {}",
            description
        ));
        return Err(AppError::UpstreamAuthorization(description));
    }

    // 2. Parâmetros obrigatórios
    let encoded_state = params.state.ok_or(AppError::MissingState)?;
    let code = params
        .code
        .ok_or_else(|| AppError::ValidationError("Missing code parameter".to_string()))?;

    // 3. O state embute user_id/org_id: sem lookup extra para achar a chave
    let auth_state: AuthorizationState = serde_json::from_str(&encoded_state)?;
    let key = state_key(&auth_state.org_id, &auth_state.user_id);

    // 4. Guard anti-CSRF/replay contra a cópia server-side
    validate_state(state.store.as_ref(), &key, &auth_state).await?;

    // 5. Troca do code e destruição do state, disparados juntos e ambos
    //    aguardados (não há dependência de dados entre eles)
    let oauth_client = OAuth2Client::new(state.oauth.clone());
    let (exchange_result, _) = tokio::join!(
        oauth_client.exchange_code_for_token(&code),
        state.store.delete(&key),
    );
    let credentials = exchange_result?;

    // 6-7. Persistir a resposta completa do token endpoint (cache de
    //      leitura única; durabilidade é responsabilidade do caller)
    let serialized = serde_json::to_string(&credentials)?;
    state
        .store
        .set(
            &credentials_key(&auth_state.org_id, &auth_state.user_id),
            serialized,
            EPHEMERAL_TTL_SECONDS,
        )
        .await;

    log_info(&format!(
        "✅ [OAuth2] Credenciais armazenadas para org={} user={}",
        auth_state.org_id, auth_state.user_id
    ));

    // 8. Página mínima que só fecha o popup que hospedou o callback
    Ok(render_close_page())
}

/// Compara o state do callback com a cópia armazenada
///
/// O state é single-use: uma cópia armazenada que não bate com o callback
/// também é destruída.
async fn validate_state(
    store: &dyn StateStore,
    key: &str,
    received: &AuthorizationState,
) -> AppResult<()> {
    let saved = match store.get(key).await {
        Some(saved) => saved,
        None => return Err(AppError::StateMismatch),
    };

    let saved_state: AuthorizationState = serde_json::from_str(&saved)?;

    if saved_state.state != received.state {
        store.delete(key).await;
        log_warning("⚠️ [OAuth2] State do callback não confere com a cópia armazenada");
        return Err(AppError::StateMismatch);
    }

    Ok(())
}

/// Página de confirmação: sinaliza o fim do fluxo fechando a janela
fn render_close_page() -> Html<&'static str> {
    Html("<html><script>window.close();</script></html>")
}
