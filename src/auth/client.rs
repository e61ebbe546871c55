//! OAuth2 HTTP Client
//!
//! Cliente HTTP isolado para o token endpoint do HubSpot

use reqwest::Client;

use super::OAuth2Config;
use crate::models::Credentials;
use crate::utils::logging::*;
use crate::utils::{truncate_safe, AppError, AppResult};

/// Cliente OAuth2 para HubSpot
///
/// Sessão de vida curta: criado por chamada, descartado em seguida.
pub struct OAuth2Client {
    config: OAuth2Config,
    http_client: Client,
}

impl OAuth2Client {
    /// Criar novo cliente OAuth2
    pub fn new(config: OAuth2Config) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Trocar authorization code por access/refresh tokens
    ///
    /// # Parâmetros
    /// - `code`: Authorization code recebido do callback
    ///
    /// # Retorno
    /// - `Ok(Credentials)`: resposta completa do token endpoint
    /// - `Err(AppError::TokenExchange)`: status não-2xx, com status e corpo
    ///   do upstream
    pub async fn exchange_code_for_token(&self, code: &str) -> AppResult<Credentials> {
        log_info(&format!(
            "🔐 [OAuth2] Trocando authorization code por tokens: {}...",
            truncate_safe(code, 10)
        ));

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.config.token_endpoint)
            .form(&params)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            log_error(&format!("❌ [OAuth2] Token exchange failed: {} - {}", status, body));
            return Err(AppError::TokenExchange {
                status: status.as_u16(),
                body,
            });
        }

        let credentials: Credentials = response.json().await.map_err(|e| {
            AppError::InternalError(format!("Falha ao parsear resposta do token: {}", e))
        })?;

        log_info(&format!(
            "✅ [OAuth2] Access token obtido: {}...",
            truncate_safe(&credentials.access_token, 20)
        ));

        Ok(credentials)
    }

    /// Renovar o access token via refresh_token grant
    ///
    /// Nunca retorna erro: qualquer falha degrada para `None` e o token
    /// vigente continua valendo.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Option<String> {
        log_info("🔄 [OAuth2] Renovando access token...");

        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = match self
            .http_client
            .post(&self.config.token_endpoint)
            .form(&params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log_error(&format!("❌ [OAuth2] Erro de rede ao renovar token: {}", e));
                return None;
            }
        };

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log_warning(&format!("⚠️ [OAuth2] Refresh recusado: {} - {}", status, body));
            return None;
        }

        match response.json::<serde_json::Value>().await {
            Ok(json) => {
                let new_token = json
                    .get("access_token")
                    .and_then(|v| v.as_str())
                    .map(String::from);

                if new_token.is_some() {
                    log_info("✅ [OAuth2] Access token renovado");
                } else {
                    log_warning("⚠️ [OAuth2] Resposta do refresh sem access_token");
                }

                new_token
            }
            Err(e) => {
                log_error(&format!("❌ [OAuth2] Falha ao parsear resposta do refresh: {}", e));
                None
            }
        }
    }
}
