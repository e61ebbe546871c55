//! Cliente HTTP para a API do HubSpot

use crate::error::{HubSpotError, Result};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const BASE_URL: &str = "https://api.hubapi.com";

/// Cliente para interagir com a API do HubSpot
///
/// Autenticação via Bearer token (OAuth2 access token). O cliente é
/// descartável: o middleware cria um por chamada, com o token vigente.
#[derive(Clone)]
pub struct HubSpotClient {
    http_client: HttpClient,
    access_token: String,
    base_url: String,
}

impl HubSpotClient {
    /// Cria um novo cliente HubSpot
    ///
    /// # Argumentos
    ///
    /// * `access_token` - Access token OAuth2 vigente
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(access_token, BASE_URL)
    }

    /// Cria um novo cliente apontando para outra base URL
    ///
    /// Usado em testes (mock server) e em ambientes de sandbox.
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HubSpotError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            access_token: access_token.into(),
            base_url: base_url.into(),
        })
    }

    /// Executa uma requisição GET autenticada
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição GET e parseia JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.get(endpoint).await?;
        let json = response.json().await?;
        Ok(json)
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let status_code = status.as_u16();
            let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("HubSpot API error ({}): {}", status_code, error_body);

            // Tentar extrair mensagem de erro do JSON
            let message = if let Ok(json) = serde_json::from_str::<Value>(&error_body) {
                json.get("message")
                    .or_else(|| json.get("error"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(&error_body)
                    .to_string()
            } else {
                error_body
            };

            Err(HubSpotError::ApiError {
                status: status_code,
                message,
            })
        }
    }

    /// Obtém o access token em uso
    pub fn token(&self) -> &str {
        &self.access_token
    }

    /// Obtém a URL base
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
