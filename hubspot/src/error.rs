//! Tipos de erro para o crate hubspot

use thiserror::Error;

/// Erros do cliente HubSpot
#[derive(Debug, Error)]
pub enum HubSpotError {
    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do HubSpot (status code não-2xx)
    #[error("HubSpot API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl HubSpotError {
    /// Status HTTP retornado pela API, quando houver
    pub fn status(&self) -> Option<u16> {
        match self {
            HubSpotError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Verdadeiro quando o erro é um 401 da API (token expirado/inválido)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, HubSpotError>;
