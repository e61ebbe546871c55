//! OAuth2 Configuration
//!
//! Credenciais do app HubSpot e endpoints do provider

use serde::{Deserialize, Serialize};

/// Endpoint de autorização do HubSpot
pub const AUTHORIZATION_ENDPOINT: &str = "https://app.hubspot.com/oauth/authorize";

/// Token endpoint do HubSpot (authorization_code e refresh_token grants)
pub const TOKEN_ENDPOINT: &str = "https://api.hubapi.com/oauth/v1/token";

/// Escopo fixo solicitado na autorização
pub const OAUTH_SCOPE: &str = "crm.objects.contacts.read oauth";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Config {
    /// Client ID fornecido pelo HubSpot
    pub client_id: String,

    /// Client Secret fornecido pelo HubSpot
    pub client_secret: String,

    /// URL de callback registrada no HubSpot App
    pub redirect_uri: String,

    /// Endpoint de autorização (fixo; campo público para os testes)
    pub authorization_endpoint: String,

    /// Token endpoint (fixo; campo público para os testes)
    pub token_endpoint: String,
}

impl OAuth2Config {
    /// Criar configuração a partir de variáveis de ambiente
    ///
    /// As três credenciais são obrigatórias; a ausência de qualquer uma é
    /// erro de configuração na inicialização, não por request.
    pub fn from_env() -> Result<Self, String> {
        let client_id = std::env::var("HUBSPOT_CLIENT_ID")
            .map_err(|_| "HUBSPOT_CLIENT_ID não configurado".to_string())?;

        let client_secret = std::env::var("HUBSPOT_CLIENT_SECRET")
            .map_err(|_| "HUBSPOT_CLIENT_SECRET não configurado".to_string())?;

        let redirect_uri = std::env::var("HUBSPOT_REDIRECT_URI")
            .map_err(|_| "HUBSPOT_REDIRECT_URI não configurado".to_string())?;

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            authorization_endpoint: AUTHORIZATION_ENDPOINT.to_string(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
        })
    }

    /// Gerar URL de autorização do HubSpot
    ///
    /// O state serializado completo vai na query string: o callback recupera
    /// user_id/org_id dele sem precisar de índice de lookup separado.
    pub fn authorization_url(&self, encoded_state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&scope={}&state={}",
            self.authorization_endpoint,
            self.client_id,
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(OAUTH_SCOPE),
            urlencoding::encode(encoded_state),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OAuth2Config {
        OAuth2Config {
            client_id: "test_client_id".to_string(),
            client_secret: "test_secret".to_string(),
            redirect_uri: "https://example.com/callback".to_string(),
            authorization_endpoint: AUTHORIZATION_ENDPOINT.to_string(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
        }
    }

    #[test]
    fn test_authorization_url() {
        let url = config().authorization_url("{\"state\":\"abc\"}");

        assert!(url.starts_with("https://app.hubspot.com/oauth/authorize?"));
        assert!(url.contains("client_id=test_client_id"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"));
        assert!(url.contains("scope=crm.objects.contacts.read%20oauth"));
        assert!(url.contains("state=%7B%22state%22%3A%22abc%22%7D"));
    }
}
