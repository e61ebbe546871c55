//! Credenciais OAuth2 retornadas pelo token endpoint do HubSpot

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resposta completa do token endpoint
///
/// Só `access_token` e `refresh_token` são interpretados; o resto
/// (`expires_in`, `token_type`, ...) é opaco e preservado via flatten para
/// que a serialização armazenada seja a resposta íntegra do provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Chave das credenciais no store efêmero
pub fn credentials_key(org_id: &str, user_id: &str) -> String {
    format!("hubspot_credentials:{}:{}", org_id, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_opaque_fields() {
        let json = r#"{
            "access_token": "at-1",
            "refresh_token": "rt-1",
            "token_type": "bearer",
            "expires_in": 1800
        }"#;

        let credentials: Credentials = serde_json::from_str(json).unwrap();
        assert_eq!(credentials.access_token, "at-1");
        assert_eq!(credentials.refresh_token.as_deref(), Some("rt-1"));

        let reserialized = serde_json::to_value(&credentials).unwrap();
        assert_eq!(reserialized.get("token_type").and_then(|v| v.as_str()), Some("bearer"));
        assert_eq!(reserialized.get("expires_in").and_then(|v| v.as_i64()), Some(1800));
    }

    #[test]
    fn test_refresh_token_optional() {
        let credentials: Credentials = serde_json::from_str(r#"{"access_token": "at-2"}"#).unwrap();
        assert!(credentials.refresh_token.is_none());

        let reserialized = serde_json::to_string(&credentials).unwrap();
        assert!(!reserialized.contains("refresh_token"));
    }

    #[test]
    fn test_credentials_key_format() {
        assert_eq!(credentials_key("org-9", "user-7"), "hubspot_credentials:org-9:user-7");
    }
}
