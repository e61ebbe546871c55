//! State anti-CSRF do fluxo de autorização
//!
//! O state viaja pela URL de autorização e volta no callback; uma cópia
//! fica no store server-side. Os dois precisam bater para o callback ser
//! aceito, e a cópia armazenada é de uso único.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Bytes de entropia do token de state (256 bits)
const STATE_TOKEN_BYTES: usize = 32;

/// TTL do state e das credenciais cacheadas no store (segundos)
pub const EPHEMERAL_TTL_SECONDS: u64 = 600;

/// State de uma tentativa de autorização
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationState {
    /// Token aleatório único desta tentativa
    pub state: String,

    pub user_id: String,
    pub org_id: String,
}

impl AuthorizationState {
    pub fn new(user_id: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self {
            state: generate_state_token(),
            user_id: user_id.into(),
            org_id: org_id.into(),
        }
    }
}

/// Gera um token aleatório URL-safe com 32 bytes de entropia
fn generate_state_token() -> String {
    let mut bytes = [0u8; STATE_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Chave do state no store efêmero
pub fn state_key(org_id: &str, user_id: &str) -> String {
    format!("hubspot_state:{}:{}", org_id, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_token_has_full_entropy() {
        let state = AuthorizationState::new("user-1", "org-1");

        // 32 bytes em base64 sem padding = 43 caracteres
        assert_eq!(state.state.len(), 43);
        assert!(!state.state.contains('='));
        assert!(!state.state.contains('+'));
        assert!(!state.state.contains('/'));
    }

    #[test]
    fn test_state_tokens_are_unique() {
        let a = AuthorizationState::new("user-1", "org-1");
        let b = AuthorizationState::new("user-1", "org-1");

        assert_ne!(a.state, b.state);
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let state = AuthorizationState::new("user-1", "org-1");
        let encoded = serde_json::to_string(&state).unwrap();
        let decoded: AuthorizationState = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.state, state.state);
        assert_eq!(decoded.user_id, "user-1");
        assert_eq!(decoded.org_id, "org-1");
    }

    #[test]
    fn test_state_key_format() {
        assert_eq!(state_key("org-9", "user-7"), "hubspot_state:org-9:user-7");
    }
}
