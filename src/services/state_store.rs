//! Store efêmero de chave/valor com expiração por chave
//!
//! Guarda o state anti-CSRF e as credenciais recém-trocadas do fluxo
//! OAuth2. O contrato é o de um cache transitório (set com TTL, get,
//! delete), mais o `consume` atômico para os dados de uso único.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Contrato do store efêmero
///
/// `consume` é o read-then-delete atômico: quem consome a chave recebe o
/// valor exatamente uma vez, mesmo com chamadas concorrentes.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn set(&self, key: &str, value: String, expire_seconds: u64);
    async fn get(&self, key: &str) -> Option<String>;
    async fn delete(&self, key: &str);
    async fn consume(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Implementação em memória do store efêmero
///
/// Entradas expiradas ficam invisíveis para `get`/`consume`; a limpeza
/// física acontece de forma oportunista nos inserts.
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

const CLEANUP_THRESHOLD: usize = 1000;

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn set(&self, key: &str, value: String, expire_seconds: u64) {
        let mut entries = self.entries.write().await;

        if entries.len() > CLEANUP_THRESHOLD {
            let now = Utc::now();
            entries.retain(|_, entry| entry.expires_at > now);
        }

        entries.insert(
            key.to_string(),
            StoredEntry {
                value,
                expires_at: Utc::now() + Duration::seconds(expire_seconds as i64),
            },
        );
    }

    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;

        entries
            .get(key)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.value.clone())
    }

    async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    async fn consume(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.write().await;

        match entries.remove(key) {
            Some(entry) if entry.expires_at > Utc::now() => Some(entry.value),
            _ => None,
        }
    }
}
