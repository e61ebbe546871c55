//! Sincronização de contatos do HubSpot
//!
//! Best-effort: falha de fetch vira lista vazia logada, nunca erro para o
//! caller. A exceção é `get_credentials`, que mantém o contrato estrito do
//! cache de uso único.

use crate::auth::{OAuth2Client, OAuth2Config};
use crate::models::{credentials_key, Credentials, IntegrationItem};
use crate::services::state_store::StateStore;
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use hubspot::contacts::DEFAULT_CONTACT_PROPERTIES;
use hubspot::HubSpotClient;

/// Recupera e consome as credenciais cacheadas de (org_id, user_id)
///
/// O cache é de leitura única: a primeira chamada remove a entrada; uma
/// segunda chamada (ou uma entrada expirada) falha com
/// `CredentialsNotFound`.
pub async fn get_credentials(
    store: &dyn StateStore,
    user_id: &str,
    org_id: &str,
) -> AppResult<Credentials> {
    let raw = store
        .consume(&credentials_key(org_id, user_id))
        .await
        .ok_or(AppError::CredentialsNotFound)?;

    let credentials: Credentials = serde_json::from_str(&raw)?;
    Ok(credentials)
}

/// Serviço de sincronização de contatos
#[derive(Clone)]
pub struct HubSpotItemsService {
    oauth: OAuth2Config,
    api_base_url: String,
}

impl HubSpotItemsService {
    pub fn new(oauth: OAuth2Config, api_base_url: impl Into<String>) -> Self {
        Self {
            oauth,
            api_base_url: api_base_url.into(),
        }
    }

    /// Busca os contatos e mapeia para itens normalizados
    ///
    /// Em 401 com refresh_token disponível, renova o access token e repete
    /// o GET uma única vez. Um refresh bem-sucedido devolve as credenciais
    /// atualizadas para o caller persistir; esta função não re-persiste.
    ///
    /// # Retorno
    /// - `(items, Some(credentials))`: sucesso após refresh
    /// - `(items, None)`: sucesso sem refresh
    /// - `(vec![], None)`: falha final (logada, não propagada)
    pub async fn fetch_items(
        &self,
        mut credentials: Credentials,
    ) -> (Vec<IntegrationItem>, Option<Credentials>) {
        let mut updated_credentials = None;

        let mut result = self.list_contacts(&credentials.access_token).await;

        // Access token expirado: uma tentativa de refresh, um retry
        if matches!(&result, Err(e) if e.is_unauthorized()) {
            if let Some(refresh_token) = credentials.refresh_token.clone() {
                let oauth_client = OAuth2Client::new(self.oauth.clone());

                match oauth_client.refresh_access_token(&refresh_token).await {
                    Some(new_access_token) => {
                        credentials.access_token = new_access_token.clone();
                        updated_credentials = Some(credentials.clone());
                        result = self.list_contacts(&new_access_token).await;
                    }
                    None => {
                        log_warning("⚠️ [HubSpot] Refresh do access token falhou; mantendo resposta original");
                    }
                }
            }
        }

        match result {
            Ok(page) => {
                let items: Vec<IntegrationItem> = page
                    .results
                    .iter()
                    .map(IntegrationItem::from_contact)
                    .collect();

                log_items_loaded(items.len());

                (items, updated_credentials)
            }
            Err(e) => {
                log_hubspot_api_error("/crm/v3/objects/contacts", e.status(), &e.to_string());
                (Vec::new(), None)
            }
        }
    }

    async fn list_contacts(&self, access_token: &str) -> hubspot::Result<hubspot::ContactsPage> {
        let client = HubSpotClient::with_base_url(access_token, &self.api_base_url)?;
        client.list_contacts(DEFAULT_CONTACT_PROPERTIES).await
    }
}
