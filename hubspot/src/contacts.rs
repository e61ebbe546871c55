//! Listagem de contatos (CRM v3)

use crate::client::HubSpotClient;
use crate::error::Result;
use crate::types::ContactsPage;

/// Properties que o middleware sempre solicita ao listar contatos
pub const DEFAULT_CONTACT_PROPERTIES: &[&str] = &[
    "firstname",
    "lastname",
    "email",
    "createdate",
    "lastmodifieddate",
];

impl HubSpotClient {
    /// Lista contatos com a seleção de properties informada
    ///
    /// # Argumentos
    ///
    /// * `properties` - Nomes das properties a incluir na resposta
    ///
    /// # Retorno
    /// - `Ok(ContactsPage)`: página de contatos
    /// - `Err(HubSpotError::ApiError)`: status não-2xx (401 indica token
    ///   expirado/inválido)
    pub async fn list_contacts(&self, properties: &[&str]) -> Result<ContactsPage> {
        let endpoint = format!("/crm/v3/objects/contacts?properties={}", properties.join(","));

        self.get_json(&endpoint).await
    }
}
