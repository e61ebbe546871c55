//! Tipos da API de contatos do HubSpot (CRM v3)

use serde::{Deserialize, Serialize};

/// Um contato retornado por `GET /crm/v3/objects/contacts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Identificador do registro no HubSpot
    pub id: String,

    /// Properties solicitadas via query string
    #[serde(default)]
    pub properties: ContactProperties,
}

/// Properties de contato que o middleware solicita
///
/// Timestamps (`createdate`, `lastmodifieddate`) são strings opacas do
/// provider — não são parseadas nem validadas nesta camada.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactProperties {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub createdate: Option<String>,
    pub lastmodifieddate: Option<String>,
}

/// Uma página de resultados da listagem de contatos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsPage {
    #[serde(default)]
    pub results: Vec<Contact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_deserialization() {
        let json = r#"{
            "id": "51",
            "properties": {
                "firstname": "Jane",
                "lastname": "Doe",
                "email": "jane@example.com",
                "createdate": "2024-03-01T10:00:00Z",
                "lastmodifieddate": "2024-03-02T11:00:00Z"
            }
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, "51");
        assert_eq!(contact.properties.firstname.as_deref(), Some("Jane"));
        assert_eq!(contact.properties.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_contact_with_missing_properties() {
        // HubSpot omite properties vazias dependendo do registro
        let json = r#"{"id": "77", "properties": {}}"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, "77");
        assert!(contact.properties.firstname.is_none());
        assert!(contact.properties.email.is_none());
    }

    #[test]
    fn test_contacts_page_ignores_paging_metadata() {
        let json = r#"{
            "results": [{"id": "1", "properties": {}}],
            "paging": {"next": {"after": "2"}}
        }"#;

        let page: ContactsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
    }
}
