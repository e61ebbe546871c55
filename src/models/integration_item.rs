//! Representação normalizada de um registro de integração
//!
//! Contrato comum entre providers: o frontend consome sempre o mesmo shape,
//! independente da origem do registro.

use hubspot::Contact;
use serde::{Deserialize, Serialize};

/// Item normalizado retornado pela sincronização
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationItem {
    /// Identificador do registro no provider
    pub id: String,

    /// Tipo do registro (sempre "Contact" neste middleware)
    #[serde(rename = "type")]
    pub item_type: String,

    /// Nome de exibição derivado das properties
    pub name: String,

    /// Timestamps opacos do provider (não parseados nesta camada)
    pub creation_time: Option<String>,
    pub last_modified_time: Option<String>,
}

impl IntegrationItem {
    /// Mapeia um contato bruto do HubSpot para o item normalizado
    ///
    /// Regra do nome: `firstname lastname` com trim; se ambos vazios, cai
    /// para o email; sem email, o literal "Unknown Contact".
    pub fn from_contact(contact: &Contact) -> Self {
        let props = &contact.properties;

        let firstname = props.firstname.as_deref().unwrap_or("");
        let lastname = props.lastname.as_deref().unwrap_or("");

        let mut name = format!("{} {}", firstname, lastname).trim().to_string();
        if name.is_empty() {
            name = props
                .email
                .clone()
                .unwrap_or_else(|| "Unknown Contact".to_string());
        }

        Self {
            id: contact.id.clone(),
            item_type: "Contact".to_string(),
            name,
            creation_time: props.createdate.clone(),
            last_modified_time: props.lastmodifieddate.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubspot::ContactProperties;

    fn contact(properties: ContactProperties) -> Contact {
        Contact {
            id: "123".to_string(),
            properties,
        }
    }

    #[test]
    fn test_name_from_first_and_last() {
        let item = IntegrationItem::from_contact(&contact(ContactProperties {
            firstname: Some("Jane".to_string()),
            lastname: Some("Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        }));

        assert_eq!(item.name, "Jane Doe");
        assert_eq!(item.item_type, "Contact");
    }

    #[test]
    fn test_name_falls_back_to_email() {
        let item = IntegrationItem::from_contact(&contact(ContactProperties {
            email: Some("x@y.com".to_string()),
            ..Default::default()
        }));

        assert_eq!(item.name, "x@y.com");
    }

    #[test]
    fn test_name_falls_back_to_unknown_contact() {
        let item = IntegrationItem::from_contact(&contact(ContactProperties::default()));

        assert_eq!(item.name, "Unknown Contact");
    }

    #[test]
    fn test_name_trims_when_only_one_part() {
        let item = IntegrationItem::from_contact(&contact(ContactProperties {
            firstname: Some("Jane".to_string()),
            ..Default::default()
        }));

        assert_eq!(item.name, "Jane");
    }

    #[test]
    fn test_timestamps_pass_through_unchanged() {
        let item = IntegrationItem::from_contact(&contact(ContactProperties {
            createdate: Some("2024-03-01T10:00:00Z".to_string()),
            lastmodifieddate: Some("not-even-a-date".to_string()),
            ..Default::default()
        }));

        assert_eq!(item.creation_time.as_deref(), Some("2024-03-01T10:00:00Z"));
        assert_eq!(item.last_modified_time.as_deref(), Some("not-even-a-date"));
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let item = IntegrationItem::from_contact(&contact(ContactProperties::default()));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("Contact"));
        assert!(json.get("item_type").is_none());
    }
}
