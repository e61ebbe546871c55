//! Cliente da API HubSpot CRM
//!
//! Este crate fornece uma interface tipo-segura para a API v3 do HubSpot,
//! cobrindo o que o middleware precisa:
//!
//! - Cliente HTTP autenticado via Bearer token (OAuth2 access token)
//! - Listagem de contatos (`/crm/v3/objects/contacts`) com seleção de
//!   properties
//! - Tratamento de erros da API (status não-2xx vira `ApiError` com a
//!   mensagem extraída do corpo JSON)
//!
//! O fluxo OAuth2 em si (authorization URL, troca de code, refresh) NÃO
//! mora aqui — fica no módulo `auth` do middleware. Este crate só consome
//! o access token resultante.
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use hubspot::HubSpotClient;
//!
//! #[tokio::main]
//! async fn main() -> hubspot::Result<()> {
//!     let access_token = std::env::var("HUBSPOT_ACCESS_TOKEN")
//!         .expect("HUBSPOT_ACCESS_TOKEN não configurado");
//!
//!     let client = HubSpotClient::new(access_token)?;
//!     let page = client.list_contacts(hubspot::contacts::DEFAULT_CONTACT_PROPERTIES).await?;
//!
//!     for contact in page.results {
//!         println!("{} -> {:?}", contact.id, contact.properties.email);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod client;
pub mod contacts;
pub mod error;
pub mod types;

// Re-exports principais
pub use client::HubSpotClient;
pub use error::{HubSpotError, Result};
pub use types::{Contact, ContactProperties, ContactsPage};
