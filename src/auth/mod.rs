//! # HubSpot OAuth2 Authorization Module
//!
//! Módulo isolado para o fluxo authorization-code com o HubSpot.
//!
//! ## Responsabilidades:
//! - Iniciar o fluxo OAuth2 (authorization URL com state anti-CSRF)
//! - Validar o callback contra a cópia server-side do state
//! - Trocar authorization code por access/refresh tokens
//! - Renovar access tokens via refresh_token grant
//!
//! ## Estrutura:
//! - `config.rs`: credenciais do app e endpoints do provider
//! - `state.rs`: state anti-CSRF (geração e chaves do store)
//! - `client.rs`: cliente HTTP do token endpoint
//! - `handlers.rs`: handlers HTTP (authorize, oauth2callback)

pub mod client;
pub mod config;
pub mod handlers;
pub mod state;

pub use client::OAuth2Client;
pub use config::OAuth2Config;
pub use handlers::{authorize, oauth_callback, AuthorizeRequest, OAuthCallbackParams};
pub use state::{state_key, AuthorizationState, EPHEMERAL_TTL_SECONDS};
