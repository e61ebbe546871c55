// Biblioteca do middleware de integração HubSpot
// Expõe módulos para uso em testes e binários

pub mod auth;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub oauth: auth::OAuth2Config,
    pub store: Arc<dyn services::StateStore>,
    pub items: services::HubSpotItemsService,
}
