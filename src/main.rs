/// Main Application: middleware de integração HubSpot CRM
///
/// Arquitetura:
/// - Frontend (localhost:3000) inicia o fluxo via POST /authorize e abre a
///   URL de autorização em popup
/// - HubSpot redireciona o usuário para GET /oauth2callback
/// - State e credenciais vivem no store efêmero (TTL 600s, consumo único)
/// - POST /load sincroniza contatos com refresh transparente do token
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hubspot_integration_middleware::config::Settings;
use hubspot_integration_middleware::{auth, services, utils, AppState};

mod handlers;

use auth::{authorize, oauth_callback, OAuth2Config};
use handlers::{get_credentials, health_check, load_items, status_check};
use utils::{logging::*, AppError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Carregar variáveis de ambiente do arquivo .env (se existir)
    if dotenvy::dotenv().is_err() {
        // Em produção não existe .env - variáveis vêm do ambiente
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Inicializar tracing
    tracing_subscriber::fmt::init();

    // Carregar configurações
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    // Credenciais do app HubSpot: obrigatórias na inicialização
    let oauth = OAuth2Config::from_env().map_err(AppError::ConfigError)?;

    log_info("✅ OAuth2 config carregada (HubSpot app credentials)");

    // Store efêmero de state/credenciais (TTL por chave, consumo único)
    let store: Arc<dyn services::StateStore> = Arc::new(services::InMemoryStateStore::new());

    // Serviço de sincronização de contatos
    let items = services::HubSpotItemsService::new(oauth.clone(), settings.hubspot.base_url.clone());

    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        oauth,
        store,
        items,
    });

    // CORS: o frontend roda em outra origem e envia forms
    let frontend_origin = settings
        .frontend
        .origin
        .parse::<axum::http::HeaderValue>()
        .map_err(|e| AppError::ConfigError(format!("Invalid frontend origin: {}", e)))?;

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health checks
        .route("/health", get(health_check))
        .route("/status", get(status_check))
        // Fluxo OAuth2 + sincronização HubSpot
        .route("/integrations/hubspot/authorize", post(authorize))
        .route("/integrations/hubspot/oauth2callback", get(oauth_callback))
        .route("/integrations/hubspot/credentials", post(get_credentials))
        .route("/integrations/hubspot/load", post(load_items))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // No Cloud Run, usar a variável de ambiente PORT
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(settings.server.port);
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port)).await?;

    log_server_startup(port);
    log_server_ready(port);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
