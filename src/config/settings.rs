use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub hubspot: HubSpotSettings,
    pub frontend: FrontendSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HubSpotSettings {
    /// Base URL da API de recursos (a URL do token endpoint fica na
    /// OAuth2Config, junto com as credenciais do app)
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FrontendSettings {
    /// Origem liberada no CORS (o frontend roda em outra porta)
    pub origin: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("hubspot.base_url", "https://api.hubapi.com")?
            .set_default("frontend.origin", "http://localhost:3000")?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Overrides pontuais por variável de ambiente
        if let Ok(origin) = std::env::var("FRONTEND_ORIGIN") {
            builder = builder.set_override("frontend.origin", origin)?;
        }

        builder = builder.add_source(Environment::with_prefix("HUBSPOT_MIDDLEWARE"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}
