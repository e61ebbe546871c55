pub mod settings;

pub use settings::{FrontendSettings, HubSpotSettings, ServerSettings, Settings};
