// Handlers HTTP do binário
pub mod health;
pub mod integration;

pub use health::*;
pub use integration::*;

// OAuth2 handlers (authorize, oauth2callback) estão em src/auth/handlers.rs
