pub mod credentials;
pub mod integration_item;

pub use credentials::{credentials_key, Credentials};
pub use integration_item::IntegrationItem;
