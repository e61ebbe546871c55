pub mod hubspot_items;
pub mod state_store;

pub use hubspot_items::HubSpotItemsService;
pub use state_store::{InMemoryStateStore, StateStore};
