pub mod adapters;
pub mod config;

pub use adapters::{InMemoryPaymentStore, MySqlPaymentStore, SimulatedGateway};
pub use config::AppConfig;
