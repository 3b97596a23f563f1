pub mod in_memory_payment_store;
pub mod mysql_payment_store;
pub mod simulated_gateway;

pub use in_memory_payment_store::InMemoryPaymentStore;
pub use mysql_payment_store::MySqlPaymentStore;
pub use simulated_gateway::SimulatedGateway;
