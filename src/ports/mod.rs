pub mod payment_gateway_port;
pub mod payment_store_port;

pub use payment_gateway_port::PaymentGatewayPort;
pub use payment_store_port::PaymentStorePort;
