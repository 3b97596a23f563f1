pub mod dto;
pub mod payment_service;

pub use dto::{ErrorResponse, ProcessPaymentRequest, UpdatePaymentRequest};
pub use payment_service::PaymentService;
