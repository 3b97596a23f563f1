use crate::domain::value_objects::PaymentStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Process-payment request
#[derive(Debug, Deserialize)]
pub struct ProcessPaymentRequest {
    /// Caller-supplied order id
    pub order_id: String,

    /// Payment amount
    pub amount: Decimal,

    /// Opaque method details handed to the gateway decision
    pub payment_method_details: Option<String>,
}

/// Full-replace update payload.
///
/// Carries every stored field except the id, which always comes from the
/// request path. The caller may supply any status/transaction-id
/// combination; no creation-time invariant is re-checked here.
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentRequest {
    pub order_id: String,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub transaction_date: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self { error, message }
    }
}
