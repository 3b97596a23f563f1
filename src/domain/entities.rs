use crate::domain::value_objects::PaymentStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder payment method recorded on every processed payment until a
/// real gateway integration supplies the actual instrument.
pub const PROCESSED_METHOD: &str = "PROCESSED_METHOD";

/// A stored payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Internal id, assigned by the store on creation
    pub id: i64,

    /// Caller-supplied order id (uniqueness not enforced)
    pub order_id: String,

    /// Payment amount
    pub amount: Decimal,

    /// Payment method descriptor
    pub payment_method: String,

    /// Payment status
    pub status: PaymentStatus,

    /// Gateway transaction token, present only for completed payments
    /// created through the processing path
    pub transaction_id: Option<String>,

    /// Processing instant, set once at creation
    pub transaction_date: DateTime<Utc>,
}

/// A payment record before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentRecord {
    pub order_id: String,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub transaction_date: DateTime<Utc>,
}

impl NewPaymentRecord {
    /// Creates a record for the given order, stamped with the current
    /// instant and the placeholder method. Starts out `Pending`; the
    /// processor moves it to a terminal status before it is persisted.
    pub fn new(order_id: String, amount: Decimal) -> Self {
        Self {
            order_id,
            amount,
            payment_method: PROCESSED_METHOD.to_string(),
            status: PaymentStatus::Pending,
            transaction_id: None,
            transaction_date: Utc::now(),
        }
    }

    /// Marks the payment as completed with a gateway transaction token.
    pub fn complete(&mut self, transaction_id: String) {
        self.status = PaymentStatus::Completed;
        self.transaction_id = Some(transaction_id);
    }

    /// Marks the payment as failed. The transaction id stays unset.
    pub fn fail(&mut self) {
        self.status = PaymentStatus::Failed;
    }

    /// Attaches the store-assigned id, producing the persisted form.
    pub fn into_record(self, id: i64) -> PaymentRecord {
        PaymentRecord {
            id,
            order_id: self.order_id,
            amount: self.amount,
            payment_method: self.payment_method,
            status: self.status,
            transaction_id: self.transaction_id,
            transaction_date: self.transaction_date,
        }
    }
}
