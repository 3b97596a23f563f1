use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal status of a payment record.
///
/// `Pending` is reserved for future asynchronous flows; the current
/// processing path only ever produces `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Failed,
    Pending,
}

impl PaymentStatus {
    /// Parses the stored string form. Returns `None` for unknown values so
    /// the storage adapter can surface a decode error instead of panicking.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "COMPLETED" => Some(PaymentStatus::Completed),
            "FAILED" => Some(PaymentStatus::Failed),
            "PENDING" => Some(PaymentStatus::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Completed => write!(f, "COMPLETED"),
            PaymentStatus::Failed => write!(f, "FAILED"),
            PaymentStatus::Pending => write!(f, "PENDING"),
        }
    }
}
