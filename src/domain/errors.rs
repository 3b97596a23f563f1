use thiserror::Error;

/// Domain error type.
///
/// `PaymentNotFound` is the only recoverable kind; everything else is an
/// infrastructure fault that bubbles up to the boundary as a server error.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No payment record for the given key
    #[error("Payment not found for {0}")]
    PaymentNotFound(String),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Internal error (e.g. an undecodable stored row)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
