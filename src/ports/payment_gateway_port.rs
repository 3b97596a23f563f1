use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Payment authorization port.
///
/// The single extension point a real gateway integration would replace.
/// The outcome is success or failure only, no partial states.
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// Submits the caller-supplied method details for authorization and
    /// returns whether the payment was authorized.
    async fn authorize(&self, method_details: Option<&str>) -> DomainResult<bool>;
}
