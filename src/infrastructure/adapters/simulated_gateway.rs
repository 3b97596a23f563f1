use crate::domain::errors::DomainResult;
use crate::ports::payment_gateway_port::PaymentGatewayPort;
use async_trait::async_trait;
use tracing::debug;

/// Simulated payment gateway.
///
/// Stands in for a real authorization call: the decision is successful
/// unless the method details contain the substring `"fail"`
/// (case-sensitive). Absent details authorize.
#[derive(Debug, Default, Clone)]
pub struct SimulatedGateway;

impl SimulatedGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentGatewayPort for SimulatedGateway {
    async fn authorize(&self, method_details: Option<&str>) -> DomainResult<bool> {
        let authorized = match method_details {
            Some(details) => !details.contains("fail"),
            None => true,
        };
        debug!("Gateway decision: authorized={}", authorized);
        Ok(authorized)
    }
}
