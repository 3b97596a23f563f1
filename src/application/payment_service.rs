use crate::application::dto::{ProcessPaymentRequest, UpdatePaymentRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{NewPaymentRecord, PaymentRecord};
use crate::ports::{PaymentGatewayPort, PaymentStorePort};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Payment processing service.
///
/// Drives the single state transition of a payment record: construct,
/// submit to the gateway decision, land in a terminal status, persist.
/// A declined gateway decision is recorded as a `FAILED` payment, never
/// raised as an error.
pub struct PaymentService<G: PaymentGatewayPort, S: PaymentStorePort> {
    gateway: Arc<G>,
    store: Arc<S>,
}

impl<G: PaymentGatewayPort, S: PaymentStorePort> PaymentService<G, S> {
    pub fn new(gateway: Arc<G>, store: Arc<S>) -> Self {
        Self { gateway, store }
    }

    /// Processes a payment request and returns the stored record in its
    /// terminal status.
    pub async fn process(&self, request: ProcessPaymentRequest) -> DomainResult<PaymentRecord> {
        info!("Processing payment for order: {}", request.order_id);

        let mut record = NewPaymentRecord::new(request.order_id, request.amount);

        let authorized = self
            .gateway
            .authorize(request.payment_method_details.as_deref())
            .await?;

        if authorized {
            record.complete(Uuid::new_v4().to_string());
        } else {
            record.fail();
        }

        let stored = self.store.create(record).await?;
        info!(
            "Payment recorded: id={} order={} status={}",
            stored.id, stored.order_id, stored.status
        );

        Ok(stored)
    }

    /// Looks a payment up by order id.
    pub async fn get_by_order_id(&self, order_id: &str) -> DomainResult<PaymentRecord> {
        self.store
            .find_by_order_id(order_id)
            .await?
            .ok_or_else(|| DomainError::PaymentNotFound(format!("order ID: {order_id}")))
    }

    /// Looks a payment up by transaction id.
    pub async fn get_by_transaction_id(&self, transaction_id: &str) -> DomainResult<PaymentRecord> {
        self.store
            .find_by_transaction_id(transaction_id)
            .await?
            .ok_or_else(|| {
                DomainError::PaymentNotFound(format!("transaction ID: {transaction_id}"))
            })
    }

    /// Returns every stored payment, no filtering or pagination.
    pub async fn get_all(&self) -> DomainResult<Vec<PaymentRecord>> {
        self.store.list_all().await
    }

    /// Replaces every field of the record at `id` with the payload's
    /// fields. The id itself always comes from the lookup key.
    pub async fn update(
        &self,
        id: i64,
        request: UpdatePaymentRequest,
    ) -> DomainResult<PaymentRecord> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::PaymentNotFound(format!("ID: {id}")))?;

        let record = PaymentRecord {
            id: existing.id,
            order_id: request.order_id,
            amount: request.amount,
            payment_method: request.payment_method,
            status: request.status,
            transaction_id: request.transaction_id,
            transaction_date: request.transaction_date,
        };

        self.store.update(&record).await?;
        debug!("Payment updated: id={}", record.id);

        Ok(record)
    }

    /// Deletes the record at `id`.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(DomainError::PaymentNotFound(format!("ID: {id}")));
        }

        self.store.delete_by_id(id).await?;
        debug!("Payment deleted: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentStatus;
    use crate::infrastructure::{InMemoryPaymentStore, SimulatedGateway};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn service() -> PaymentService<SimulatedGateway, InMemoryPaymentStore> {
        PaymentService::new(
            Arc::new(SimulatedGateway::new()),
            Arc::new(InMemoryPaymentStore::new()),
        )
    }

    fn request(order_id: &str, details: Option<&str>) -> ProcessPaymentRequest {
        ProcessPaymentRequest {
            order_id: order_id.to_string(),
            amount: dec!(150.00),
            payment_method_details: details.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_process_success_scenario() {
        let service = service();

        let record = service
            .process(request("ORD-123", Some("card-details")))
            .await
            .unwrap();

        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.order_id, "ORD-123");
        assert_eq!(record.amount, dec!(150.00));
        let tx_id = record.transaction_id.clone().unwrap();
        assert!(!tx_id.is_empty());

        let by_order = service.get_by_order_id("ORD-123").await.unwrap();
        assert_eq!(by_order, record);

        let by_tx = service.get_by_transaction_id(&tx_id).await.unwrap();
        assert_eq!(by_tx, record);
    }

    #[tokio::test]
    async fn test_process_without_details_succeeds() {
        let service = service();

        let record = service.process(request("ORD-1", None)).await.unwrap();

        assert_eq!(record.status, PaymentStatus::Completed);
        assert!(record.transaction_id.is_some());
    }

    #[tokio::test]
    async fn test_process_failure_scenario() {
        let service = service();

        let record = service
            .process(request("ORD-2", Some("force-fail-case")))
            .await
            .unwrap();

        assert_eq!(record.status, PaymentStatus::Failed);
        assert!(record.transaction_id.is_none());
    }

    #[tokio::test]
    async fn test_transaction_ids_unique_across_calls() {
        let service = service();

        let first = service.process(request("ORD-1", None)).await.unwrap();
        let second = service.process(request("ORD-2", None)).await.unwrap();

        assert_ne!(first.transaction_id, second.transaction_id);
    }

    #[tokio::test]
    async fn test_lookup_nonexistent_keys() {
        let service = service();

        let by_order = service.get_by_order_id("NO-SUCH-ORDER").await;
        assert!(matches!(by_order, Err(DomainError::PaymentNotFound(_))));

        let by_tx = service.get_by_transaction_id("NO-SUCH-TX").await;
        assert!(matches!(by_tx, Err(DomainError::PaymentNotFound(_))));
    }

    #[tokio::test]
    async fn test_get_all_returns_every_record() {
        let service = service();

        service.process(request("ORD-1", None)).await.unwrap();
        service
            .process(request("ORD-2", Some("fail")))
            .await
            .unwrap();

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].order_id, "ORD-1");
        assert_eq!(all[1].order_id, "ORD-2");
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_but_preserves_id() {
        let service = service();

        let created = service.process(request("ORD-1", None)).await.unwrap();

        let payload = UpdatePaymentRequest {
            order_id: "ORD-1-FIXED".to_string(),
            amount: dec!(99.99),
            payment_method: "MANUAL_CORRECTION".to_string(),
            status: PaymentStatus::Failed,
            transaction_id: None,
            transaction_date: Utc::now(),
        };
        let expected_date = payload.transaction_date;

        let updated = service.update(created.id, payload).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.order_id, "ORD-1-FIXED");
        assert_eq!(updated.amount, dec!(99.99));
        assert_eq!(updated.payment_method, "MANUAL_CORRECTION");
        assert_eq!(updated.status, PaymentStatus::Failed);
        assert!(updated.transaction_id.is_none());
        assert_eq!(updated.transaction_date, expected_date);

        let fetched = service.get_by_order_id("ORD-1-FIXED").await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_nonexistent_id() {
        let service = service();

        let payload = UpdatePaymentRequest {
            order_id: "ORD-99".to_string(),
            amount: dec!(1.00),
            payment_method: "X".to_string(),
            status: PaymentStatus::Pending,
            transaction_id: None,
            transaction_date: Utc::now(),
        };

        let result = service.update(99, payload).await;
        assert!(matches!(result, Err(DomainError::PaymentNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let service = service();

        let created = service.process(request("ORD-1", None)).await.unwrap();

        service.delete(created.id).await.unwrap();

        let lookup = service.get_by_order_id("ORD-1").await;
        assert!(matches!(lookup, Err(DomainError::PaymentNotFound(_))));

        let second = service.delete(created.id).await;
        assert!(matches!(second, Err(DomainError::PaymentNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_id() {
        let service = service();

        let result = service.delete(99).await;
        assert!(matches!(result, Err(DomainError::PaymentNotFound(_))));
    }
}
