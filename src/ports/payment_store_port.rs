use crate::domain::errors::DomainResult;
use crate::domain::{NewPaymentRecord, PaymentRecord};
use async_trait::async_trait;

/// Storage port for payment records.
///
/// Keyed by the store-assigned integer id, with two secondary lookup fields
/// (order id and transaction id) whose uniqueness is not enforced: when
/// duplicates exist the first record in insertion order wins.
#[async_trait]
pub trait PaymentStorePort: Send + Sync {
    /// Assigns a fresh id, stores the record and returns the stored form.
    async fn create(&self, record: NewPaymentRecord) -> DomainResult<PaymentRecord>;

    /// Looks a record up by internal id.
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PaymentRecord>>;

    /// Looks a record up by order id, first match in insertion order.
    async fn find_by_order_id(&self, order_id: &str) -> DomainResult<Option<PaymentRecord>>;

    /// Looks a record up by transaction id, first match in insertion order.
    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> DomainResult<Option<PaymentRecord>>;

    /// Returns every stored record in insertion order.
    async fn list_all(&self) -> DomainResult<Vec<PaymentRecord>>;

    /// Checks whether a record exists at the given id.
    async fn exists_by_id(&self, id: i64) -> DomainResult<bool>;

    /// Overwrites every field of the record stored at `record.id`.
    async fn update(&self, record: &PaymentRecord) -> DomainResult<()>;

    /// Removes the record at the given id. Idempotent: a missing id is not
    /// an error at this layer, the not-found policy lives in the service.
    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
}
