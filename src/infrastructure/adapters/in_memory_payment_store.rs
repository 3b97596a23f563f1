use crate::domain::errors::DomainResult;
use crate::domain::{NewPaymentRecord, PaymentRecord};
use crate::ports::payment_store_port::PaymentStorePort;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory payment store.
///
/// Records live in a `BTreeMap` keyed by the assigned id; ids are handed
/// out in ascending order, so map iteration order is insertion order.
/// Intended for tests and local runs without a database.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    next_id: i64,
    records: BTreeMap<i64, PaymentRecord>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStorePort for InMemoryPaymentStore {
    async fn create(&self, record: NewPaymentRecord) -> DomainResult<PaymentRecord> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let stored = record.into_record(state.next_id);
        state.records.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PaymentRecord>> {
        let state = self.state.read().await;
        Ok(state.records.get(&id).cloned())
    }

    async fn find_by_order_id(&self, order_id: &str) -> DomainResult<Option<PaymentRecord>> {
        let state = self.state.read().await;
        Ok(state
            .records
            .values()
            .find(|r| r.order_id == order_id)
            .cloned())
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> DomainResult<Option<PaymentRecord>> {
        let state = self.state.read().await;
        Ok(state
            .records
            .values()
            .find(|r| r.transaction_id.as_deref() == Some(transaction_id))
            .cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<PaymentRecord>> {
        let state = self.state.read().await;
        Ok(state.records.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        let state = self.state.read().await;
        Ok(state.records.contains_key(&id))
    }

    async fn update(&self, record: &PaymentRecord) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state.records.insert(record.id, record.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state.records.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_record(order_id: &str) -> NewPaymentRecord {
        NewPaymentRecord::new(order_id.to_string(), dec!(10.00))
    }

    #[tokio::test]
    async fn test_create_assigns_ascending_ids() {
        let store = InMemoryPaymentStore::new();

        let first = store.create(new_record("ORD-1")).await.unwrap();
        let second = store.create(new_record("ORD-2")).await.unwrap();

        assert!(second.id > first.id);
        assert!(store.exists_by_id(first.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let store = InMemoryPaymentStore::new();

        for order in ["ORD-1", "ORD-2", "ORD-3"] {
            store.create(new_record(order)).await.unwrap();
        }

        let all = store.list_all().await.unwrap();
        let orders: Vec<&str> = all.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(orders, vec!["ORD-1", "ORD-2", "ORD-3"]);
    }

    #[tokio::test]
    async fn test_duplicate_order_ids_first_match_wins() {
        let store = InMemoryPaymentStore::new();

        let first = store.create(new_record("ORD-DUP")).await.unwrap();
        store.create(new_record("ORD-DUP")).await.unwrap();

        let found = store.find_by_order_id("ORD-DUP").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_find_by_transaction_id() {
        let store = InMemoryPaymentStore::new();

        let mut record = new_record("ORD-1");
        record.complete("TX-1".to_string());
        let stored = store.create(record).await.unwrap();

        let found = store.find_by_transaction_id("TX-1").await.unwrap();
        assert_eq!(found, Some(stored));
        assert!(store.find_by_transaction_id("TX-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let store = InMemoryPaymentStore::new();

        let stored = store.create(new_record("ORD-1")).await.unwrap();

        let mut replacement = stored.clone();
        replacement.order_id = "ORD-1-NEW".to_string();
        replacement.amount = dec!(33.00);
        store.update(&replacement).await.unwrap();

        let fetched = store.find_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched, replacement);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryPaymentStore::new();

        let stored = store.create(new_record("ORD-1")).await.unwrap();

        store.delete_by_id(stored.id).await.unwrap();
        assert!(store.find_by_id(stored.id).await.unwrap().is_none());

        // absent id is not an error at this layer
        store.delete_by_id(stored.id).await.unwrap();
    }
}
