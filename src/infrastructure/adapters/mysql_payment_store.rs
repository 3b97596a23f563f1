use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::PaymentStatus;
use crate::domain::{NewPaymentRecord, PaymentRecord};
use crate::ports::payment_store_port::PaymentStorePort;
use async_trait::async_trait;
use sqlx::{MySql, Pool};
use std::sync::Arc;
use tracing::debug;

/// MySQL payment store backed by an auto-increment primary key.
///
/// Secondary lookups order by id so that the first record in insertion
/// order wins when duplicates exist.
#[derive(Clone)]
pub struct MySqlPaymentStore {
    pool: Arc<Pool<MySql>>,
}

impl MySqlPaymentStore {
    pub fn new(pool: Arc<Pool<MySql>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStorePort for MySqlPaymentStore {
    async fn create(&self, record: NewPaymentRecord) -> DomainResult<PaymentRecord> {
        let query = r#"
            INSERT INTO payments (
                order_id, amount, payment_method,
                payment_status, transaction_id, transaction_date
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&record.order_id)
            .bind(record.amount)
            .bind(&record.payment_method)
            .bind(record.status.to_string())
            .bind(&record.transaction_id)
            .bind(record.transaction_date)
            .execute(self.pool.as_ref())
            .await?;

        let id = result.last_insert_id() as i64;
        debug!("Payment record created: id={}", id);

        Ok(record.into_record(id))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PaymentRecord>> {
        let query = r#"
            SELECT id, order_id, amount, payment_method,
                   payment_status, transaction_id, transaction_date
            FROM payments
            WHERE id = ?
        "#;

        let row = sqlx::query_as::<_, PaymentRow>(query)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(PaymentRow::into_record).transpose()
    }

    async fn find_by_order_id(&self, order_id: &str) -> DomainResult<Option<PaymentRecord>> {
        let query = r#"
            SELECT id, order_id, amount, payment_method,
                   payment_status, transaction_id, transaction_date
            FROM payments
            WHERE order_id = ?
            ORDER BY id
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, PaymentRow>(query)
            .bind(order_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(PaymentRow::into_record).transpose()
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> DomainResult<Option<PaymentRecord>> {
        let query = r#"
            SELECT id, order_id, amount, payment_method,
                   payment_status, transaction_id, transaction_date
            FROM payments
            WHERE transaction_id = ?
            ORDER BY id
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, PaymentRow>(query)
            .bind(transaction_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(PaymentRow::into_record).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<PaymentRecord>> {
        let query = r#"
            SELECT id, order_id, amount, payment_method,
                   payment_status, transaction_id, transaction_date
            FROM payments
            ORDER BY id
        "#;

        let rows = sqlx::query_as::<_, PaymentRow>(query)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(PaymentRow::into_record).collect()
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn update(&self, record: &PaymentRecord) -> DomainResult<()> {
        let query = r#"
            UPDATE payments
            SET order_id = ?, amount = ?, payment_method = ?,
                payment_status = ?, transaction_id = ?, transaction_date = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&record.order_id)
            .bind(record.amount)
            .bind(&record.payment_method)
            .bind(record.status.to_string())
            .bind(&record.transaction_id)
            .bind(record.transaction_date)
            .bind(record.id)
            .execute(self.pool.as_ref())
            .await?;

        debug!("Payment record updated: id={}", record.id);
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        let rows_affected = sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?
            .rows_affected();

        debug!("Payment delete: id={} rows_affected={}", id, rows_affected);
        Ok(())
    }
}

/// Database row shape
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: i64,
    order_id: String,
    amount: rust_decimal::Decimal,
    payment_method: String,
    payment_status: String,
    transaction_id: Option<String>,
    transaction_date: chrono::DateTime<chrono::Utc>,
}

impl PaymentRow {
    fn into_record(self) -> DomainResult<PaymentRecord> {
        let status = PaymentStatus::parse(&self.payment_status).ok_or_else(|| {
            DomainError::InternalError(format!("Invalid payment status: {}", self.payment_status))
        })?;

        Ok(PaymentRecord {
            id: self.id,
            order_id: self.order_id,
            amount: self.amount,
            payment_method: self.payment_method,
            status,
            transaction_id: self.transaction_id,
            transaction_date: self.transaction_date,
        })
    }
}
