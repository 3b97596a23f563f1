use super::handlers::*;
use crate::ports::{PaymentGatewayPort, PaymentStorePort};
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_router<G, S>(state: AppState<G, S>) -> Router
where
    G: PaymentGatewayPort + 'static,
    S: PaymentStorePort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/payments/process", post(process_payment))
        .route(
            "/api/v1/payments/status/order/:order_id",
            get(get_payment_by_order_id),
        )
        .route(
            "/api/v1/payments/status/transaction/:transaction_id",
            get(get_payment_by_transaction_id),
        )
        .route("/api/v1/payments", get(get_all_payments))
        .route(
            "/api/v1/payments/:id",
            put(update_payment).delete(delete_payment),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
