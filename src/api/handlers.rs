use crate::application::{ErrorResponse, PaymentService, ProcessPaymentRequest, UpdatePaymentRequest};
use crate::domain::errors::DomainError;
use crate::domain::PaymentStatus;
use crate::ports::{PaymentGatewayPort, PaymentStorePort};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

/// Application state shared across handlers
pub struct AppState<G: PaymentGatewayPort, S: PaymentStorePort> {
    pub payment_service: std::sync::Arc<PaymentService<G, S>>,
}

impl<G: PaymentGatewayPort, S: PaymentStorePort> Clone for AppState<G, S> {
    fn clone(&self) -> Self {
        Self {
            payment_service: self.payment_service.clone(),
        }
    }
}

/// Translates a domain error into the transport mapping: NotFound becomes
/// 404, anything else is a server fault.
fn error_response(code: &str, e: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    error!("{}: {}", code, e);
    let status = match e {
        DomainError::PaymentNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse::new(code.to_string(), e.to_string())),
    )
}

/// Process a payment. A failed gateway decision is still a stored record;
/// it maps to 400 with the FAILED record as the body.
pub async fn process_payment<G: PaymentGatewayPort, S: PaymentStorePort>(
    State(state): State<AppState<G, S>>,
    Json(request): Json<ProcessPaymentRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    info!("Received payment request for order: {}", request.order_id);

    let record = state
        .payment_service
        .process(request)
        .await
        .map_err(|e| error_response("PAYMENT_ERROR", e))?;

    let status = if record.status == PaymentStatus::Completed {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(record)))
}

/// Look a payment up by order id
pub async fn get_payment_by_order_id<G: PaymentGatewayPort, S: PaymentStorePort>(
    State(state): State<AppState<G, S>>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    state
        .payment_service
        .get_by_order_id(&order_id)
        .await
        .map(Json)
        .map_err(|e| error_response("QUERY_ERROR", e))
}

/// Look a payment up by transaction id
pub async fn get_payment_by_transaction_id<G: PaymentGatewayPort, S: PaymentStorePort>(
    State(state): State<AppState<G, S>>,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    state
        .payment_service
        .get_by_transaction_id(&transaction_id)
        .await
        .map(Json)
        .map_err(|e| error_response("QUERY_ERROR", e))
}

/// List every stored payment
pub async fn get_all_payments<G: PaymentGatewayPort, S: PaymentStorePort>(
    State(state): State<AppState<G, S>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    state
        .payment_service
        .get_all()
        .await
        .map(Json)
        .map_err(|e| error_response("QUERY_ERROR", e))
}

/// Full-replace update of the payment at `id`
pub async fn update_payment<G: PaymentGatewayPort, S: PaymentStorePort>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    state
        .payment_service
        .update(id, request)
        .await
        .map(Json)
        .map_err(|e| error_response("UPDATE_ERROR", e))
}

/// Delete the payment at `id`
pub async fn delete_payment<G: PaymentGatewayPort, S: PaymentStorePort>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    state
        .payment_service
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| error_response("DELETE_ERROR", e))
}

/// Health check
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
