mod api;
mod application;
mod domain;
mod infrastructure;
mod ports;

use api::AppState;
use application::PaymentService;
use infrastructure::{AppConfig, MySqlPaymentStore, SimulatedGateway};
use sqlx::MySqlPool;
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    info!("Starting Payment Service...");

    let config = AppConfig::from_env();

    info!("Connecting to database...");
    let pool = MySqlPool::connect(&config.database_url).await?;
    info!("Database connected successfully");

    let gateway = Arc::new(SimulatedGateway::new());
    let store = Arc::new(MySqlPaymentStore::new(Arc::new(pool)));

    let payment_service = Arc::new(PaymentService::new(gateway, store));

    let app_state = AppState { payment_service };

    let app = api::create_router(app_state);

    let addr = config.bind_addr();
    info!("Server listening on {}", addr);
    info!("Available endpoints:");
    info!("  GET    /health - Health check");
    info!("  POST   /api/v1/payments/process - Process payment");
    info!("  GET    /api/v1/payments - List payments");
    info!("  GET    /api/v1/payments/status/order/:order_id - Query by order id");
    info!("  GET    /api/v1/payments/status/transaction/:transaction_id - Query by transaction id");
    info!("  PUT    /api/v1/payments/:id - Update payment");
    info!("  DELETE /api/v1/payments/:id - Delete payment");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
