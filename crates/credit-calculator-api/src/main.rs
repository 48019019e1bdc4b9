use credit_calculator_api::app::{create_router, log_filter, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    let config = ServerConfig::from_env();
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "credit calculator API listening");

    axum::serve(listener, create_router()).await?;

    Ok(())
}
