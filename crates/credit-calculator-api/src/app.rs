//! Axum application builder and server configuration.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::routes;

/// Create the Axum application with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/calculator", get(routes::get_payment_schedule))
        .layer(TraceLayer::new_for_http())
}

/// Server configuration.
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let host = std::env::var("CALCULATOR_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = std::env::var("CALCULATOR_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log filter from `RUST_LOG`, falling back to `info` when it is unset.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
