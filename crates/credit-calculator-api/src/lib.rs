pub mod app;
pub mod error;
pub mod routes;

pub use app::{create_router, ServerConfig};
