//! # bibliograph-server
//!
//! HTTP server for the Bibliograph catalog: configuration loading,
//! tracing bootstrap, service construction and the axum router around
//! the GraphQL endpoint.

pub mod config;
pub mod observability;
pub mod server;

pub use config::AppConfig;
pub use server::{build_context, build_router, run};
