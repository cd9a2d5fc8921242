//! catalog-mock - local stand-in for the hosted document store
//!
//! Serves the catalog wire protocol over HTTP, backed by the in-memory
//! store. Used for local development and end-to-end client tests.

pub mod api;
pub mod config;
pub mod logger;
pub mod state;

pub use api::router;
pub use config::MockConfig;
pub use state::MockState;

use tokio::net::TcpListener;

/// Serve the mock store on an already bound listener
pub async fn serve(listener: TcpListener, state: MockState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
