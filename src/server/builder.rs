//! ServerBuilder for fluent API to build the HTTP server

use super::router::build_receipt_routes;
use crate::config::{ServiceConfig, ValidationConfig};
use crate::core::ReceiptStore;
use crate::receipts::handlers::AppState;
use crate::storage::InMemoryReceiptStore;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the receipt HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryReceiptStore::new())
///     .with_config(ServiceConfig::load()?)
///     .build();
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn ReceiptStore>>,
    config: ServiceConfig,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            store: None,
            config: ServiceConfig::default(),
        }
    }

    /// Set the receipt store
    ///
    /// Defaults to a fresh [`InMemoryReceiptStore`] when not called.
    pub fn with_store(mut self, store: impl ReceiptStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Share an existing store handle
    pub fn with_shared_store(mut self, store: Arc<dyn ReceiptStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole service configuration
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace only the validation settings
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.config.validation = validation;
        self
    }

    fn state(&mut self) -> AppState {
        let store = self
            .store
            .take()
            .unwrap_or_else(|| Arc::new(InMemoryReceiptStore::new()));

        AppState {
            store,
            validation: self.config.validation,
        }
    }

    /// Build the router
    pub fn build(mut self) -> Router {
        let state = self.state();
        build_receipt_routes(state)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `server.bind_address` and serves until Ctrl+C or SIGTERM.
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self.config.bind_address()?;
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
