//! RPC listener shared by the relay and validator roles.
//!
//! # Responsibilities
//! - Bind the configured address
//! - Serve a `MessageService` module until told to stop
//! - Report the bound address (port 0 binds in tests)

use std::net::SocketAddr;

use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use thiserror::Error;
use tokio::sync::broadcast;

/// Error type for RPC listener startup.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Bind address did not parse.
    #[error("invalid bind address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind or inspect the socket.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// A dependency of the served module could not be built.
    #[error("failed to build upstream client: {0}")]
    Upstream(#[from] crate::upstream::UpstreamError),
}

/// A running RPC server.
#[derive(Debug)]
pub struct RpcServer {
    handle: ServerHandle,
    local_addr: SocketAddr,
    role: &'static str,
}

impl RpcServer {
    /// Bind `bind_address` and start serving `module` in the background.
    pub async fn start<T: Send + Sync + 'static>(
        bind_address: &str,
        module: RpcModule<T>,
        role: &'static str,
    ) -> Result<Self, ServeError> {
        let addr: SocketAddr = bind_address.parse().map_err(|source| ServeError::Address {
            address: bind_address.to_string(),
            source,
        })?;

        let bind_err = |source| ServeError::Bind {
            address: bind_address.to_string(),
            source,
        };
        let server = Server::builder().build(addr).await.map_err(bind_err)?;
        let local_addr = server.local_addr().map_err(bind_err)?;

        let handle = server.start(module);

        tracing::info!(
            role,
            address = %local_addr,
            "RPC server is running"
        );

        Ok(Self {
            handle,
            local_addr,
            role,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL other hops use to reach this server.
    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting calls. Safe to call more than once.
    pub fn stop(&self) {
        if self.handle.stop().is_ok() {
            tracing::info!(role = self.role, "RPC server stopping");
        }
    }

    /// Serve until the shutdown signal fires, then drain and return.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let stopped = self.handle.clone().stopped();
        tokio::select! {
            _ = shutdown.recv() => {
                self.stop();
                self.handle.clone().stopped().await;
            }
            _ = stopped => {}
        }
        tracing::info!(role = self.role, "RPC server stopped");
    }
}
