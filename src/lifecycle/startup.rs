//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the chosen role from validated configuration
//! - Bind its listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Downstream clients are built before the listener binds, so a role never
//!   accepts traffic it cannot forward

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::RelayChainConfig;
use crate::http::IngressServer;
use crate::lifecycle::Shutdown;
use crate::net::ServeError;
use crate::upstream::UpstreamError;
use crate::{relay, validator};

/// Which service this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Ingress,
    Relay,
    Validator,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Ingress => "ingress",
            Role::Relay => "relay",
            Role::Validator => "validator",
        }
    }
}

/// Error type for role startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Serve(#[from] ServeError),

    #[error("failed to build relay client: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Http(#[source] std::io::Error),
}

/// Run `role` until `shutdown` fires.
pub async fn run(
    role: Role,
    config: RelayChainConfig,
    shutdown: &Shutdown,
) -> Result<(), StartupError> {
    tracing::info!(role = role.name(), "Starting");

    match role {
        Role::Ingress => {
            let address = config.ingress.bind_address.clone();
            let server = IngressServer::new(config.ingress)?;
            let listener = TcpListener::bind(&address)
                .await
                .map_err(|source| StartupError::Bind { address, source })?;
            server
                .run(listener, shutdown.subscribe())
                .await
                .map_err(StartupError::Http)?;
        }
        Role::Relay => {
            let server = relay::spawn(&config.relay).await?;
            server.run(shutdown.subscribe()).await;
        }
        Role::Validator => {
            let server = validator::spawn(&config.validator).await?;
            server.run(shutdown.subscribe()).await;
        }
    }

    tracing::info!(role = role.name(), "Shutdown complete");
    Ok(())
}
