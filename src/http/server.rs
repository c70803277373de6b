//! HTTP server for the ingress role.
//!
//! # Responsibilities
//! - Create Axum Router with the `/send` and `/health` handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Translate the JSON body into a `PaymentNotice`
//! - Forward it to the relay and return its status as JSON

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Request},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::IngressConfig;
use crate::http::request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::response::IngressError;
use crate::protocol::{PaymentNotice, PaymentStatus};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared client for the relay; connections are pooled inside.
    pub relay: Arc<UpstreamClient>,
}

/// HTTP server for the ingress.
pub struct IngressServer {
    router: Router,
    config: IngressConfig,
}

impl IngressServer {
    /// Create the server and its relay client.
    pub fn new(config: IngressConfig) -> Result<Self, UpstreamError> {
        let relay = UpstreamClient::new(
            &config.relay_url,
            Duration::from_secs(config.upstream_timeout_secs),
        )?;

        tracing::info!(
            relay = %config.relay_url,
            timeout_secs = config.upstream_timeout_secs,
            "Ingress forwarding to relay"
        );

        let state = AppState {
            relay: Arc::new(relay),
        };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &IngressConfig, state: AppState) -> Router {
        Router::new()
            .route("/send", post(send_handler).fallback(method_not_allowed))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
                    .layer(
                        TraceLayer::new_for_http()
                            .make_span_with(|request: &Request<Body>| make_span(request)),
                    )
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.request_timeout_secs,
                    ))),
            )
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_body_bytes = self.config.max_body_bytes,
            "Ingress HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Ingress HTTP server stopped");
        Ok(())
    }
}

fn make_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "ingress",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request.headers())
    )
}

/// `POST /send`: decode, forward to the relay, return its status.
async fn send_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PaymentStatus>, IngressError> {
    let request_id = request_id(&headers);

    let notice: PaymentNotice = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Invalid request payload");
        IngressError::BadRequest {
            cause: e.to_string(),
        }
    })?;

    tracing::debug!(
        request_id = %request_id,
        address = %notice.address,
        amount = notice.amount,
        "Forwarding notice to relay"
    );

    let address = notice.address.clone();
    let amount = notice.amount;
    match state.relay.send(notice).await {
        Ok(status) => {
            tracing::info!(
                request_id = %request_id,
                address = %address,
                amount,
                status = %status.status,
                "Relay answered"
            );
            Ok(Json(status))
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                address = %address,
                amount,
                error = %e,
                "Relay call failed"
            );
            Err(e.into())
        }
    }
}

/// Any method other than POST on `/send`.
async fn method_not_allowed() -> IngressError {
    IngressError::MethodNotAllowed
}

/// Liveness probe; does not touch the relay.
async fn health_handler() -> &'static str {
    "ok"
}
