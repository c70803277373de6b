//! Shared helpers for chain tests. Every server binds an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;

use payment_relay::config::{IngressConfig, RelayConfig, ValidatorConfig};
use payment_relay::net::RpcServer;
use payment_relay::{relay, validator, IngressServer, Shutdown};
use tokio::net::TcpListener;

/// A running three-hop chain. Dropping it stops the RPC servers.
pub struct Chain {
    pub ingress: SocketAddr,
    pub relay: RpcServer,
    pub validator: RpcServer,
    pub shutdown: Shutdown,
}

impl Chain {
    pub fn send_url(&self) -> String {
        format!("http://{}/send", self.ingress)
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        self.shutdown.trigger();
        self.relay.stop();
        self.validator.stop();
    }
}

pub async fn start_validator() -> RpcServer {
    let config = ValidatorConfig {
        bind_address: "127.0.0.1:0".to_string(),
        ..ValidatorConfig::default()
    };
    validator::spawn(&config).await.unwrap()
}

pub async fn start_relay(validator_url: &str, timeout_secs: u64) -> RpcServer {
    let config = RelayConfig {
        bind_address: "127.0.0.1:0".to_string(),
        validator_url: validator_url.to_string(),
        upstream_timeout_secs: timeout_secs,
    };
    relay::spawn(&config).await.unwrap()
}

pub async fn start_ingress(relay_url: &str, shutdown: &Shutdown) -> SocketAddr {
    let config = IngressConfig {
        bind_address: "127.0.0.1:0".to_string(),
        relay_url: relay_url.to_string(),
        upstream_timeout_secs: 10,
        ..IngressConfig::default()
    };
    let server = IngressServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    addr
}

/// Start validator, relay and ingress wired to each other.
pub async fn start_chain() -> Chain {
    let validator = start_validator().await;
    let relay = start_relay(&validator.url(), 5).await;
    let shutdown = Shutdown::new();
    let ingress = start_ingress(&relay.url(), &shutdown).await;
    Chain {
        ingress,
        relay,
        validator,
        shutdown,
    }
}

/// An address nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
