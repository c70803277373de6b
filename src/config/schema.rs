//! Configuration schema definitions.
//!
//! This module defines the configuration structure shared by the three roles.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration. One file configures every role; each role only reads
/// its own section.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayChainConfig {
    /// Logging settings.
    pub logging: LoggingConfig,

    /// HTTP front door.
    pub ingress: IngressConfig,

    /// Middle forwarder.
    pub relay: RelayConfig,

    /// Terminal validator.
    pub validator: ValidatorConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error).
    pub level: String,

    /// Output format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Ingress (HTTP) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IngressConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// RPC endpoint of the relay.
    pub relay_url: String,

    /// Deadline for the outbound call to the relay, in seconds. Must exceed
    /// the relay's own deadline so its failure answer arrives in time.
    pub upstream_timeout_secs: u64,

    /// Deadline for handling one inbound request, in seconds.
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size.
    pub max_body_bytes: usize,
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            relay_url: "http://127.0.0.1:50051".to_string(),
            upstream_timeout_secs: 10,
            request_timeout_secs: 30,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Relay (RPC forwarder) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Bind address for the RPC server.
    pub bind_address: String,

    /// RPC endpoint of the validator.
    pub validator_url: String,

    /// Deadline for the outbound call to the validator, in seconds.
    pub upstream_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:50051".to_string(),
            validator_url: "http://127.0.0.1:50052".to_string(),
            upstream_timeout_secs: 5,
        }
    }
}

/// Validator (RPC terminal) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Bind address for the RPC server.
    pub bind_address: String,

    /// Expected amount per address. Read once at startup.
    pub expected_amounts: BTreeMap<String, f64>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:50052".to_string(),
            expected_amounts: default_expected_amounts(),
        }
    }
}

fn default_expected_amounts() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("abc123".to_string(), 50.0),
        ("xyz789".to_string(), 75.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: RelayChainConfig = toml::from_str("").unwrap();
        assert_eq!(config.ingress.bind_address, "0.0.0.0:8080");
        assert_eq!(config.relay.upstream_timeout_secs, 5);
        assert!(config.ingress.upstream_timeout_secs > config.relay.upstream_timeout_secs);
        assert_eq!(config.validator.expected_amounts.get("abc123"), Some(&50.0));
        assert_eq!(config.validator.expected_amounts.get("xyz789"), Some(&75.0));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: RelayChainConfig = toml::from_str(
            r#"
            [relay]
            validator_url = "http://10.0.0.2:6000"
            "#,
        )
        .unwrap();
        assert_eq!(config.relay.validator_url, "http://10.0.0.2:6000");
        assert_eq!(config.relay.bind_address, "0.0.0.0:50051");
    }

    #[test]
    fn test_table_replaced_not_merged() {
        let config: RelayChainConfig = toml::from_str(
            r#"
            [validator.expected_amounts]
            "addr-1" = 10.5
            "#,
        )
        .unwrap();
        assert_eq!(config.validator.expected_amounts.len(), 1);
        assert_eq!(config.validator.expected_amounts.get("addr-1"), Some(&10.5));
    }
}
