//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, amounts finite)
//! - Keep the ingress deadline above the relay's
//! - Check that bind addresses and upstream URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayChainConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayChainConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    BindAddress { field: &'static str, value: String },

    #[error("{field}: invalid upstream URL '{value}'")]
    UpstreamUrl { field: &'static str, value: String },

    #[error("{field}: must be greater than zero")]
    Zero { field: &'static str },

    #[error("validator.expected_amounts: amount for '{address}' is not finite")]
    NonFiniteAmount { address: String },

    #[error("ingress.upstream_timeout_secs ({ingress}) must exceed the relay's ({relay})")]
    DeadlineOrder { ingress: u64, relay: u64 },

    #[error("logging.format: unknown format '{0}' (expected 'pretty' or 'json')")]
    LogFormat(String),
}

/// Validate the whole configuration.
pub fn validate_config(config: &RelayChainConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !matches!(config.logging.format.as_str(), "pretty" | "json") {
        errors.push(ValidationError::LogFormat(config.logging.format.clone()));
    }

    let ingress = &config.ingress;
    check_bind("ingress.bind_address", &ingress.bind_address, &mut errors);
    check_url("ingress.relay_url", &ingress.relay_url, &mut errors);
    check_positive(
        "ingress.upstream_timeout_secs",
        ingress.upstream_timeout_secs,
        &mut errors,
    );
    check_positive(
        "ingress.request_timeout_secs",
        ingress.request_timeout_secs,
        &mut errors,
    );
    check_positive(
        "ingress.max_body_bytes",
        ingress.max_body_bytes as u64,
        &mut errors,
    );

    let relay = &config.relay;
    check_bind("relay.bind_address", &relay.bind_address, &mut errors);
    check_url("relay.validator_url", &relay.validator_url, &mut errors);
    check_positive(
        "relay.upstream_timeout_secs",
        relay.upstream_timeout_secs,
        &mut errors,
    );

    if ingress.upstream_timeout_secs > 0
        && relay.upstream_timeout_secs > 0
        && ingress.upstream_timeout_secs <= relay.upstream_timeout_secs
    {
        errors.push(ValidationError::DeadlineOrder {
            ingress: ingress.upstream_timeout_secs,
            relay: relay.upstream_timeout_secs,
        });
    }

    check_bind("validator.bind_address", &config.validator.bind_address, &mut errors);
    for (address, amount) in &config.validator.expected_amounts {
        if !amount.is_finite() {
            errors.push(ValidationError::NonFiniteAmount {
                address: address.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_bind(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    let ok = Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false);
    if !ok {
        errors.push(ValidationError::UpstreamUrl {
            field,
            value: value.to_string(),
        });
    }
}

fn check_positive(field: &'static str, value: u64, errors: &mut Vec<ValidationError>) {
    if value == 0 {
        errors.push(ValidationError::Zero { field });
    }
}
