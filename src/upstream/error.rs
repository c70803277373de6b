//! Classification of failed calls to the next hop.

use jsonrpsee::core::ClientError;
use thiserror::Error;

use crate::resilience::TimedOut;

/// Why a call to the next hop did not produce a status.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The configured target is not a usable RPC endpoint.
    #[error("invalid upstream target '{target}': {cause}")]
    InvalidTarget { target: String, cause: String },

    /// No connection could be established.
    #[error("{target} is unreachable: {cause}")]
    Unavailable { target: String, cause: String },

    /// The next hop answered with an RPC error object.
    #[error("{target} returned error {code}: {message}")]
    Rejected {
        target: String,
        code: i32,
        message: String,
        data: Option<String>,
    },

    /// The call failed after the connection was made (bad response, protocol error).
    #[error("call to {target} failed: {message}")]
    Call { target: String, message: String },

    /// The call did not finish within its deadline.
    #[error("call to {target} timed out: {source}")]
    Timeout {
        target: String,
        #[source]
        source: TimedOut,
    },
}

impl UpstreamError {
    /// Map a jsonrpsee client error for a call against `target`.
    pub fn from_client(target: &str, err: ClientError, limit: std::time::Duration) -> Self {
        let target = target.to_string();
        match err {
            ClientError::Transport(cause) => Self::Unavailable {
                target,
                cause: error_chain(cause.as_ref()),
            },
            ClientError::RequestTimeout => Self::Timeout {
                target,
                source: TimedOut { after: limit },
            },
            ClientError::Call(obj) => Self::Rejected {
                target,
                code: obj.code(),
                message: obj.message().to_string(),
                data: obj.data().map(|raw| raw.get().to_string()),
            },
            other => Self::Call {
                target,
                message: other.to_string(),
            },
        }
    }

    /// True when the next hop could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::InvalidTarget { .. } | Self::Unavailable { .. })
    }
}

/// Render an error with its sources, skipping causes already in the text.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use jsonrpsee::types::ErrorObjectOwned;

    use super::*;

    #[test]
    fn test_call_error_keeps_code_and_message() {
        let obj = ErrorObjectOwned::owned(
            -32001,
            "http://validator is unreachable: connection refused",
            Some("error connecting to validator"),
        );
        let err = UpstreamError::from_client(
            "http://relay",
            ClientError::Call(obj),
            Duration::from_secs(5),
        );
        match &err {
            UpstreamError::Rejected { code, message, data, .. } => {
                assert_eq!(*code, -32001);
                assert_eq!(message, "http://validator is unreachable: connection refused");
                assert_eq!(data.as_deref(), Some("\"error connecting to validator\""));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(!err.is_unavailable());
        assert_eq!(
            err.to_string(),
            concat!(
                "http://relay returned error -32001: ",
                "http://validator is unreachable: connection refused"
            )
        );
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let io = std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        );
        let outer = ConnectError(io);
        assert_eq!(error_chain(&outer), "tcp connect error: connection refused");
    }

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct ConnectError(#[source] std::io::Error);

    #[test]
    fn test_request_timeout_is_timeout() {
        let err = UpstreamError::from_client(
            "http://relay",
            ClientError::RequestTimeout,
            Duration::from_secs(5),
        );
        assert!(matches!(err, UpstreamError::Timeout { .. }));
        assert_eq!(
            err.to_string(),
            "call to http://relay timed out: deadline of 5s exceeded"
        );
    }
}
