//! Error types for the loan API client.
//!
//! # Design
//! Exactly two failure kinds, matching the two ways a call can go wrong:
//! the server answered with a non-2xx status and a structured body
//! ([`LoanApiError`]), or no response was obtained at all
//! ([`TransportError`]). Both variants of [`LoanClientError`] are
//! transparent, so the underlying failure's message and `source()` chain
//! reach the caller unmodified.

use thiserror::Error;

use crate::http::TransportError;
use crate::types::ApiError;

/// The server completed the exchange with a non-2xx status.
///
/// Displays as the server's `error` string; `status` and `request_id` carry
/// the HTTP status code and the correlation id echoed on the failing
/// response (empty when the server sent no `X-Request-ID` header).
#[derive(Debug, Clone, Error)]
#[error("{}", api_error.error)]
pub struct LoanApiError {
    pub status: u16,
    pub api_error: ApiError,
    pub request_id: String,
}

/// Any failure surfaced by a [`LoanClient`](crate::LoanClient) call.
#[derive(Debug, Error)]
pub enum LoanClientError {
    /// The server answered with a non-2xx status and an [`ApiError`] body.
    #[error(transparent)]
    Api(#[from] LoanApiError),

    /// No response was obtained; the underlying transport failure is passed
    /// through unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(message: &str) -> ApiError {
        ApiError {
            timestamp: "2026-08-30T12:00:00Z".to_string(),
            error: message.to_string(),
            errors: None,
        }
    }

    #[test]
    fn api_error_displays_server_message() {
        let err = LoanApiError {
            status: 404,
            api_error: api_error("Resource not found"),
            request_id: "rid-1".to_string(),
        };
        assert_eq!(err.to_string(), "Resource not found");
    }

    #[test]
    fn client_error_is_transparent_over_api_variant() {
        let err = LoanClientError::from(LoanApiError {
            status: 422,
            api_error: api_error("Validation failed"),
            request_id: String::new(),
        });
        assert_eq!(err.to_string(), "Validation failed");
        assert!(matches!(err, LoanClientError::Api(ref e) if e.status == 422));
    }

    #[test]
    fn transport_variant_is_distinguishable_from_api_variant() {
        let err = LoanClientError::from(TransportError::Request(
            "connection refused".to_string().into(),
        ));
        assert!(matches!(err, LoanClientError::Transport(_)));
    }
}
