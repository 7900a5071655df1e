//! Typed, asynchronous client for the loan CRUD API.
//!
//! # Overview
//! [`LoanClient`] issues create/read/update requests against `/api/loans`,
//! attaches an `X-Request-ID` correlation header to every request (generated
//! when the caller does not supply one), and returns each decoded body paired
//! with the correlation id the server echoed.
//!
//! # Design
//! - `LoanClient` is stateless — it holds only a base URL and a transport.
//! - The network sits behind the [`HttpTransport`] trait over plain-data
//!   request/response values; [`ReqwestTransport`] is the default
//!   implementation and tests substitute their own.
//! - Failures are a tagged union: the server answered with a structured
//!   error body ([`LoanApiError`]) or no response was obtained
//!   ([`TransportError`], passed through unchanged).
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{LoanClient, BASE_URL_ENV, DEFAULT_BASE_URL, REQUEST_ID_HEADER};
pub use error::{LoanApiError, LoanClientError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use transport::ReqwestTransport;
pub use types::{
    ApiError, CreateLoanPayload, FieldViolation, Loan, LoanPayload, LoanResponse,
    UpdateLoanPayload,
};
