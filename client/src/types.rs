//! Domain DTOs for the loan API.
//!
//! # Design
//! These types mirror the server's JSON schema (camelCase field names on the
//! wire) but are defined independently from the mock-server crate; the
//! integration tests catch schema drift between the two. All fields are owned
//! so values can be moved freely across await points and between tasks.

use serde::{Deserialize, Serialize};

/// A loan as returned by the API. `id` is server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub length_in_months: u32,
    pub monthly_payment_amount: f64,
}

/// Request payload for creating or updating a loan — a `Loan` without the
/// server-assigned `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayload {
    pub amount: f64,
    pub interest_rate: f64,
    pub length_in_months: u32,
    pub monthly_payment_amount: f64,
}

/// Payload accepted by `POST /api/loans`.
pub type CreateLoanPayload = LoanPayload;

/// Payload accepted by `PUT /api/loans/{id}`. Structurally identical to
/// [`CreateLoanPayload`] in this API version; kept as a separate alias so the
/// two can diverge without breaking callers.
pub type UpdateLoanPayload = LoanPayload;

/// A single field-level validation failure reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Structured error body the server attaches to non-2xx responses.
///
/// `errors` is only present on validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub timestamp: String,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

/// A decoded response body paired with the correlation id echoed by the
/// server (empty string when the `X-Request-ID` header was absent).
#[derive(Debug, Clone, PartialEq)]
pub struct LoanResponse<T = Loan> {
    pub data: T,
    pub request_id: String,
}
