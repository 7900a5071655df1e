//! In-memory implementation of the loan API, used as the integration-test
//! fixture for the `loan-client` crate and runnable standalone.
//!
//! Implements the wire contract the client consumes: JSON loan CRUD under
//! `/api/loans`, structured `ApiError` bodies on failure, and an
//! `X-Request-ID` response header on every exchange (echoed from the request
//! when present, generated otherwise).

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub length_in_months: u32,
    pub monthly_payment_amount: f64,
}

/// Body of `POST /api/loans` and `PUT /api/loans/{id}` — a loan without the
/// server-assigned id.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayload {
    pub amount: f64,
    pub interest_rate: f64,
    pub length_in_months: u32,
    pub monthly_payment_amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Error body attached to every non-2xx response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub timestamp: String,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

pub type Db = Arc<RwLock<HashMap<String, Loan>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/loans", post(create_loan))
        .route("/api/loans/{id}", get(get_loan).put(update_loan))
        .layer(middleware::from_fn(propagate_request_id))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Ensure every response carries an `X-Request-ID` header: the incoming
/// value is echoed when non-blank, otherwise a fresh UUID is set.
async fn propagate_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

async fn create_loan(
    State(db): State<Db>,
    Json(input): Json<LoanPayload>,
) -> Result<(StatusCode, Json<Loan>), (StatusCode, Json<ApiError>)> {
    reject_invalid(&input)?;
    let loan = Loan {
        id: Uuid::new_v4().to_string(),
        amount: input.amount,
        interest_rate: input.interest_rate,
        length_in_months: input.length_in_months,
        monthly_payment_amount: input.monthly_payment_amount,
    };
    db.write().await.insert(loan.id.clone(), loan.clone());
    Ok((StatusCode::CREATED, Json(loan)))
}

async fn get_loan(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Loan>, (StatusCode, Json<ApiError>)> {
    let loans = db.read().await;
    loans.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn update_loan(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<LoanPayload>,
) -> Result<Json<Loan>, (StatusCode, Json<ApiError>)> {
    reject_invalid(&input)?;
    let mut loans = db.write().await;
    let loan = loans.get_mut(&id).ok_or_else(not_found)?;
    loan.amount = input.amount;
    loan.interest_rate = input.interest_rate;
    loan.length_in_months = input.length_in_months;
    loan.monthly_payment_amount = input.monthly_payment_amount;
    Ok(Json(loan.clone()))
}

/// Field constraints from the API contract: positive amount and payment,
/// non-negative rate, at least one month.
fn validate(payload: &LoanPayload) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if payload.amount <= 0.0 {
        violations.push(violation("amount", "must be greater than 0"));
    }
    if payload.interest_rate < 0.0 {
        violations.push(violation("interestRate", "must be greater than or equal to 0"));
    }
    if payload.length_in_months < 1 {
        violations.push(violation("lengthInMonths", "must be greater than or equal to 1"));
    }
    if payload.monthly_payment_amount <= 0.0 {
        violations.push(violation("monthlyPaymentAmount", "must be greater than 0"));
    }
    violations
}

fn reject_invalid(payload: &LoanPayload) -> Result<(), (StatusCode, Json<ApiError>)> {
    let violations = validate(payload);
    if violations.is_empty() {
        return Ok(());
    }
    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiError {
            timestamp: Utc::now().to_rfc3339(),
            error: "Validation failed".to_string(),
            errors: Some(violations),
        }),
    ))
}

fn not_found() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            timestamp: Utc::now().to_rfc3339(),
            error: "Resource not found".to_string(),
            errors: None,
        }),
    )
}

fn violation(field: &str, message: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
