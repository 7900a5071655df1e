//! The loan API client: request construction, correlation-id propagation,
//! and response/error mapping.
//!
//! # Design
//! `LoanClient` holds only a base URL and a transport; there is no mutable
//! state between calls, so concurrent calls are fully independent. Each
//! operation is a single request/response round trip: build an `HttpRequest`,
//! hand it to the transport, map the `HttpResponse` back into domain types.
//! No retries, no caching, no logging.

use uuid::Uuid;

use crate::error::{LoanApiError, LoanClientError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::transport::ReqwestTransport;
use crate::types::{ApiError, CreateLoanPayload, Loan, LoanResponse, UpdateLoanPayload};

/// Correlation header attached to every request and echoed by the server.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Base URL used when neither an explicit argument nor [`BASE_URL_ENV`] is
/// provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable consulted when no base URL is passed to
/// [`LoanClient::new`].
pub const BASE_URL_ENV: &str = "API_URL";

/// Asynchronous client for the loan CRUD API.
///
/// Every request carries `Content-Type: application/json` and an
/// `X-Request-ID` header — a caller-supplied value verbatim when one is
/// given, otherwise a freshly generated random UUID. Successful responses
/// come back as [`LoanResponse`], pairing the decoded [`Loan`] with the
/// correlation id the server echoed. Non-2xx responses become
/// [`LoanApiError`]; failures with no response pass through as
/// [`TransportError`].
#[derive(Debug, Clone)]
pub struct LoanClient<T: HttpTransport = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl LoanClient {
    /// Build a client over the default reqwest transport.
    ///
    /// The base URL is the explicit argument when given, else the `API_URL`
    /// environment variable, else `http://localhost:8080`.
    pub fn new(base_url: Option<&str>) -> Self {
        Self::with_transport(resolve_base_url(base_url), ReqwestTransport::new())
    }
}

impl<T: HttpTransport> LoanClient<T> {
    /// Build a client over a custom transport. A trailing `/` on the base
    /// URL is stripped so path joining stays predictable.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    /// `POST /api/loans` with `payload` as the JSON body. The created loan
    /// carries its server-assigned `id`.
    pub async fn create_loan(
        &self,
        payload: &CreateLoanPayload,
        request_id: Option<&str>,
    ) -> Result<LoanResponse, LoanClientError> {
        let body = serde_json::to_string(payload).map_err(TransportError::from)?;
        let request = self.build_request(
            HttpMethod::Post,
            "/api/loans".to_string(),
            Some(body),
            request_id,
        );
        self.execute(request).await
    }

    /// `GET /api/loans/{id}`.
    pub async fn get_loan(
        &self,
        id: &str,
        request_id: Option<&str>,
    ) -> Result<LoanResponse, LoanClientError> {
        let request = self.build_request(HttpMethod::Get, format!("/api/loans/{id}"), None, request_id);
        self.execute(request).await
    }

    /// `PUT /api/loans/{id}` with `payload` as the JSON body, replacing every
    /// non-id field of the loan.
    pub async fn update_loan(
        &self,
        id: &str,
        payload: &UpdateLoanPayload,
        request_id: Option<&str>,
    ) -> Result<LoanResponse, LoanClientError> {
        let body = serde_json::to_string(payload).map_err(TransportError::from)?;
        let request = self.build_request(
            HttpMethod::Put,
            format!("/api/loans/{id}"),
            Some(body),
            request_id,
        );
        self.execute(request).await
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<String>,
        request_id: Option<&str>,
    ) -> HttpRequest {
        let request_id = request_id
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (REQUEST_ID_HEADER.to_string(), request_id),
            ],
            body,
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<LoanResponse, LoanClientError> {
        let response = self.transport.execute(request).await?;
        let request_id = extract_request_id(&response.headers);
        if is_success(&response) {
            let data: Loan =
                serde_json::from_str(&response.body).map_err(TransportError::from)?;
            Ok(LoanResponse { data, request_id })
        } else {
            let api_error: ApiError =
                serde_json::from_str(&response.body).map_err(TransportError::from)?;
            Err(LoanApiError {
                status: response.status,
                api_error,
                request_id,
            }
            .into())
        }
    }
}

fn is_success(response: &HttpResponse) -> bool {
    (200..300).contains(&response.status)
}

/// Case-insensitive lookup of the correlation header; the server's absence
/// degrades to an empty string, never an error.
fn extract_request_id(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(REQUEST_ID_HEADER))
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

fn resolve_base_url(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(BASE_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
