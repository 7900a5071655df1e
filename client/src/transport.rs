//! Default [`HttpTransport`] backed by `reqwest`.

use async_trait::async_trait;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Executes [`HttpRequest`]s over a shared `reqwest::Client`.
///
/// `reqwest` treats 4xx/5xx responses as successful exchanges, which is
/// exactly the [`HttpTransport`] contract: only failures that produced no
/// response become [`TransportError`]s.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(Box::new(e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(Box::new(e)))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
