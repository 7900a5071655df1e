//! Lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock server on an ephemeral port and drives the client over
//! real HTTP through the default reqwest transport, covering the success
//! path, both error kinds, and correlation-id propagation end to end.

use loan_client::{LoanClient, LoanClientError, LoanPayload};
use tokio::net::TcpListener;

async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

fn payload() -> LoanPayload {
    LoanPayload {
        amount: 250_000.0,
        interest_rate: 0.065,
        length_in_months: 360,
        monthly_payment_amount: 1580.17,
    }
}

#[tokio::test]
async fn create_get_update_lifecycle() {
    let base_url = start_server().await;
    let client = LoanClient::new(Some(&base_url));

    // Create: server assigns an id and echoes the payload fields exactly.
    let created = client.create_loan(&payload(), None).await.unwrap();
    assert!(!created.data.id.is_empty());
    assert_eq!(created.data.amount, 250_000.0);
    assert_eq!(created.data.interest_rate, 0.065);
    assert_eq!(created.data.length_in_months, 360);
    assert_eq!(created.data.monthly_payment_amount, 1580.17);
    // The auto-generated correlation id comes back on the response.
    assert!(!created.request_id.is_empty());

    // Get: same loan, same fields.
    let id = created.data.id.clone();
    let fetched = client.get_loan(&id, None).await.unwrap();
    assert_eq!(fetched.data, created.data);

    // Update: all non-id fields replaced, id stable.
    let updated = client
        .update_loan(
            &id,
            &LoanPayload {
                amount: 200_000.0,
                interest_rate: 0.055,
                length_in_months: 360,
                monthly_payment_amount: 1264.14,
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(updated.data.id, id);
    assert_eq!(updated.data.amount, 200_000.0);
    assert_eq!(updated.data.interest_rate, 0.055);
}

#[tokio::test]
async fn explicit_request_id_round_trips() {
    let base_url = start_server().await;
    let client = LoanClient::new(Some(&base_url));

    let created = client
        .create_loan(&payload(), Some("lifecycle-rid-1"))
        .await
        .unwrap();
    assert_eq!(created.request_id, "lifecycle-rid-1");
}

#[tokio::test]
async fn missing_loan_surfaces_api_error() {
    let base_url = start_server().await;
    let client = LoanClient::new(Some(&base_url));

    let err = client
        .get_loan("missing", Some("rid-not-found"))
        .await
        .unwrap_err();
    match err {
        LoanClientError::Api(api) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.api_error.error, "Resource not found");
            assert_eq!(api.request_id, "rid-not-found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_payload_surfaces_validation_error() {
    let base_url = start_server().await;
    let client = LoanClient::new(Some(&base_url));

    let invalid = LoanPayload {
        amount: -1.0,
        ..payload()
    };
    let err = client.create_loan(&invalid, None).await.unwrap_err();
    match err {
        LoanClientError::Api(api) => {
            assert_eq!(api.status, 422);
            assert_eq!(api.api_error.error, "Validation failed");
            let violations = api.api_error.errors.unwrap();
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "amount");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_surfaces_transport_error() {
    // Nothing listens on the reserved port 1.
    let client = LoanClient::new(Some("http://127.0.0.1:1"));

    let err = client.get_loan("loan-1", None).await.unwrap_err();
    assert!(matches!(err, LoanClientError::Transport(_)));
}
