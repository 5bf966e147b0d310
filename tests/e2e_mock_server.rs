//! E2E tests using the mock QuickBooks server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use qbapi::mock_server::{Fixtures, MockServer, MockState, REALM_ID};
use qbapi::{Create, Delete, Purchase, QuickbooksClient, QuickbooksError, SalesReceipt};

fn client_for(server: &MockServer) -> QuickbooksClient {
    QuickbooksClient::new("test-token", server.url(), REALM_ID).unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Purchase Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_remove_purchase_workflow() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Step 1: Create
    let created = Fixtures::credit_card_purchase(4250, "Hicks Hardware")
        .create(&client)
        .await
        .expect("Failed to create purchase");

    let id = created.id.clone().expect("server assigns an id");
    assert_eq!(created.sync_token.as_deref(), Some("0"));
    assert!(created.meta_data.is_some());
    assert_eq!(
        created.entity_ref.as_ref().and_then(|r| r.name.as_deref()),
        Some("Hicks Hardware")
    );
    assert_eq!(created.line_total(), rust_decimal::Decimal::new(4250, 2));

    // Step 2: Verify it was stored
    assert!(server.state().read().await.get::<Purchase>(&id).is_some());

    // Step 3: Remove using the record's own identity
    created.remove(&client).await.expect("Failed to delete purchase");

    assert!(server.state().read().await.get::<Purchase>(&id).is_none());

    server.shutdown().await;
}

#[tokio::test]
async fn test_deleting_twice_succeeds() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Purchase::delete(&client, "100", "2")
        .await
        .expect("First delete failed");

    // The server now answers Object Not Found, which counts as deleted
    Purchase::delete(&client, "100", "2")
        .await
        .expect("Second delete should be treated as success");

    server.shutdown().await;
}

#[tokio::test]
async fn test_delete_unknown_id_succeeds() {
    let server = MockServer::start_empty().await;
    let client = client_for(&server);

    SalesReceipt::delete(&client, "9999", "0")
        .await
        .expect("Unknown id should be treated as already deleted");

    server.shutdown().await;
}

#[tokio::test]
async fn test_delete_with_stale_sync_token_fails() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = Purchase::delete(&client, "100", "1").await.unwrap_err();

    match &err {
        QuickbooksError::Fault { status, failure } => {
            assert_eq!(*status, 400);
            assert_eq!(failure.first_message(), Some("Stale Object Error"));
        }
        other => panic!("Expected Fault, got {other:?}"),
    }
    assert!(!err.is_object_not_found());

    // The record is still there
    assert!(server.state().read().await.get::<Purchase>("100").is_some());

    server.shutdown().await;
}

// =============================================================================
// Sales Receipt Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_create_sales_receipt_workflow() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let created = Fixtures::sales_receipt(3500, "Dylan Sollfrank")
        .create(&client)
        .await
        .expect("Failed to create sales receipt");

    let id = created.id.clone().expect("server assigns an id");
    assert_eq!(created.domain.as_deref(), Some("QBO"));
    assert_eq!(
        created.customer_memo.as_ref().map(|m| m.value.as_str()),
        Some("Thank you for your business!")
    );

    let state = server.state();
    assert_eq!(state.read().await.count("salesreceipt"), 2);

    SalesReceipt::delete(&client, &id, "0")
        .await
        .expect("Failed to delete sales receipt");
    assert_eq!(state.read().await.count("salesreceipt"), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_resources_are_kept_apart() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // "200" is a sales receipt, so deleting it as a purchase finds nothing
    Purchase::delete(&client, "200", "0").await.unwrap();
    assert!(server
        .state()
        .read()
        .await
        .get::<SalesReceipt>("200")
        .is_some());

    server.shutdown().await;
}

// =============================================================================
// Authorization Tests
// =============================================================================

#[tokio::test]
async fn test_required_token_is_enforced() {
    let state = MockState::new()
        .with_realm(REALM_ID)
        .with_required_token("secret-token");

    let server = MockServer::with_state(state).await;

    let wrong = QuickbooksClient::new("wrong-token", server.url(), REALM_ID).unwrap();
    let err = Fixtures::cash_purchase(100).create(&wrong).await.unwrap_err();

    match err {
        QuickbooksError::Fault { status, failure } => {
            assert_eq!(status, 401);
            assert_eq!(failure.fault.fault_type, "AUTHENTICATION");
        }
        other => panic!("Expected Fault, got {other:?}"),
    }

    let right = QuickbooksClient::new("secret-token", server.url(), REALM_ID).unwrap();
    Fixtures::cash_purchase(100)
        .create(&right)
        .await
        .expect("Correct token should be accepted");

    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_server_accepts_any_realm() {
    let server = MockServer::start_empty().await;
    let client = QuickbooksClient::new("test-token", server.url(), "4620816365178451234").unwrap();

    let created = Fixtures::cash_purchase(500)
        .create(&client)
        .await
        .expect("Failed to create purchase");

    assert_eq!(created.id.as_deref(), Some("1"));

    server.shutdown().await;
}
