//! Mock QuickBooks API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! QuickBooks create and delete endpoints for integration and end-to-end
//! testing. Unlike wiremock which mocks at the HTTP level per-test, this
//! server maintains state across requests, so a created entity can be
//! deleted, deleted again, or deleted with a stale sync token.
//!
//! # Example
//!
//! ```ignore
//! use qbapi::mock_server::{Fixtures, MockServer, REALM_ID};
//! use qbapi::{Create, Delete, QuickbooksClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = QuickbooksClient::new("test-token", server.url(), REALM_ID).unwrap();
//!
//!     let created = Fixtures::cash_purchase(1999).create(&client).await.unwrap();
//!     created.remove(&client).await.unwrap();
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, REALM_ID};
pub use server::MockServer;
pub use state::{DeleteRejection, MockState};
