//! QuickBooks Online API client library.
//!
//! A Rust library for creating and deleting QuickBooks accounting entities
//! using a trait-based architecture: each operation ([`Create`], [`Delete`])
//! is a trait that entity types opt into, and one generic executor does the
//! work for every entity.
//!
//! # Quick Start
//!
//! ```no_run
//! use qbapi::{Create, Delete, Line, PaymentType, Purchase, QuickbooksClient, ReferenceType};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> qbapi::Result<()> {
//!     // Create client from environment variables
//!     let client = QuickbooksClient::from_env()?;
//!
//!     // Record a cash purchase against an expense account
//!     let purchase = Purchase::new(
//!         PaymentType::Cash,
//!         ReferenceType::new("35"),
//!         vec![Line::account_expense(Decimal::new(1999, 2), ReferenceType::new("7"))],
//!     );
//!     let created = purchase.create(&client).await?;
//!     println!("Created purchase {:?}", created.id);
//!
//!     // Delete it again by id and sync token
//!     created.remove(&client).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Entity`] - resource path and response envelope key for a type
//! - [`Create`] - POST a new entity, decode the [`Envelope`]
//! - [`Delete`] - POST `{Id, SyncToken}` with `operation=delete`
//!
//! Non-success statuses are decoded into a [`Failure`] and returned as
//! [`QuickbooksError::Fault`]. The one exception: a delete answered with
//! HTTP 400 whose first error is `Object Not Found` succeeds, since the
//! object is already gone.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `QBO_ACCESS_TOKEN` (required) - OAuth2 access token
//! - `QBO_REALM_ID` (required) - company id
//! - `QBO_API_URL` (optional) - base URL override
//! - `QBO_ENVIRONMENT` (optional) - `production` (default) or `sandbox`
//! - `QBO_MINOR_VERSION` (optional) - API minor version (defaults to `65`)

pub mod cli;
mod client;
mod envelope;
mod error;
mod fault;
mod models;
pub mod operation;
pub mod output;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{Environment, QuickbooksClient, DEFAULT_MINOR_VERSION};
pub use envelope::Envelope;
pub use error::{QuickbooksError, Result};
pub use fault::{Failure, Fault, FaultError, OBJECT_NOT_FOUND};

// Re-export traits
pub use traits::{Create, Delete, Entity};

// Re-export models
pub use models::{
    // Shared types
    AccountBasedExpenseLineDetail,
    DiscountLineDetail,
    ItemBasedExpenseLineDetail,
    Line,
    MemoRef,
    MetaData,
    PhysicalAddress,
    ReferenceType,
    SalesItemLineDetail,
    TaxLineDetail,
    TxnTaxDetail,
    // Enumerations
    BillableStatus,
    EmailStatus,
    GlobalTaxCalculation,
    LineDetailType,
    PaymentType,
    PrintStatus,
    // Entities
    Purchase,
    SalesReceipt,
};

// Re-export the generic executors
pub use operation::{create as create_entity, delete as delete_entity};
