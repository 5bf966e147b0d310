//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    Line, MemoRef, PaymentType, PrintStatus, Purchase, ReferenceType, SalesReceipt,
};

/// Realm the default scenario serves.
pub const REALM_ID: &str = "123";

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Records seeded by [`Fixtures::default_scenario`].
pub struct DefaultScenario {
    pub purchases: Vec<Purchase>,
    pub sales_receipts: Vec<SalesReceipt>,
}

impl Fixtures {
    // =========================================================================
    // Purchase Fixtures
    // =========================================================================

    /// A cash purchase of `cents` posted to the Advertising account.
    pub fn cash_purchase(cents: i64) -> Purchase {
        let mut purchase = Purchase::new(
            PaymentType::Cash,
            ReferenceType::named("35", "Checking"),
            vec![Line::account_expense(
                Decimal::new(cents, 2),
                ReferenceType::named("7", "Advertising"),
            )],
        );
        purchase.txn_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        purchase
    }

    /// A credit card purchase with a vendor payee.
    pub fn credit_card_purchase(cents: i64, vendor: &str) -> Purchase {
        let mut purchase = Self::cash_purchase(cents);
        purchase.payment_type = Some(PaymentType::CreditCard);
        purchase.account_ref = Some(ReferenceType::named("42", "Visa"));
        purchase.entity_ref = Some(ReferenceType::named("30", vendor));
        purchase.print_status = Some(PrintStatus::NotSet);
        purchase
    }

    /// A purchase as if already stored on the server.
    pub fn existing_purchase(id: &str, sync_token: &str) -> Purchase {
        let mut purchase = Self::cash_purchase(1000);
        purchase.id = Some(id.to_string());
        purchase.sync_token = Some(sync_token.to_string());
        purchase.total_amt = Some(purchase.line_total());
        purchase
    }

    // =========================================================================
    // Sales Receipt Fixtures
    // =========================================================================

    /// A single-line sales receipt for a services item.
    pub fn sales_receipt(cents: i64, customer: &str) -> SalesReceipt {
        let mut receipt = SalesReceipt::new(vec![Line::sales_item(
            Decimal::new(cents, 2),
            ReferenceType::named("1", "Services"),
        )])
        .with_customer(ReferenceType::named("6", customer));
        receipt.customer_memo = Some(MemoRef {
            value: "Thank you for your business!".to_string(),
        });
        receipt
    }

    /// A sales receipt as if already stored on the server.
    pub fn existing_sales_receipt(id: &str, sync_token: &str) -> SalesReceipt {
        let mut receipt = Self::sales_receipt(3500, "Dylan Sollfrank");
        receipt.id = Some(id.to_string());
        receipt.sync_token = Some(sync_token.to_string());
        receipt
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// One existing purchase (`100`, sync token `2`) and one existing sales
    /// receipt (`200`, sync token `0`).
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            purchases: vec![Self::existing_purchase("100", "2")],
            sales_receipts: vec![Self::existing_sales_receipt("200", "0")],
        }
    }
}
