//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{Purchase, ReferenceType, SalesReceipt};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn reference(r: &ReferenceType) -> String {
    match &r.name {
        Some(name) => format!("{} ({})", name, r.value),
        None => r.value.clone(),
    }
}

fn header(kind: &str, id: Option<&str>, sync_token: Option<&str>) -> Vec<String> {
    let header = format!("{}: {}", kind, id.unwrap_or("(unsaved)"));
    let divider = "─".repeat(header.chars().count().max(30));
    vec![
        header,
        divider,
        format!("Sync Token:     {}", sync_token.unwrap_or("-")),
    ]
}

fn push_common(
    lines: &mut Vec<String>,
    doc_number: Option<&str>,
    txn_date: Option<NaiveDate>,
    total: Option<Decimal>,
    line_count: usize,
) {
    if let Some(doc) = doc_number {
        lines.push(format!("Doc Number:     {}", doc));
    }
    if let Some(date) = txn_date {
        lines.push(format!("Date:           {}", date.format("%Y-%m-%d")));
    }
    if let Some(total) = total {
        lines.push(format!("Total:          {}", total));
    }
    lines.push(format!("Lines:          {}", line_count));
}

impl PrettyPrint for Purchase {
    fn pretty_print(&self) -> String {
        let mut lines = header("Purchase", self.id.as_deref(), self.sync_token.as_deref());

        if let Some(payment_type) = self.payment_type {
            lines.push(format!("Payment Type:   {}", payment_type));
        }

        if let Some(ref account) = self.account_ref {
            lines.push(format!("Account:        {}", reference(account)));
        }

        if let Some(ref payee) = self.entity_ref {
            lines.push(format!("Payee:          {}", reference(payee)));
        }

        push_common(
            &mut lines,
            self.doc_number.as_deref(),
            self.txn_date,
            self.total_amt,
            self.line.len(),
        );

        if self.credit == Some(true) {
            lines.push("Credit:         yes".to_string());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for SalesReceipt {
    fn pretty_print(&self) -> String {
        let mut lines = header("Sales Receipt", self.id.as_deref(), self.sync_token.as_deref());

        if let Some(ref customer) = self.customer_ref {
            lines.push(format!("Customer:       {}", reference(customer)));
        }

        push_common(
            &mut lines,
            self.doc_number.as_deref(),
            self.txn_date,
            self.total_amt,
            self.line.len(),
        );

        if let Some(balance) = self.balance {
            lines.push(format!("Balance:        {}", balance));
        }

        if let Some(ref deposit) = self.deposit_to_account_ref {
            lines.push(format!("Deposit To:     {}", reference(deposit)));
        }

        lines.join("\n")
    }
}
