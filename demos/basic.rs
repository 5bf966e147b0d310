//! Basic example demonstrating the QuickBooks API client.
//!
//! Creates a purchase and a sales receipt, prints them, then deletes both.
//! Point it at a sandbox company.
//!
//! Run with:
//! ```
//! QBO_ACCESS_TOKEN=token QBO_REALM_ID=realm QBO_ENVIRONMENT=sandbox cargo run --example basic
//! ```

use qbapi::output::PrettyPrint;
use qbapi::{
    Create, Delete, Line, PaymentType, Purchase, QuickbooksClient, ReferenceType, SalesReceipt,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> qbapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating QuickBooks client...");
    let client = QuickbooksClient::from_env()?;
    println!(
        "Connected to: {} (realm {}, minor version {})",
        client.endpoint(),
        client.realm_id(),
        client.minor_version()
    );

    // Record a cash expense against the first bank account
    println!("\n--- Creating Purchase ---");
    let purchase = Purchase::new(
        PaymentType::Cash,
        ReferenceType::new("35"),
        vec![Line::account_expense(
            Decimal::new(1000, 2),
            ReferenceType::new("7"),
        )],
    );
    let purchase = purchase.create(&client).await?;
    println!("{}", purchase.pretty_print());

    // Ring up a sale for a services item
    println!("\n--- Creating Sales Receipt ---");
    let receipt = SalesReceipt::new(vec![Line::sales_item(
        Decimal::new(3500, 2),
        ReferenceType::new("1"),
    )])
    .with_customer(ReferenceType::new("6"));
    let receipt = receipt.create(&client).await?;
    println!("{}", receipt.pretty_print());

    // Clean up
    println!("\n--- Deleting ---");
    purchase.remove(&client).await?;
    println!("Deleted purchase {}", purchase.id.as_deref().unwrap_or("?"));

    receipt.remove(&client).await?;
    println!("Deleted sales receipt {}", receipt.id.as_deref().unwrap_or("?"));

    // A second delete of the same record still succeeds
    purchase.remove(&client).await?;
    println!("Deleting purchase again is a no-op");

    println!("\nDone!");
    Ok(())
}
