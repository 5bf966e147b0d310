//! Sales receipt model and trait implementations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{Line, MemoRef, MetaData, PhysicalAddress, ReferenceType, TxnTaxDetail};
use super::enums::{EmailStatus, GlobalTaxCalculation, PrintStatus};
use crate::traits::{Create, Delete, Entity};

/// A QuickBooks sales receipt: a sale paid in full at the time of sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesReceipt {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,

    /// Sales lines. Always sent, even when empty.
    #[serde(default)]
    pub line: Vec<Line>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_addr: Option<PhysicalAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_addr: Option<PhysicalAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_from_addr: Option<PhysicalAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_ref_num: Option<String>,

    #[serde(rename = "domain", default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_method_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_num: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_status: Option<PrintStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_status: Option<EmailStatus>,

    /// Total in the company's home currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_total_amt: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_form_address: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_tax_after_discount: Option<bool>,

    /// Sparse-update marker.
    #[serde(
        rename = "sparse",
        alias = "spare",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sparse: Option<bool>,

    /// Account the payment is deposited to (e.g. Undeposited Funds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_to_account_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_memo: Option<MemoRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_tax_calculation: Option<GlobalTaxCalculation>,
}

impl SalesReceipt {
    /// A new receipt with the given lines.
    pub fn new(line: Vec<Line>) -> Self {
        Self {
            line,
            ..Default::default()
        }
    }

    /// Attach the customer the sale was made to.
    #[must_use]
    pub fn with_customer(mut self, customer: ReferenceType) -> Self {
        self.customer_ref = Some(customer);
        self
    }
}

impl Entity for SalesReceipt {
    const RESOURCE: &'static str = "salesreceipt";
    const NAME: &'static str = "SalesReceipt";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Create for SalesReceipt {}

impl Delete for SalesReceipt {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_receipt_deserialize_server_response() {
        let json = r#"{
            "domain": "QBO",
            "sparse": false,
            "Id": "11",
            "SyncToken": "2",
            "MetaData": {"CreateTime": "2014-09-17T15:35:07-07:00", "LastUpdatedTime": "2014-09-17T15:35:07-07:00"},
            "DocNumber": "1003",
            "TxnDate": "2014-09-14",
            "Line": [
                {
                    "Id": "1",
                    "LineNum": 1,
                    "Description": "Custom Design",
                    "Amount": 337.5,
                    "DetailType": "SalesItemLineDetail",
                    "SalesItemLineDetail": {"ItemRef": {"value": "4", "name": "Design"}, "UnitPrice": 75, "Qty": 4.5, "TaxCodeRef": {"value": "NON"}}
                },
                {"Amount": 337.5, "DetailType": "SubTotalLineDetail", "SubTotalLineDetail": {}}
            ],
            "TxnTaxDetail": {"TotalTax": 0},
            "CustomerRef": {"value": "6", "name": "Dylan Sollfrank"},
            "CustomerMemo": {"value": "Thank you for your business!"},
            "TotalAmt": 337.5,
            "ApplyTaxAfterDiscount": false,
            "PrintStatus": "NotSet",
            "EmailStatus": "NotSet",
            "Balance": 0,
            "DepositToAccountRef": {"value": "4", "name": "Undeposited Funds"}
        }"#;

        let receipt: SalesReceipt = serde_json::from_str(json).unwrap();

        assert_eq!(receipt.id(), Some("11"));
        assert_eq!(receipt.sync_token(), Some("2"));
        assert_eq!(receipt.domain.as_deref(), Some("QBO"));
        assert_eq!(receipt.sparse, Some(false));
        assert_eq!(receipt.line.len(), 2);
        assert_eq!(receipt.total_amt, Some(Decimal::new(3375, 1)));
        assert_eq!(receipt.email_status, Some(EmailStatus::NotSet));
        assert_eq!(
            receipt.customer_memo.map(|m| m.value).as_deref(),
            Some("Thank you for your business!")
        );
    }

    #[test]
    fn test_new_receipt_serializes_minimal_body() {
        let receipt = SalesReceipt::new(vec![Line::sales_item(
            Decimal::new(35, 0),
            ReferenceType::named("1", "Services"),
        )])
        .with_customer(ReferenceType::new("6"));

        let json = serde_json::to_value(&receipt).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 2, "only Line and CustomerRef expected: {obj:?}");
        assert_eq!(obj["CustomerRef"]["value"], "6");
        assert_eq!(obj["Line"][0]["DetailType"], "SalesItemLineDetail");
    }

    #[test]
    fn test_legacy_spare_key_is_accepted() {
        let receipt: SalesReceipt = serde_json::from_str(r#"{"Line": [], "spare": true}"#).unwrap();
        assert_eq!(receipt.sparse, Some(true));
    }
}
