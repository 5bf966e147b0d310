//! Purchase model and trait implementations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{Line, MetaData, PhysicalAddress, ReferenceType, TxnTaxDetail};
use super::enums::{GlobalTaxCalculation, PaymentType, PrintStatus};
use crate::traits::{Create, Delete, Entity};

/// A QuickBooks purchase (cash, check, or credit card expense).
///
/// Build one with [`Purchase::new`] or struct update syntax over
/// `Default::default()`, leaving `id` and `sync_token` empty; the server
/// fills them in on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Purchase {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,

    /// Expense lines. Always sent, even when empty.
    #[serde(default)]
    pub line: Vec<Line>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    /// Bank or credit card account the purchase is paid from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_status: Option<PrintStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remit_to_addr: Option<PhysicalAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_tax_calculation: Option<GlobalTaxCalculation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_location_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,

    /// True for a credit card credit (refund) rather than a charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_tax_detail: Option<TxnTaxDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_ref: Option<ReferenceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_ref: Option<ReferenceType>,

    /// Vendor, customer, or employee the purchase was made from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<ReferenceType>,

    #[serde(
        rename = "IncludeInAnnualTPAR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub include_in_annual_tpar: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recur_data_ref: Option<ReferenceType>,
}

impl Purchase {
    /// A new purchase paid from `account` with the given lines.
    pub fn new(payment_type: PaymentType, account: ReferenceType, line: Vec<Line>) -> Self {
        Self {
            payment_type: Some(payment_type),
            account_ref: Some(account),
            line,
            ..Default::default()
        }
    }

    /// Sum of line amounts, ignoring lines without one.
    pub fn line_total(&self) -> Decimal {
        self.line.iter().filter_map(|l| l.amount).sum()
    }
}

impl Entity for Purchase {
    const RESOURCE: &'static str = "purchase";
    const NAME: &'static str = "Purchase";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn sync_token(&self) -> Option<&str> {
        self.sync_token.as_deref()
    }
}

impl Create for Purchase {}

impl Delete for Purchase {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineDetailType;

    #[test]
    fn test_purchase_deserialize_server_response() {
        let json = r#"{
            "AccountRef": {"value": "42", "name": "Visa"},
            "PaymentType": "CreditCard",
            "EntityRef": {"value": "30", "name": "Books by Bessie", "type": "Vendor"},
            "Credit": false,
            "TotalAmt": 10.0,
            "PurchaseEx": {"any": []},
            "domain": "QBO",
            "sparse": false,
            "Id": "252",
            "SyncToken": "0",
            "MetaData": {"CreateTime": "2015-07-24T10:33:39-07:00", "LastUpdatedTime": "2015-07-24T10:33:39-07:00"},
            "TxnDate": "2015-07-24",
            "CurrencyRef": {"value": "USD", "name": "United States Dollar"},
            "Line": [{
                "Id": "1",
                "Amount": 10.0,
                "DetailType": "AccountBasedExpenseLineDetail",
                "AccountBasedExpenseLineDetail": {
                    "AccountRef": {"value": "7", "name": "Advertising"},
                    "BillableStatus": "NotBillable",
                    "TaxCodeRef": {"value": "NON"}
                }
            }]
        }"#;

        let purchase: Purchase = serde_json::from_str(json).unwrap();

        assert_eq!(purchase.id(), Some("252"));
        assert_eq!(purchase.sync_token(), Some("0"));
        assert_eq!(purchase.payment_type, Some(PaymentType::CreditCard));
        assert_eq!(purchase.txn_date, NaiveDate::from_ymd_opt(2015, 7, 24));
        assert_eq!(purchase.total_amt, Some(Decimal::TEN));
        assert_eq!(purchase.line.len(), 1);
        assert_eq!(
            purchase.line[0].detail_type,
            LineDetailType::AccountBasedExpenseLineDetail
        );
        assert_eq!(purchase.line_total(), Decimal::TEN);
        assert!(purchase.meta_data.is_some());
    }

    #[test]
    fn test_new_purchase_omits_server_fields() {
        let purchase = Purchase::new(
            PaymentType::Cash,
            ReferenceType::new("35"),
            vec![Line::account_expense(Decimal::new(2500, 2), ReferenceType::new("7"))],
        );

        let json = serde_json::to_value(&purchase).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("Id"));
        assert!(!obj.contains_key("SyncToken"));
        assert!(!obj.contains_key("MetaData"));
        assert_eq!(obj["PaymentType"], "Cash");
        assert_eq!(obj["AccountRef"]["value"], "35");
        assert_eq!(obj["Line"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_line_list_is_still_sent() {
        let json = serde_json::to_value(Purchase::default()).unwrap();
        assert_eq!(json["Line"], serde_json::json!([]));
    }

    #[test]
    fn test_tpar_field_name() {
        let purchase = Purchase {
            include_in_annual_tpar: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&purchase).unwrap();
        assert_eq!(json["IncludeInAnnualTPAR"], true);
    }

    #[test]
    fn test_invalid_print_status_is_rejected() {
        let json = r#"{"Line": [], "PrintStatus": "Printed"}"#;
        assert!(serde_json::from_str::<Purchase>(json).is_err());
    }
}
