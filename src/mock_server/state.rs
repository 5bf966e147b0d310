//! Mock server state management.
//!
//! Provides the in-memory data store for the mock QuickBooks API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::Entity;

/// Why a delete did not remove anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRejection {
    /// No record with that id.
    NotFound,
    /// The caller's sync token is not the current one.
    Stale { current: String },
}

/// Shared state for the mock server.
///
/// Records are kept as JSON, grouped by resource name (e.g. `purchase`) and
/// keyed by `Id`. It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Records by resource, then by id.
    pub records: HashMap<String, BTreeMap<String, Value>>,

    /// If set, requests for any other realm are rejected.
    pub realm_id: Option<String>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Only accept requests for this realm.
    pub fn with_realm(mut self, realm_id: &str) -> Self {
        self.realm_id = Some(realm_id.to_string());
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Seed an existing record. Missing `Id`/`SyncToken` are assigned.
    ///
    /// # Panics
    ///
    /// Panics if the entity does not serialize to a JSON object.
    pub fn with_record<T: Entity>(mut self, entity: &T) -> Self {
        let value = serde_json::to_value(entity).expect("entity serializes");
        self.store(T::RESOURCE, value);
        self
    }

    /// Store a newly created record and return it with server fields set.
    pub fn create(&mut self, resource: &str, mut record: Value) -> Value {
        if let Some(obj) = record.as_object_mut() {
            obj.remove("Id");
            obj.remove("SyncToken");
            let now = Utc::now().fixed_offset().to_rfc3339();
            obj.insert(
                "MetaData".to_string(),
                json!({"CreateTime": now, "LastUpdatedTime": now}),
            );
            obj.insert("domain".to_string(), json!("QBO"));
        }
        self.store(resource, record)
    }

    fn store(&mut self, resource: &str, mut record: Value) -> Value {
        if let Some(obj) = record.as_object_mut() {
            let id = match obj.get("Id").and_then(Value::as_str) {
                Some(id) => id.to_string(),
                None => self.fresh_id(resource),
            };
            obj.insert("Id".to_string(), json!(id));
            obj.entry("SyncToken").or_insert_with(|| json!("0"));

            self.records
                .entry(resource.to_string())
                .or_default()
                .insert(id, record.clone());
        }
        record
    }

    /// Next sequential id not already taken by a record of `resource`.
    fn fresh_id(&mut self, resource: &str) -> String {
        loop {
            self.next_id += 1;
            let id = self.next_id.to_string();
            let taken = self
                .records
                .get(resource)
                .is_some_and(|records| records.contains_key(&id));
            if !taken {
                return id;
            }
        }
    }

    /// Get a record by resource and id, decoded as `T`.
    pub fn get<T: Entity>(&self, id: &str) -> Option<T> {
        self.records
            .get(T::RESOURCE)
            .and_then(|r| r.get(id))
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Number of stored records for a resource.
    pub fn count(&self, resource: &str) -> usize {
        self.records.get(resource).map_or(0, BTreeMap::len)
    }

    /// Remove a record if the sync token matches.
    pub fn delete(
        &mut self,
        resource: &str,
        id: &str,
        sync_token: &str,
    ) -> Result<(), DeleteRejection> {
        let records = self
            .records
            .get_mut(resource)
            .ok_or(DeleteRejection::NotFound)?;
        let current = records
            .get(id)
            .and_then(|r| r.get("SyncToken"))
            .and_then(Value::as_str)
            .ok_or(DeleteRejection::NotFound)?
            .to_string();

        if current != sync_token {
            return Err(DeleteRejection::Stale { current });
        }

        records.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PaymentType, Purchase, ReferenceType, SalesReceipt};

    fn sample_purchase() -> Purchase {
        Purchase::new(PaymentType::Cash, ReferenceType::new("35"), vec![])
    }

    #[test]
    fn test_create_assigns_server_fields() {
        let mut state = MockState::new();
        let body = serde_json::to_value(sample_purchase()).unwrap();

        let first = state.create("purchase", body.clone());
        let second = state.create("purchase", body);

        assert_eq!(first["Id"], "1");
        assert_eq!(second["Id"], "2");
        assert_eq!(first["SyncToken"], "0");
        assert!(first["MetaData"]["CreateTime"].is_string());
        assert_eq!(state.count("purchase"), 2);
    }

    #[test]
    fn test_seeded_record_keeps_identity() {
        let mut purchase = sample_purchase();
        purchase.id = Some("100".to_string());
        purchase.sync_token = Some("2".to_string());

        let state = MockState::new().with_record(&purchase);
        let stored: Purchase = state.get("100").unwrap();

        assert_eq!(stored.sync_token.as_deref(), Some("2"));
        assert!(state.get::<SalesReceipt>("100").is_none());
    }

    #[test]
    fn test_create_skips_seeded_ids() {
        let mut seeded = sample_purchase();
        seeded.id = Some("2".to_string());
        seeded.sync_token = Some("5".to_string());

        let mut state = MockState::new().with_record(&seeded);
        let body = serde_json::to_value(sample_purchase()).unwrap();

        assert_eq!(state.create("purchase", body.clone())["Id"], "1");
        assert_eq!(state.create("purchase", body.clone())["Id"], "3");
        assert_eq!(state.count("purchase"), 3);

        let kept: Purchase = state.get("2").unwrap();
        assert_eq!(kept.sync_token.as_deref(), Some("5"));

        // The counter is shared across resources
        let receipt = serde_json::to_value(SalesReceipt::default()).unwrap();
        assert_eq!(state.create("salesreceipt", receipt)["Id"], "4");
    }

    #[test]
    fn test_delete_checks_sync_token() {
        let mut state = MockState::new().with_record(&sample_purchase());

        assert_eq!(
            state.delete("purchase", "1", "7"),
            Err(DeleteRejection::Stale {
                current: "0".to_string()
            })
        );
        assert_eq!(state.delete("purchase", "1", "0"), Ok(()));
        assert_eq!(
            state.delete("purchase", "1", "0"),
            Err(DeleteRejection::NotFound)
        );
        assert_eq!(
            state.delete("salesreceipt", "1", "0"),
            Err(DeleteRejection::NotFound)
        );
    }
}
