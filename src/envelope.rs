//! Success response envelope.

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::traits::Entity;

/// A decoded success body: the entity plus the server timestamp.
///
/// On the wire the entity sits under its capitalized name, e.g.
/// `{"Purchase": {...}, "time": "..."}`, so decoding is driven by
/// [`Entity::NAME`].
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub entity: T,
    pub time: Option<DateTime<FixedOffset>>,
}

impl<T> Envelope<T> {
    /// Unwrap the entity, dropping the timestamp.
    pub fn into_entity(self) -> T {
        self.entity
    }
}

impl<'de, T: Entity> Deserialize<'de> for Envelope<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EnvelopeVisitor(PhantomData))
    }
}

struct EnvelopeVisitor<T>(PhantomData<T>);

impl<'de, T: Entity> Visitor<'de> for EnvelopeVisitor<T> {
    type Value = Envelope<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with a \"{}\" field", T::NAME)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entity: Option<T> = None;
        let mut time = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == T::NAME {
                if entity.is_some() {
                    return Err(de::Error::duplicate_field(T::NAME));
                }
                entity = Some(map.next_value()?);
            } else if key == "time" {
                time = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        let entity = entity.ok_or_else(|| de::Error::missing_field(T::NAME))?;
        Ok(Envelope { entity, time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Purchase;

    #[test]
    fn test_envelope_reads_named_entity() {
        let json = r#"{
            "Purchase": {"Id": "252", "SyncToken": "0", "PaymentType": "Cash", "Line": []},
            "time": "2015-07-24T10:33:39.11-07:00"
        }"#;

        let envelope: Envelope<Purchase> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.entity.id.as_deref(), Some("252"));
        assert_eq!(envelope.entity.sync_token.as_deref(), Some("0"));
        assert!(envelope.time.is_some());
    }

    #[test]
    fn test_envelope_ignores_unknown_keys_and_missing_time() {
        let json = r#"{"warnings": null, "Purchase": {"Id": "1", "Line": []}}"#;

        let envelope: Envelope<Purchase> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.entity.id.as_deref(), Some("1"));
        assert!(envelope.time.is_none());
    }

    #[test]
    fn test_envelope_missing_entity_is_an_error() {
        let json = r#"{"SalesReceipt": {"Id": "1"}, "time": "2015-07-24T10:33:39-07:00"}"#;

        let err = serde_json::from_str::<Envelope<Purchase>>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `Purchase`"));
    }
}
