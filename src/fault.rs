//! Fault payloads returned by the QuickBooks API on non-success statuses.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Message QuickBooks reports when a delete targets an object that is
/// already gone or inactive.
pub const OBJECT_NOT_FOUND: &str = "Object Not Found";

/// The top-level failure body.
///
/// ```json
/// {"Fault":{"Error":[{"Message":"Object Not Found","Detail":"...","code":"610","element":""}],"type":"ValidationFault"},"time":"2018-03-20T20:15:59.571-07:00"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// The fault details.
    #[serde(rename = "Fault", alias = "fault")]
    pub fault: Fault,

    /// When the server produced the fault.
    ///
    /// Authentication faults carry epoch milliseconds instead of an RFC 3339
    /// string; anything else unreadable decodes as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<DateTime<FixedOffset>>,
}

/// A fault: a category plus the individual errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fault {
    /// Individual error entries, in server order.
    #[serde(rename = "Error", alias = "error", default)]
    pub errors: Vec<FaultError>,

    /// Fault category (e.g. "ValidationFault", "AuthenticationFault").
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub fault_type: String,
}

/// A single error entry inside a fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultError {
    #[serde(rename = "Message", alias = "message", default, deserialize_with = "null_as_empty")]
    pub message: String,

    #[serde(rename = "Detail", alias = "detail", default, deserialize_with = "null_as_empty")]
    pub detail: String,

    /// Vendor error code, e.g. "610".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,

    /// Offending element name, often empty or null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub element: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_time<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let time = match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s).ok(),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|t| t.fixed_offset()),
        _ => None,
    };
    Ok(time)
}

impl Failure {
    /// The first reported error, if the list is non-empty.
    pub fn first_error(&self) -> Option<&FaultError> {
        self.fault.errors.first()
    }

    /// Message of the first reported error.
    pub fn first_message(&self) -> Option<&str> {
        self.first_error().map(|e| e.message.as_str())
    }

    /// Whether the first error is exactly [`OBJECT_NOT_FOUND`].
    ///
    /// Only the first entry is inspected.
    pub fn is_object_not_found(&self) -> bool {
        self.first_message() == Some(OBJECT_NOT_FOUND)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.fault.fault_type.is_empty() {
            "Fault"
        } else {
            self.fault.fault_type.as_str()
        };

        match self.first_error() {
            None => write!(f, "{kind} with no error details"),
            Some(err) => {
                write!(f, "{kind}: {}", err.message)?;
                if !err.detail.is_empty() {
                    write!(f, " ({})", err.detail)?;
                }
                if !err.code.is_empty() {
                    write!(f, " [code {}]", err.code)?;
                }
                let more = self.fault.errors.len() - 1;
                if more > 0 {
                    write!(f, " and {more} more")?;
                }
                Ok(())
            }
        }
    }
}
