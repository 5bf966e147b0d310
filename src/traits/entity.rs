//! Entity trait describing a QuickBooks resource.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A QuickBooks entity that can be sent to and decoded from the API.
///
/// The associated constants drive both the request path and the success
/// envelope, so one executor serves every entity type.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// Resource path segment, e.g. `"purchase"`.
    const RESOURCE: &'static str;

    /// Capitalized name the entity is wrapped under in responses,
    /// e.g. `"Purchase"`.
    const NAME: &'static str;

    /// Server-assigned identifier, empty until created.
    fn id(&self) -> Option<&str>;

    /// Optimistic-concurrency version stamp, empty until created.
    fn sync_token(&self) -> Option<&str>;
}
