//! Create trait for new entities.

use async_trait::async_trait;

use crate::client::QuickbooksClient;
use crate::error::Result;
use crate::traits::Entity;

/// Create a new entity on the server.
///
/// Implement this (with an empty body) for entity types the API can create.
///
/// # Example
///
/// ```ignore
/// use qbapi::{Create, Line, PaymentType, Purchase, QuickbooksClient, ReferenceType};
///
/// let client = QuickbooksClient::from_env()?;
/// let purchase = Purchase::new(PaymentType::Cash, ReferenceType::new("35"), lines);
/// let created = purchase.create(&client).await?;
/// println!("created purchase {:?}", created.id);
/// ```
#[async_trait]
pub trait Create: Entity {
    /// Send this entity and return the server's copy.
    ///
    /// # Errors
    ///
    /// Returns an error if `Id` or `SyncToken` is already set, the request
    /// fails, or the server answers with a fault.
    async fn create(&self, client: &QuickbooksClient) -> Result<Self> {
        crate::operation::create(client, self).await
    }
}
