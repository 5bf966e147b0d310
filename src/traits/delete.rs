//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::QuickbooksClient;
use crate::error::{QuickbooksError, Result};
use crate::traits::Entity;

/// Delete an existing entity.
///
/// Deleting an object the server reports as `Object Not Found` succeeds,
/// so repeated deletes are harmless.
///
/// # Example
///
/// ```ignore
/// use qbapi::{Delete, Purchase, QuickbooksClient};
///
/// let client = QuickbooksClient::from_env()?;
/// Purchase::delete(&client, "252", "0").await?;
///
/// // Or from a record returned by create
/// created.remove(&client).await?;
/// ```
#[async_trait]
pub trait Delete: Entity {
    /// Delete the entity with this id and sync token.
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is empty, the request fails, or
    /// the server answers with any fault other than `Object Not Found`.
    async fn delete(client: &QuickbooksClient, id: &str, sync_token: &str) -> Result<()> {
        crate::operation::delete::<Self>(client, id, sync_token).await
    }

    /// Delete this record using its own `Id` and `SyncToken`.
    ///
    /// # Errors
    ///
    /// Returns [`QuickbooksError::MissingField`] if the record has not been
    /// created yet, otherwise the same errors as [`Delete::delete`].
    async fn remove(&self, client: &QuickbooksClient) -> Result<()> {
        let id = self.id().ok_or(QuickbooksError::MissingField("Id"))?;
        let sync_token = self
            .sync_token()
            .ok_or(QuickbooksError::MissingField("SyncToken"))?;
        Self::delete(client, id, sync_token).await
    }
}
