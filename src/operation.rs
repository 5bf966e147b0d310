//! Generic create and delete executors shared by every entity type.
//!
//! Each call is one POST whose body is read in full before returning.
//! Nothing is retried.

use reqwest::StatusCode;
use serde::Serialize;

use crate::client::QuickbooksClient;
use crate::envelope::Envelope;
use crate::error::{QuickbooksError, Result};
use crate::fault::Failure;
use crate::traits::Entity;

/// Body of a delete request: identity only, no other fields.
#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    #[serde(rename = "Id")]
    id: &'a str,
    #[serde(rename = "SyncToken")]
    sync_token: &'a str,
}

/// Create `entity` and return the server-populated copy.
///
/// Posts to `{endpoint}/v3/company/{realm}/{T::RESOURCE}?minorversion={v}`.
/// A 200 is decoded as an [`Envelope`]; any other status is decoded as a
/// [`Failure`] and returned as [`QuickbooksError::Fault`].
///
/// # Errors
///
/// - [`QuickbooksError::InvalidEntity`] if `Id` or `SyncToken` is already set
/// - [`QuickbooksError::Serialize`] if the entity cannot be encoded
/// - [`QuickbooksError::HttpError`] on transport failure
/// - [`QuickbooksError::Fault`] on a non-200 status
/// - [`QuickbooksError::ParseError`] if either body cannot be decoded
#[tracing::instrument(skip(client, entity), fields(resource = T::RESOURCE))]
pub async fn create<T: Entity>(client: &QuickbooksClient, entity: &T) -> Result<T> {
    if is_set(entity.id()) {
        return Err(QuickbooksError::InvalidEntity(format!(
            "{} Id must be empty on create",
            T::NAME
        )));
    }
    if is_set(entity.sync_token()) {
        return Err(QuickbooksError::InvalidEntity(format!(
            "{} SyncToken must be empty on create",
            T::NAME
        )));
    }

    let url = client.resource_url(T::RESOURCE, false)?;
    let body = serde_json::to_vec(entity).map_err(QuickbooksError::Serialize)?;

    let response = client.post(url, body).await?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(QuickbooksError::HttpError)?;

    if status != StatusCode::OK {
        return Err(fault(status, &bytes));
    }

    let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
    tracing::debug!(id = ?envelope.entity.id(), time = ?envelope.time, "created");
    Ok(envelope.into_entity())
}

/// Delete the entity of type `T` identified by `id` and `sync_token`.
///
/// Posts `{"Id", "SyncToken"}` to the resource path with
/// `operation=delete`. A 400 whose first error message is exactly
/// `Object Not Found` counts as success: the object is already gone.
///
/// # Errors
///
/// - [`QuickbooksError::MissingField`] if `id` or `sync_token` is empty
/// - [`QuickbooksError::HttpError`] on transport failure
/// - [`QuickbooksError::Fault`] on any other non-200 status
/// - [`QuickbooksError::ParseError`] if a fault body cannot be decoded
#[tracing::instrument(skip(client), fields(resource = T::RESOURCE))]
pub async fn delete<T: Entity>(
    client: &QuickbooksClient,
    id: &str,
    sync_token: &str,
) -> Result<()> {
    if id.is_empty() {
        return Err(QuickbooksError::MissingField("Id"));
    }
    if sync_token.is_empty() {
        return Err(QuickbooksError::MissingField("SyncToken"));
    }

    let url = client.resource_url(T::RESOURCE, true)?;
    let body = serde_json::to_vec(&DeleteRequest { id, sync_token })
        .map_err(QuickbooksError::Serialize)?;

    let response = client.post(url, body).await?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(QuickbooksError::HttpError)?;

    match status {
        StatusCode::OK => Ok(()),
        StatusCode::BAD_REQUEST => {
            let failure: Failure = serde_json::from_slice(&bytes)?;
            if failure.is_object_not_found() {
                // Already deleted or inactive; QuickBooks reports this as a
                // validation fault instead of a no-op.
                tracing::debug!(id, "object not found, treating delete as done");
                return Ok(());
            }
            Err(QuickbooksError::Fault {
                status: status.as_u16(),
                failure,
            })
        }
        _ => Err(fault(status, &bytes)),
    }
}

/// Decode a fault body, surfacing decode failures unwrapped.
fn fault(status: StatusCode, body: &[u8]) -> QuickbooksError {
    match serde_json::from_slice::<Failure>(body) {
        Ok(failure) => QuickbooksError::Fault {
            status: status.as_u16(),
            failure,
        },
        Err(err) => QuickbooksError::ParseError(err),
    }
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
