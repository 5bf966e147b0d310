//! Entity endpoint handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::sync::RwLock;

use crate::mock_server::state::{DeleteRejection, MockState};
use crate::{Entity, Purchase, SalesReceipt};

/// Query parameters accepted on entity endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct OperationQuery {
    pub minorversion: Option<String>,
    pub operation: Option<String>,
}

/// Body of a delete request.
#[derive(Debug, Deserialize)]
pub struct DeleteBody {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "SyncToken", default)]
    pub sync_token: String,
}

/// POST /v3/company/{realm}/{resource}
pub async fn post_entity(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((realm_id, resource)): Path<(String, String)>,
    Query(query): Query<OperationQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(rejection) = authorize(&state, &realm_id, &headers).await {
        return rejection;
    }

    if query.minorversion.is_none() {
        return fault(
            StatusCode::BAD_REQUEST,
            "ValidationFault",
            "Invalid minorversion",
            "minorversion query parameter is required",
            "2170",
        );
    }

    let delete = match query.operation.as_deref() {
        None => false,
        Some("delete") => true,
        Some(other) => {
            return fault(
                StatusCode::BAD_REQUEST,
                "ValidationFault",
                "Unsupported Operation",
                &format!("Operation {other} is not supported."),
                "500",
            )
        }
    };

    match resource.as_str() {
        r if r == Purchase::RESOURCE && delete => delete_record::<Purchase>(&state, &body).await,
        r if r == Purchase::RESOURCE => create::<Purchase>(&state, &body).await,
        r if r == SalesReceipt::RESOURCE && delete => {
            delete_record::<SalesReceipt>(&state, &body).await
        }
        r if r == SalesReceipt::RESOURCE => create::<SalesReceipt>(&state, &body).await,
        _ => fault(
            StatusCode::BAD_REQUEST,
            "ValidationFault",
            "Unsupported Operation",
            &format!("Operation No resource method found for POST, /{resource} is not supported."),
            "500",
        ),
    }
}

async fn authorize(
    state: &Arc<RwLock<MockState>>,
    realm_id: &str,
    headers: &HeaderMap,
) -> Option<Response> {
    let state = state.read().await;

    if let Some(ref token) = state.required_token {
        let expected = format!("Bearer {token}");
        let given = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        if given != Some(expected.as_str()) {
            return Some(fault(
                StatusCode::UNAUTHORIZED,
                "AUTHENTICATION",
                "message=AuthenticationFailed; errorCode=003200; statusCode=401",
                "",
                "3200",
            ));
        }
    }

    if let Some(ref realm) = state.realm_id {
        if realm != realm_id {
            return Some(fault(
                StatusCode::FORBIDDEN,
                "AuthorizationFault",
                "message=ApplicationAuthorizationFailed; errorCode=003100; statusCode=403",
                "",
                "3100",
            ));
        }
    }

    None
}

async fn create<T: Entity>(state: &Arc<RwLock<MockState>>, body: &[u8]) -> Response {
    // Decode through the typed model so invalid enum values are rejected
    let record = match serde_json::from_slice::<T>(body).and_then(serde_json::to_value) {
        Ok(record) => record,
        Err(err) => {
            return fault(
                StatusCode::BAD_REQUEST,
                "ValidationFault",
                "Request has invalid or unsupported property",
                &err.to_string(),
                "2010",
            )
        }
    };

    let stored = state.write().await.create(T::RESOURCE, record);

    let mut envelope = Map::new();
    envelope.insert(T::NAME.to_string(), stored);
    envelope.insert("time".to_string(), json!(now()));
    (StatusCode::OK, Json(Value::Object(envelope))).into_response()
}

async fn delete_record<T: Entity>(state: &Arc<RwLock<MockState>>, body: &[u8]) -> Response {
    let request: DeleteBody = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(err) => {
            return fault(
                StatusCode::BAD_REQUEST,
                "ValidationFault",
                "Request has invalid or unsupported property",
                &err.to_string(),
                "2010",
            )
        }
    };

    let result = state
        .write()
        .await
        .delete(T::RESOURCE, &request.id, &request.sync_token);

    match result {
        Ok(()) => {
            let mut envelope = Map::new();
            envelope.insert(
                T::NAME.to_string(),
                json!({"domain": "QBO", "status": "Deleted", "Id": request.id}),
            );
            envelope.insert("time".to_string(), json!(now()));
            (StatusCode::OK, Json(Value::Object(envelope))).into_response()
        }
        Err(DeleteRejection::NotFound) => fault(
            StatusCode::BAD_REQUEST,
            "ValidationFault",
            "Object Not Found",
            "Object Not Found : Something you're trying to use has been made inactive. Check the fields with accounts, invoices, items, vendors or employees.",
            "610",
        ),
        Err(DeleteRejection::Stale { current }) => fault(
            StatusCode::BAD_REQUEST,
            "ValidationFault",
            "Stale Object Error",
            &format!("Stale Object Error : SyncToken {current} is current, request used a stale one."),
            "5010",
        ),
    }
}

fn now() -> String {
    Utc::now().fixed_offset().to_rfc3339()
}

/// A QuickBooks-shaped fault response.
pub fn fault(
    status: StatusCode,
    fault_type: &str,
    message: &str,
    detail: &str,
    code: &str,
) -> Response {
    (
        status,
        Json(json!({
            "Fault": {
                "Error": [{
                    "Message": message,
                    "Detail": detail,
                    "code": code,
                    "element": ""
                }],
                "type": fault_type
            },
            "time": now()
        })),
    )
        .into_response()
}
