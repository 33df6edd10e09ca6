use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Extension, Json,
};
use models::{booking, document};
use serde::Deserialize;
use serde_json::Value;
use service::{
    auth::Claims,
    booking::domain::{DeleteAck, InsertAck, UpdateAck},
    errors::ServiceError,
    ids::parse_id,
};
use tracing::{info, warn};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct BookingQuery {
    /// Only bookings made with this email. Must equal the token's `email` claim.
    pub email: Option<String>,
}

#[utoipa::path(
    get, path = "/bookings", tag = "bookings",
    params(BookingQuery),
    responses(
        (status = 200, description = "Matching bookings", body = [crate::openapi::BookingDoc]),
        (status = 401, description = "Missing Authorization header", body = crate::openapi::ErrorBodyDoc),
        (status = 403, description = "Invalid token or email mismatch", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Query(q): Query<BookingQuery>,
) -> Result<Json<Vec<Value>>, JsonApiError> {
    let email = q.email.as_deref();
    if !claims.permits_email(email) {
        warn!(requested = ?email, claimed = ?claims.email(), "booking list forbidden");
        return Err(JsonApiError::forbidden());
    }
    let bookings = state.bookings.list(email).await?;
    info!(count = bookings.len(), "list bookings");
    Ok(Json(bookings.iter().map(booking::Model::to_document).collect()))
}

/// Store the posted document as-is. No schema or duplicate checks.
#[utoipa::path(
    post, path = "/bookings", tag = "bookings",
    request_body = crate::openapi::BookingDoc,
    responses(
        (status = 200, description = "Inserted", body = crate::openapi::InsertAckDoc),
        (status = 400, description = "Body is not a JSON object", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InsertAck>, JsonApiError> {
    let Json(payload) = payload?;
    let fields = document::into_object(payload, "booking").map_err(ServiceError::from)?;
    let ack = state.bookings.create(fields).await?;
    info!(booking_id = %ack.inserted_id, "created booking");
    Ok(Json(ack))
}

#[utoipa::path(
    delete, path = "/bookings/{id}", tag = "bookings",
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "deletedCount is 0 when nothing matched", body = crate::openapi::DeleteAckDoc),
        (status = 400, description = "Invalid Identifier", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, JsonApiError> {
    let id = parse_id(&id)?;
    let ack = state.bookings.delete(id).await?;
    info!(booking_id = %id, deleted = ack.deleted_count, "deleted booking");
    Ok(Json(ack))
}

/// Apply the payload's `status` and ignore every other key.
#[utoipa::path(
    patch, path = "/bookings/{id}", tag = "bookings",
    params(("id" = String, Path, description = "Booking identifier")),
    request_body = crate::openapi::StatusUpdateDoc,
    responses(
        (status = 200, description = "matchedCount is 0 when nothing matched", body = crate::openapi::UpdateAckDoc),
        (status = 400, description = "Invalid Identifier", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdateAck>, JsonApiError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    // 缺省 status 时写入 null
    let status = payload.get("status").cloned().unwrap_or(Value::Null);
    let ack = state.bookings.update_status(id, status).await?;
    info!(booking_id = %id, matched = ack.matched_count, modified = ack.modified_count, "updated booking status");
    Ok(Json(ack))
}
