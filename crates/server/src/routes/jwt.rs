use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Sign the posted identity payload into a 12 hour bearer token.
#[utoipa::path(
    post, path = "/jwt", tag = "auth",
    request_body = crate::openapi::TokenRequest,
    responses(
        (status = 200, description = "Issued", body = crate::openapi::TokenResponseDoc),
        (status = 400, description = "Payload is not a JSON object", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn issue(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TokenResponse>, JsonApiError> {
    let Json(payload) = payload?;
    let has_email = payload.get("email").is_some();
    let token = state.tokens.issue(payload)?;
    info!(has_email, "token_issued");
    Ok(Json(TokenResponse { token }))
}
