use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Route middleware: verify `Authorization: Bearer <token>` and expose the decoded
/// [`service::auth::Claims`] as a request extension.
///
/// A missing header is 401; a token that is absent, invalid or expired is 403.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();

    let Some(authz) = req.headers().get(header::AUTHORIZATION) else {
        warn!(path = %path, "missing Authorization header");
        return Err(JsonApiError::unauthorized());
    };

    // 取空格分隔的第二段作为 token，通常即 "Bearer <token>"
    let token = authz
        .to_str()
        .ok()
        .and_then(|h| h.split(' ').nth(1))
        .unwrap_or_default()
        .to_string();

    match state.tokens.verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %path, err = %e, code = e.code(), "token validation failed");
            Err(e.into())
        }
    }
}
