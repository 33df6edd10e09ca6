use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use models::errors::ModelError;
use service::{auth::errors::AuthError, errors::ServiceError};
use thiserror::Error;
use tracing::{error, warn};

/// Route-level failure rendered as `{ "error": true, "message": ... }`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// No Authorization header at all.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unAuthorized User")
    }

    /// A token was sent but is malformed, badly signed or expired.
    pub fn rejected_token() -> Self {
        Self::new(StatusCode::FORBIDDEN, "unAuthorized User")
    }

    /// Authenticated, but asking for someone else's bookings.
    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden Access")
    }

    /// Store or signing fault. The cause is logged, never sent.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::InvalidId(raw) => {
                warn!(id = %raw, "invalid identifier");
                Self::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            ServiceError::Model(ModelError::Validation(msg)) => Self::new(StatusCode::BAD_REQUEST, msg.clone()),
            ServiceError::Db(_) => {
                // 驱动错误只写日志，不回传给调用方
                error!(err = %e, "store operation failed");
                Self::internal()
            }
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match &e {
            AuthError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::Expired | AuthError::InvalidToken(_) => Self::rejected_token(),
            AuthError::TokenError(_) => {
                error!(err = %e, code = e.code(), "token signing failed");
                Self::internal()
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_is_bad_request() {
        let e = JsonApiError::from(ServiceError::InvalidId("zzz".into()));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), "Invalid Identifier");
    }

    #[test]
    fn db_failure_is_server_error() {
        let e = JsonApiError::from(ServiceError::Db(
            "error returned from database: value too long for type character varying(64)".into(),
        ));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message(), "Internal Server Error");
    }

    #[test]
    fn signing_failure_hides_cause() {
        let e = JsonApiError::from(AuthError::TokenError("InvalidKeyFormat".into()));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message(), "Internal Server Error");
    }

    #[test]
    fn model_validation_message_is_unwrapped() {
        let e = JsonApiError::from(ServiceError::Model(ModelError::Validation("booking must be a JSON object, got array".into())));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), "booking must be a JSON object, got array");
    }

    #[test]
    fn bad_tokens_are_forbidden() {
        assert_eq!(JsonApiError::from(AuthError::Expired).status(), StatusCode::FORBIDDEN);
        assert_eq!(JsonApiError::from(AuthError::InvalidToken("sig".into())).status(), StatusCode::FORBIDDEN);
        assert_eq!(JsonApiError::unauthorized().status(), StatusCode::UNAUTHORIZED);
    }
}
