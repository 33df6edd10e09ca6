use uuid::Uuid;

use crate::errors::ServiceError;

/// Parse a record identifier taken from a URL path.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::InvalidId(raw.to_string()))
}
