use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The path identifier is not a well-formed key. Carries the raw input for logging.
    #[error("Invalid Identifier")]
    InvalidId(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
