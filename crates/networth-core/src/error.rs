use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown range: {0}")]
    UnknownRange(String),
    #[error("Flow not found: {0}")]
    FlowNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
}
