use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("severity must be between 1 and 5, got {0}")]
    InvalidSeverity(u8),
    #[error("unknown cost layer '{0}'")]
    UnknownLayer(String),
}
