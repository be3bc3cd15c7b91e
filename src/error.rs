use thiserror::Error;

/// Errors produced by an entity store and the clients in front of it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
