use thiserror::Error;

use crate::Key;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {key:?}, context: {context}")]
    StateNotFound { key: Key, context: String },
    #[error("Compute not found: {key:?}, context: {context}")]
    ComputeNotFound { key: Key, context: String },
}

impl Error {
    pub fn state_not_found(key: Key, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            key,
            context: context.into(),
        }
    }

    pub fn compute_not_found(key: Key, context: impl Into<String>) -> Self {
        Self::ComputeNotFound {
            key,
            context: context.into(),
        }
    }
}
