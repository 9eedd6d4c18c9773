use thiserror::Error;

/// The only message a user ever sees when loading fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Why loading the dataset failed. Only logs see the difference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server returned {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("malformed dataset: {0}")]
    Decode(String),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_collapses_to_one_message() {
        let errors = [
            LoadError::Request("connection refused".to_string()),
            LoadError::Status {
                status: 503,
                status_text: "Service Unavailable".to_string(),
            },
            LoadError::Decode("expected value at line 1 column 1".to_string()),
        ];

        for err in &errors {
            assert_eq!(err.user_message(), LOAD_ERROR_MESSAGE);
        }
        assert!(errors[1].to_string().contains("503"));
    }
}
