use thiserror::Error;

/// Failures reported by a backing store.
///
/// `Display` is what ends up in the form's error banner, so `Rejected` renders
/// the store's own message untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store answered and refused the request (constraint violation,
    /// bad input, permission...)
    #[error("{message}")]
    Rejected {
        message: String,
        code: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn rejected(message: impl Into<String>) -> Self {
        StoreError::Rejected {
            message: message.into(),
            code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_store_message_verbatim() {
        let error = StoreError::Rejected {
            message: "constraint violation".to_string(),
            code: Some("23503".to_string()),
        };
        assert_eq!(error.to_string(), "constraint violation");
    }

    #[test]
    fn test_transport_errors_are_prefixed() {
        assert_eq!(
            StoreError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
