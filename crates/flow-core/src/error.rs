//! Error types for flow construction

use thiserror::Error;

/// Result type for flow-core operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors raised while building or validating a contact flow
#[derive(Debug, Error)]
pub enum FlowError {
    /// The fallback queue has no match in the queue directory
    #[error("{diagnostic}")]
    QueueNotFound {
        name: String,
        user_message: String,
        diagnostic: String,
    },

    /// A required build parameter was not supplied
    #[error("Missing required build parameter: {name}")]
    MissingParameter { name: String },

    /// A build parameter was supplied but is unusable
    #[error("Invalid build parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The queue directory could not be listed
    #[error("Queue directory error: {message}")]
    Directory { message: String },

    #[error("Duplicate module id {id}")]
    DuplicateModule { id: String },

    #[error("Start module {start} is not part of the flow")]
    MissingStart { start: String },

    #[error("Module {module} branches to unknown module {target}")]
    DanglingTransition { module: String, target: String },

    #[error("Module {module} of type {module_type} is not allowed in a {kind} flow")]
    IllegalModule {
        module: String,
        module_type: String,
        kind: String,
    },

    #[error("Flow type {kind} does not match metadata type {descriptor_kind}")]
    KindMismatch { kind: String, descriptor_kind: String },

    #[error("Flow document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FlowError {
    pub fn queue_not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::QueueNotFound {
            user_message: format!(
                "The queue with the name \"{}\" cannot be found. Please check to see if the queue exists in your Amazon Connect instance",
                name
            ),
            diagnostic: format!("Fallback queue when building contact flow: {} cannot be found", name),
            name,
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }

    /// Message suitable for showing to the person who requested the build
    pub fn user_message(&self) -> String {
        match self {
            Self::QueueNotFound { user_message, .. } => user_message.clone(),
            other => other.to_string(),
        }
    }

    /// Short machine-friendly error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::QueueNotFound { .. } => "ConnectQueueNotFound",
            Self::MissingParameter { .. } => "MissingParameter",
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::Directory { .. } => "QueueDirectoryError",
            Self::DuplicateModule { .. }
            | Self::MissingStart { .. }
            | Self::DanglingTransition { .. }
            | Self::IllegalModule { .. }
            | Self::KindMismatch { .. } => "InvalidFlow",
            Self::Serialization(_) => "SerializationError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_not_found_messages() {
        let err = FlowError::queue_not_found("Sales");
        assert_eq!(err.code(), "ConnectQueueNotFound");
        assert_eq!(
            err.user_message(),
            "The queue with the name \"Sales\" cannot be found. Please check to see if the queue exists in your Amazon Connect instance"
        );
        assert_eq!(err.to_string(), "Fallback queue when building contact flow: Sales cannot be found");
    }
}
