//! Error types for voicemail processing

use thiserror::Error;

/// Result type for voicemail-core operations
pub type Result<T> = std::result::Result<T, VoicemailError>;

/// Failures raised by a delivery collaborator. They are propagated unchanged;
/// whoever drives the change event decides whether to retry it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Failed to load global settings: {message}")]
    Settings { message: String },

    #[error("Agent lookup for {agent_id} failed: {message}")]
    AgentLookup { agent_id: String, message: String },

    #[error("No agent with user id {agent_id}")]
    AgentNotFound { agent_id: String },

    #[error("Notification delivery failed: {message}")]
    Notification { message: String },
}

impl DeliveryError {
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    pub fn agent_lookup(agent_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AgentLookup {
            agent_id: agent_id.into(),
            message: message.into(),
        }
    }

    pub fn agent_not_found(agent_id: impl Into<String>) -> Self {
        Self::AgentNotFound {
            agent_id: agent_id.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`crate::VoicemailService`]
#[derive(Debug, Error)]
pub enum VoicemailError {
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// A transcription event could not be interpreted
    #[error("Malformed transcription event {job_name}: {reason}")]
    TranscriptionEvent { job_name: String, reason: String },

    #[error("Voicemail repository error: {message}")]
    Repository { message: String },
}

impl VoicemailError {
    pub fn transcription_event(job_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TranscriptionEvent {
            job_name: job_name.into(),
            reason: reason.into(),
        }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }
}
