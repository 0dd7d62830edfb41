//! Voicemail records, change events and delivery data

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle state of a voicemail's transcription job.
/// A record with no transcription carries no status at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TranscriptionStatus {
    InProgress,
    Completed,
    Failed,
    Other(String),
}

impl TranscriptionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for TranscriptionStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETED" => Self::Completed,
            "FAILED" => Self::Failed,
            _ => Self::Other(status),
        }
    }
}

impl From<&str> for TranscriptionStatus {
    fn from(status: &str) -> Self {
        Self::from(status.to_string())
    }
}

impl From<TranscriptionStatus> for String {
    fn from(status: TranscriptionStatus) -> Self {
        match status {
            TranscriptionStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TranscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a stored voicemail
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoicemailRecord {
    pub contact_id: String,
    pub timestamp: i64,
    pub agent_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcribe_status: Option<TranscriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_message: Option<String>,
    pub should_transcribe: bool,
    pub should_encrypt: bool,
    pub save_call_recording: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_key: Option<String>,
}

impl VoicemailRecord {
    pub fn new(contact_id: impl Into<String>, timestamp: i64, agent_id: impl Into<String>) -> Self {
        Self {
            contact_id: contact_id.into(),
            timestamp,
            agent_id: agent_id.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<TranscriptionStatus>) -> Self {
        self.transcribe_status = Some(status.into());
        self
    }
}

/// Kind of change reported by the record change feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeEventKind {
    Insert,
    Modify,
    Remove,
    Other(String),
}

impl From<String> for ChangeEventKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "INSERT" => Self::Insert,
            "MODIFY" => Self::Modify,
            "REMOVE" => Self::Remove,
            _ => Self::Other(name),
        }
    }
}

impl From<ChangeEventKind> for String {
    fn from(kind: ChangeEventKind) -> Self {
        match kind {
            ChangeEventKind::Insert => "INSERT".to_string(),
            ChangeEventKind::Modify => "MODIFY".to_string(),
            ChangeEventKind::Remove => "REMOVE".to_string(),
            ChangeEventKind::Other(name) => name,
        }
    }
}

/// One entry of the record change feed: the record before and after a write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub event_name: ChangeEventKind,
    #[serde(default)]
    pub new_record: Option<VoicemailRecord>,
    #[serde(default)]
    pub old_record: Option<VoicemailRecord>,
}

impl ChangeEvent {
    pub fn modify(old: VoicemailRecord, new: VoicemailRecord) -> Self {
        Self {
            event_name: ChangeEventKind::Modify,
            new_record: Some(new),
            old_record: Some(old),
        }
    }

    pub fn insert(new: VoicemailRecord) -> Self {
        Self {
            event_name: ChangeEventKind::Insert,
            new_record: Some(new),
            old_record: None,
        }
    }
}

/// Agent as returned by the agent directory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentEntry {
    pub user_id: String,
    pub username: String,
    pub extension: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub deliver_email: bool,
    pub deliver_sms: bool,
}

/// Instance-wide delivery settings. Fields the core does not read are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    #[serde(default)]
    pub transcribe_voicemail: bool,
    #[serde(default)]
    pub encrypt_voicemail: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement returned by the notification channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    pub contact_id: String,
    pub agent_id: String,
    pub channels: Vec<String>,
}
