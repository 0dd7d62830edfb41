//! # Voicemail-Core
//!
//! Decides which voicemail record changes trigger an agent notification and
//! performs that notification.
//!
//! - [`resolver`]: pure classification of a before/after record pair
//! - [`delivery`]: collaborator traits and the [`DeliveryOrchestrator`]
//! - [`service`]: [`VoicemailService`], the entry point for change-feed and
//!   transcription events
//! - [`repository`]: voicemail record storage

pub mod delivery;
pub mod error;
pub mod repository;
pub mod resolver;
pub mod service;
pub mod types;

pub use delivery::{AgentDirectory, DeliveryOrchestrator, DeliveryResult, GlobalSettingsStore, NotificationChannel};
pub use error::{DeliveryError, Result, VoicemailError};
pub use repository::{InMemoryVoicemailRepository, VoicemailRepository};
pub use resolver::{classify, classify_records, DeliverReason, IgnoreReason, Resolution};
pub use service::{ProcessOutcome, VoicemailService, UNHANDLED_RESOLUTION};
pub use types::{
    AgentEntry, ChangeEvent, ChangeEventKind, DeliveryReceipt, GlobalSettings, TranscriptionStatus, VoicemailRecord,
};
