//! Entry points for change-feed and transcription events

use crate::delivery::DeliveryOrchestrator;
use crate::error::{Result, VoicemailError};
use crate::repository::VoicemailRepository;
use crate::resolver::{classify_records, IgnoreReason, Resolution};
use crate::types::{ChangeEvent, DeliveryReceipt, TranscriptionStatus, VoicemailRecord};
use std::sync::Arc;
use tracing::{debug, info, Instrument};
use vmconnect_infra_common::LogContext;

/// Message reported for change events that do not trigger delivery
pub const UNHANDLED_RESOLUTION: &str = "Unhandled Resolution";

/// Result of processing one change event. Ignored events are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Delivered(DeliveryReceipt),
    Unhandled {
        message: &'static str,
        status: Option<TranscriptionStatus>,
    },
}

impl ProcessOutcome {
    fn unhandled(status: Option<TranscriptionStatus>) -> Self {
        Self::Unhandled {
            message: UNHANDLED_RESOLUTION,
            status,
        }
    }
}

/// Reacts to voicemail record changes and transcription job updates
#[derive(Clone)]
pub struct VoicemailService {
    orchestrator: DeliveryOrchestrator,
    repository: Arc<dyn VoicemailRepository>,
}

impl VoicemailService {
    pub fn new(orchestrator: DeliveryOrchestrator, repository: Arc<dyn VoicemailRepository>) -> Self {
        Self {
            orchestrator,
            repository,
        }
    }

    /// Classify a change event and deliver the voicemail when it qualifies.
    ///
    /// Events without a new record (removals) are never delivered.
    pub async fn process_change_event(&self, event: &ChangeEvent) -> Result<ProcessOutcome> {
        let Some(new) = event.new_record.as_ref() else {
            debug!(event = ?event.event_name, "Change event has no new record");
            return Ok(ProcessOutcome::unhandled(None));
        };

        let ctx = LogContext::with_operation("voicemail-core", "process_change_event")
            .with_field("contact_id", new.contact_id.as_str())
            .with_field("event", String::from(event.event_name.clone()));

        self.resolve_and_deliver(event, new).instrument(ctx.span()).await
    }

    async fn resolve_and_deliver(&self, event: &ChangeEvent, new: &VoicemailRecord) -> Result<ProcessOutcome> {
        let resolution = classify_records(event.old_record.as_ref(), new);
        debug!(%resolution, "Classified change event");

        match resolution {
            Resolution::Deliver(_) => {
                let receipt = self.orchestrator.deliver(new).await?;
                Ok(ProcessOutcome::Delivered(receipt))
            }
            Resolution::Ignore(IgnoreReason::UnhandledResolution { status }) => {
                info!(status = ?status, "{}", UNHANDLED_RESOLUTION);
                Ok(ProcessOutcome::unhandled(status))
            }
        }
    }

    /// Record the status of a transcription job named `{contactId}_{timestamp}`.
    pub async fn update_transcript_status(&self, job_name: &str, status: TranscriptionStatus) -> Result<()> {
        let (contact_id, timestamp) = parse_job_name(job_name)?;
        debug!(contact_id, timestamp, %status, "Updating transcription status");
        self.repository
            .update_transcription_status(contact_id, timestamp, status)
            .await
    }
}

/// Split a transcription job name into contact id and timestamp.
/// Segments after the timestamp are ignored.
fn parse_job_name(job_name: &str) -> Result<(&str, i64)> {
    let mut parts = job_name.split('_');
    let contact_id = parts
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| VoicemailError::transcription_event(job_name, "missing contact id"))?;
    let timestamp = parts
        .next()
        .ok_or_else(|| VoicemailError::transcription_event(job_name, "missing timestamp"))?
        .parse::<i64>()
        .map_err(|e| VoicemailError::transcription_event(job_name, format!("invalid timestamp: {}", e)))?;
    Ok((contact_id, timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_job_name() {
        assert_eq!(parse_job_name("c-1_1589312374000").unwrap(), ("c-1", 1589312374000));
        assert_eq!(parse_job_name("c-1_42_retry").unwrap(), ("c-1", 42));
    }

    #[test]
    fn test_malformed_job_names() {
        for name in ["", "c-1", "_42", "c-1_", "c-1_abc"] {
            let err = parse_job_name(name).unwrap_err();
            assert!(
                matches!(err, VoicemailError::TranscriptionEvent { ref job_name, .. } if job_name == name),
                "{:?} should be rejected",
                name
            );
        }
    }
}
