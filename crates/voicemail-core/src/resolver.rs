//! Classification of voicemail change events
//!
//! A pure function of the transcription status before and after a write. It
//! decides whether the write is the one that must trigger delivery; the
//! delivery itself lives in [`crate::delivery`].

use crate::types::{TranscriptionStatus, VoicemailRecord};
use std::fmt;

/// Why a change qualifies for delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliverReason {
    /// IN_PROGRESS became COMPLETED
    TranscriptionCompleted,
    /// The record has no transcription status
    NoTranscription,
}

/// Why a change is ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    UnhandledResolution { status: Option<TranscriptionStatus> },
}

/// Outcome of classifying one change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Deliver(DeliverReason),
    Ignore(IgnoreReason),
}

impl Resolution {
    pub fn should_deliver(&self) -> bool {
        matches!(self, Self::Deliver(_))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deliver(DeliverReason::TranscriptionCompleted) => f.write_str("deliver (transcription completed)"),
            Self::Deliver(DeliverReason::NoTranscription) => f.write_str("deliver (no transcription)"),
            Self::Ignore(IgnoreReason::UnhandledResolution { status: Some(status) }) => {
                write!(f, "ignore (unhandled resolution, status {})", status)
            }
            Self::Ignore(IgnoreReason::UnhandledResolution { status: None }) => {
                f.write_str("ignore (unhandled resolution)")
            }
        }
    }
}

/// Classify a status transition.
///
/// `None` means the status is absent. A missing new status delivers whatever
/// the old one was.
pub fn classify(old: Option<&TranscriptionStatus>, new: Option<&TranscriptionStatus>) -> Resolution {
    match (old, new) {
        (Some(TranscriptionStatus::InProgress), Some(TranscriptionStatus::Completed)) => {
            Resolution::Deliver(DeliverReason::TranscriptionCompleted)
        }
        (_, None) => Resolution::Deliver(DeliverReason::NoTranscription),
        (_, Some(status)) => Resolution::Ignore(IgnoreReason::UnhandledResolution {
            status: Some(status.clone()),
        }),
    }
}

/// Classify a record pair. A missing old record counts as one with no status.
pub fn classify_records(old: Option<&VoicemailRecord>, new: &VoicemailRecord) -> Resolution {
    classify(
        old.and_then(|r| r.transcribe_status.as_ref()),
        new.transcribe_status.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use TranscriptionStatus::*;

    fn ignored(status: TranscriptionStatus) -> Resolution {
        Resolution::Ignore(IgnoreReason::UnhandledResolution { status: Some(status) })
    }

    #[test]
    fn test_completion_delivers() {
        assert_eq!(
            classify(Some(&InProgress), Some(&Completed)),
            Resolution::Deliver(DeliverReason::TranscriptionCompleted)
        );
    }

    #[test]
    fn test_absent_status_delivers() {
        let expected = Resolution::Deliver(DeliverReason::NoTranscription);
        assert_eq!(classify(None, None), expected);
        assert_eq!(classify(Some(&InProgress), None), expected);
        assert_eq!(classify(Some(&Completed), None), expected);
    }

    #[test]
    fn test_other_transitions_are_ignored() {
        assert_eq!(classify(Some(&Completed), Some(&Completed)), ignored(Completed));
        assert_eq!(classify(Some(&InProgress), Some(&InProgress)), ignored(InProgress));
        assert_eq!(classify(Some(&InProgress), Some(&Failed)), ignored(Failed));
        assert_eq!(classify(None, Some(&InProgress)), ignored(InProgress));
        // Completion without an observed IN_PROGRESS snapshot is not a transition.
        assert_eq!(classify(None, Some(&Completed)), ignored(Completed));
    }

    #[test]
    fn test_classify_records() {
        let old = VoicemailRecord::new("c-1", 1, "a").with_status("IN_PROGRESS");
        let new = old.clone().with_status("COMPLETED");
        assert!(classify_records(Some(&old), &new).should_deliver());
        assert!(!classify_records(None, &new).should_deliver());
        assert_eq!(
            classify_records(None, &VoicemailRecord::new("c-2", 2, "a")).to_string(),
            "deliver (no transcription)"
        );
    }
}
