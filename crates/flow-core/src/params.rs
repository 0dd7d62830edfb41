//! Caller-supplied build parameters

use crate::duration::DurationUnit;
use crate::error::{FlowError, Result};
use serde::{Deserialize, Serialize};

/// Raw build input as received from the caller; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub welcome_message: Option<String>,
    pub default_error_message: Option<String>,
    pub max_voicemail_duration: Option<u32>,
    pub duration_type: Option<DurationUnit>,
    pub fallback_queue_name: Option<String>,
    pub error_loop_count: Option<u32>,
}

/// Validated build parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildParameters {
    pub welcome_message: String,
    pub default_error_message: String,
    /// Positive, in `duration_unit`
    pub max_voicemail_duration: u32,
    pub duration_unit: DurationUnit,
    pub fallback_queue_name: String,
    pub error_loop_count: u32,
}

impl BuildRequest {
    /// Check that every parameter is present and usable.
    ///
    /// Fields are checked in declaration order and the first problem is reported.
    pub fn validate(self) -> Result<BuildParameters> {
        let welcome_message = required_text(self.welcome_message, "welcomeMessage")?;
        let default_error_message = required_text(self.default_error_message, "defaultErrorMessage")?;

        let max_voicemail_duration = self
            .max_voicemail_duration
            .ok_or_else(|| FlowError::missing("maxVoicemailDuration"))?;
        if max_voicemail_duration == 0 {
            return Err(FlowError::invalid("maxVoicemailDuration", "must be a positive integer"));
        }

        let duration_unit = self
            .duration_type
            .ok_or_else(|| FlowError::missing("durationType"))?;
        let fallback_queue_name = required_text(self.fallback_queue_name, "fallbackQueueName")?;
        let error_loop_count = self
            .error_loop_count
            .ok_or_else(|| FlowError::missing("errorLoopCount"))?;

        Ok(BuildParameters {
            welcome_message,
            default_error_message,
            max_voicemail_duration,
            duration_unit,
            fallback_queue_name,
            error_loop_count,
        })
    }
}

fn required_text(value: Option<String>, name: &str) -> Result<String> {
    match value {
        None => Err(FlowError::missing(name)),
        Some(text) => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> BuildRequest {
        serde_json::from_str(
            r#"{
                "welcomeMessage": "Thanks for calling.",
                "defaultErrorMessage": "Sorry, something went wrong.",
                "maxVoicemailDuration": 2,
                "durationType": "MINUTE",
                "fallbackQueueName": "BasicQueue",
                "errorLoopCount": 3
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_complete_request() {
        let params = complete().validate().unwrap();
        assert_eq!(params.max_voicemail_duration, 2);
        assert_eq!(params.duration_unit, DurationUnit::Minute);
        assert_eq!(params.fallback_queue_name, "BasicQueue");
        assert_eq!(params.error_loop_count, 3);
    }

    #[test]
    fn test_missing_parameter_is_named() {
        let mut request = complete();
        request.fallback_queue_name = None;
        let err = request.validate().unwrap_err();
        assert!(matches!(err, FlowError::MissingParameter { ref name } if name == "fallbackQueueName"));
    }

    #[test]
    fn test_first_missing_parameter_reported() {
        let err = BuildRequest::default().validate().unwrap_err();
        assert!(matches!(err, FlowError::MissingParameter { ref name } if name == "welcomeMessage"));
    }

    #[test]
    fn test_empty_text_is_allowed() {
        let mut request = complete();
        request.welcome_message = Some(String::new());
        request.default_error_message = Some("   ".into());
        let params = request.validate().unwrap();
        assert_eq!(params.welcome_message, "");
        assert_eq!(params.default_error_message, "   ");
    }

    #[test]
    fn test_zero_loop_count_is_allowed() {
        let mut request = complete();
        request.error_loop_count = Some(0);
        assert_eq!(request.validate().unwrap().error_loop_count, 0);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut request = complete();
        request.max_voicemail_duration = Some(0);
        assert!(matches!(request.validate(), Err(FlowError::InvalidParameter { .. })));
    }
}
