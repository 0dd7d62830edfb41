//! "VM-Agent": hold the caller while the agent is unavailable, then record a
//! voicemail by streaming the caller's audio until input or timeout.

use super::TemplateInputs;
use crate::error::Result;
use crate::model::{BranchCondition::*, Flow, FlowDescriptor, FlowKind, Module, ModuleType, Parameter};
use serde_json::json;

pub const FLOW_NAME: &str = "VM-Agent";
pub const FLOW_DESCRIPTION: &str = "Customer queue flow to leave a message for agent";

pub const AGENT_NAME_SSML: &str =
    "<speak><prosody rate=\"slow\"> $.Attributes.agentName </prosody> </speak>";
pub const NOT_AVAILABLE_TEXT: &str = "Is not available.";
pub const CONNECTING_SSML: &str = "<speak>Thank you for calling. Please wait while we connect you to <prosody rate=\"slow\"> $.Attributes.agentName </prosody> </speak>";
pub const PAUSE_SSML: &str = "<speak><break time=\"3s\"/></speak>";
pub const BEEP_PROMPT: &str = "Beep.wav";

pub mod ids {
    pub const SET_LOGGING: &str = "43786425-989f-40cf-bc6a-abe43297f2cd";
    pub const CHECK_AVAILABLE: &str = "f0d6b7b9-3889-4735-b8e4-4a2a9f11dd1e";
    pub const UNAVAILABLE_LOOP: &str = "75df61cb-e078-4a7b-ba95-8bdfb073a5f6";
    pub const AGENT_NAME_PROMPT: &str = "3cd76775-9c08-4683-9d20-9bea0ff75033";
    pub const NOT_AVAILABLE_PROMPT: &str = "5bc7743e-0a8a-478e-b1e8-444dc822eaf5";
    pub const CONNECTING_LOOP: &str = "062355a9-7ef1-4a58-822f-2e96caa1c7bb";
    pub const LEAVE_VOICEMAIL_PROMPT: &str = "3895ed1e-4939-4731-832a-7f8f16c4fcad";
    pub const BEEP: &str = "15612b29-5f95-4e1a-940b-5a4005edad5d";
    pub const START_STREAMING: &str = "3d5fbe06-a997-4f91-ae04-bfda790c01a4";
    pub const MARK_STREAMING_FAILED: &str = "513299ca-5e44-4141-a9ba-d9508fcea48f";
    pub const WAIT_FOR_INPUT: &str = "e74b1dbe-ff92-46c7-947c-a78cb031763e";
    pub const STOP_STREAMING: &str = "95a26764-3940-450c-9918-7a2b666c0dda";
    pub const DISCONNECT: &str = "1ad1a458-0933-4f32-bf44-56fbc7d130d5";
}

fn tts_audio(texts: &[(&str, &str)]) -> serde_json::Value {
    texts
        .iter()
        .map(|(tts, tts_type)| json!({ "tts": tts, "useTts": true, "ttsType": tts_type, "type": "Text" }))
        .collect()
}

pub fn customer_queue_flow(inputs: &TemplateInputs<'_>) -> Result<Flow> {
    use ids::*;

    let timeout = inputs.duration.canonical_seconds.to_string();
    let seconds_unit = json!({ "display": "Seconds", "value": "sec" });

    let modules = vec![
        Module::builder(SET_LOGGING, ModuleType::SetLoggingBehavior)
            .branch(Success, CHECK_AVAILABLE)
            .param("LoggingBehavior", inputs.logging_behavior)
            .position(201, 167)
            .build(),
        Module::builder(CHECK_AVAILABLE, ModuleType::CheckAttribute)
            .evaluate("Equals", "true", CONNECTING_LOOP)
            .branch(NoMatch, UNAVAILABLE_LOOP)
            .param("Attribute", "available")
            .param("Namespace", "User Defined")
            .position(448, 215)
            .build(),
        Module::builder(UNAVAILABLE_LOOP, ModuleType::LoopPrompts)
            .branch(Timeout, AGENT_NAME_PROMPT)
            .branch(Error, AGENT_NAME_PROMPT)
            .keyed_param("Text", "text", ",")
            .param("InterruptSeconds", 1i64)
            .position(731, 395)
            .metadata("audio", tts_audio(&[(",", "text")]))
            .metadata("timeoutUnit", seconds_unit.clone())
            .build(),
        Module::builder(AGENT_NAME_PROMPT, ModuleType::PlayPrompt)
            .branch(Success, NOT_AVAILABLE_PROMPT)
            .param("Text", AGENT_NAME_SSML)
            .param("TextToSpeechType", "ssml")
            .position(971, 394)
            .build(),
        Module::builder(NOT_AVAILABLE_PROMPT, ModuleType::PlayPrompt)
            .branch(Success, LEAVE_VOICEMAIL_PROMPT)
            .param("Text", NOT_AVAILABLE_TEXT)
            .param("TextToSpeechType", "text")
            .position(1226, 394)
            .build(),
        Module::builder(CONNECTING_LOOP, ModuleType::LoopPrompts)
            .branch(Timeout, LEAVE_VOICEMAIL_PROMPT)
            .branch(Error, LEAVE_VOICEMAIL_PROMPT)
            .keyed_param("Text", "ssml", CONNECTING_SSML)
            .keyed_param("Text", "ssml", PAUSE_SSML)
            .param("InterruptSeconds", 20i64)
            .position(920, 153)
            .metadata("audio", tts_audio(&[(CONNECTING_SSML, "ssml"), (PAUSE_SSML, "ssml")]))
            .metadata("timeoutUnit", seconds_unit)
            .build(),
        Module::builder(LEAVE_VOICEMAIL_PROMPT, ModuleType::PlayPrompt)
            .branch(Success, BEEP)
            .param("Text", inputs.duration.prompt_fragment.as_str())
            .param("TextToSpeechType", "text")
            .position(1465, 99)
            .build(),
        Module::builder(BEEP, ModuleType::PlayPrompt)
            .branch(Success, START_STREAMING)
            .parameter(Parameter::new("AudioPrompt", "").with_resource_name(BEEP_PROMPT))
            .position(1704, 97)
            .metadata("promptName", json!(BEEP_PROMPT))
            .build(),
        Module::builder(START_STREAMING, ModuleType::StartMediaStreaming)
            .branch(Success, WAIT_FOR_INPUT)
            .branch(Error, MARK_STREAMING_FAILED)
            .param("Track", "FromCustomer")
            .param("MediaStreamTypes", "Audio")
            .position(1946, 97)
            .metadata("fromCustomer", json!(true))
            .metadata("toCustomer", json!(false))
            .build(),
        Module::builder(MARK_STREAMING_FAILED, ModuleType::SetAttributes)
            .branch(Success, WAIT_FOR_INPUT)
            .branch(Error, WAIT_FOR_INPUT)
            .keyed_param("Attribute", "startStreamingAudioStatus", "failure")
            .position(2183, 283)
            .build(),
        // Any digit, a timeout or an error all end the recording.
        Module::builder(WAIT_FOR_INPUT, ModuleType::GetUserInput)
            .branch(Timeout, STOP_STREAMING)
            .branch(NoMatch, STOP_STREAMING)
            .branch(Error, STOP_STREAMING)
            .param("Text", "<speak></speak>")
            .param("TextToSpeechType", "ssml")
            .param("Timeout", timeout)
            .param("MaxDigits", "1")
            .position(2427, 96)
            .target("Digits")
            .build(),
        Module::builder(STOP_STREAMING, ModuleType::StopMediaStreaming)
            .branch(Success, DISCONNECT)
            .branch(Error, DISCONNECT)
            .param("Track", "FromCustomer")
            .param("Track", "ToCustomer")
            .param("MediaStreamTypes", "Audio")
            .position(2690, 97)
            .build(),
        Module::builder(DISCONNECT, ModuleType::Disconnect)
            .position(2969, 149)
            .build(),
    ];

    Flow::new(
        FlowKind::CustomerQueue,
        FlowDescriptor::new(FLOW_NAME, FLOW_DESCRIPTION, FlowKind::CustomerQueue).with_entry_point(45, 129),
        SET_LOGGING,
        modules,
    )
}
