//! "VM-Greeting": welcome the caller, capture an extension and route to the
//! matching agent, falling back to the configured queue.

use super::{TemplateInputs, CUSTOMER_QUEUE_FLOW_NAME};
use crate::error::Result;
use crate::model::{BranchCondition::*, Flow, FlowDescriptor, FlowKind, Module, ModuleType, Parameter};
use serde_json::json;

pub const FLOW_NAME: &str = "VM-Greeting";
pub const FLOW_DESCRIPTION: &str = "Initial caller contact to get agent extension";

/// Agent name returned by the lookup when no specific agent owns the extension
pub const DEFAULT_AGENT_SENTINEL: &str = "default";
/// Maximum time the lookup function may take
pub const LOOKUP_TIME_LIMIT: &str = "8";
pub const EXTENSION_MAX_DIGITS: i64 = 5;

/// Attributes copied from the lookup function's result onto the contact
pub const LOOKUP_ATTRIBUTES: [&str; 6] = [
    "agentId",
    "agentName",
    "transferMessage",
    "transcribeVoicemail",
    "saveCallRecording",
    "encryptVoicemail",
];

pub mod ids {
    pub const SET_LOGGING: &str = "b5bc6e4a-a590-4481-bb92-f485d14f6e28";
    pub const WELCOME_PROMPT: &str = "126c588a-782f-4624-8c6a-3db9d61125d7";
    pub const CAPTURE_EXTENSION: &str = "13a045a7-2116-4676-97b1-fd95db37e0fa";
    pub const STORE_EXTENSION: &str = "361a8c43-f9d3-4a68-8832-51c64f407951";
    pub const LOOKUP_AGENT: &str = "4363b6a1-b0e2-442d-a468-afbfcd5d3dd4";
    pub const SET_AGENT_ATTRIBUTES: &str = "9878c05d-1152-4a04-b8a5-a44221497364";
    pub const CHECK_DEFAULT_AGENT: &str = "e9961d17-9a6f-4dfb-93c6-84fe59f13b7a";
    pub const AGENT_NOT_FOUND_PROMPT: &str = "0c9d0009-c70e-403f-aa24-536f80791ae3";
    pub const RETRY_LOOP: &str = "d30c8053-225e-4f9a-b867-022e7d321f8a";
    pub const SET_AGENT_QUEUE: &str = "4217a94c-00e6-4a35-a90e-b14442694f15";
    pub const SET_CUSTOMER_QUEUE_FLOW: &str = "4a9e6603-dde2-4395-8d4e-4be57d7f7312";
    pub const CHECK_STAFFING: &str = "c605c995-7168-4213-bbf7-430d09f6b106";
    pub const MARK_AVAILABLE: &str = "6363795b-2c86-4a0b-94f3-7c00fb81bb72";
    pub const TRANSFER_TO_AGENT: &str = "d03dc4f9-ea5f-40c3-adb7-5a72ebc3b198";
    pub const AGENT_QUEUE_ERROR_PROMPT: &str = "52f45340-9883-4baf-a5ff-280b8945b54e";
    pub const LOOP_COUNT_MET_PROMPT: &str = "ae8419f5-d469-4a07-90f1-e1a95fb3c1f9";
    pub const SET_FALLBACK_QUEUE: &str = "2b987e46-00c6-4e0a-8dae-1fe55f495f70";
    pub const TRANSFER_TO_FALLBACK: &str = "453aff7e-a46c-40b0-9151-33d985e99d14";
    pub const DEFAULT_ERROR_PROMPT: &str = "730965ba-570c-4856-a27d-25955922bb6d";
    pub const DISCONNECT: &str = "ccacbfd4-bc57-4d64-9cc4-4665c98dcd4a";
}

fn text_prompt(id: &str, text: &str, next: &str, x: i64, y: i64) -> Module {
    Module::builder(id, ModuleType::PlayPrompt)
        .branch(Success, next)
        .param("Text", text)
        .param("TextToSpeechType", "text")
        .position(x, y)
        .metadata("useDynamic", json!(false))
        .build()
}

pub fn greeting_flow(inputs: &TemplateInputs<'_>) -> Result<Flow> {
    use ids::*;

    let timeout = inputs.duration.canonical_seconds.to_string();
    let queue = inputs.fallback_queue;

    let modules = vec![
        Module::builder(SET_LOGGING, ModuleType::SetLoggingBehavior)
            .branch(Success, WELCOME_PROMPT)
            .param("LoggingBehavior", inputs.logging_behavior)
            .position(214, 472)
            .build(),
        text_prompt(WELCOME_PROMPT, inputs.welcome_message, CAPTURE_EXTENSION, 430, 589),
        Module::builder(CAPTURE_EXTENSION, ModuleType::StoreUserInput)
            .branch(Success, STORE_EXTENSION)
            .branch(Error, AGENT_QUEUE_ERROR_PROMPT)
            .param("Text", inputs.prompts.extension_prompt.as_str())
            .param("TextToSpeechType", "text")
            .param("CustomerInputType", "Custom")
            .param("Timeout", timeout)
            .param("MaxDigits", EXTENSION_MAX_DIGITS)
            .param("EncryptEntry", "false")
            .position(656, 685)
            .metadata("useDynamic", json!(false))
            .metadata("countryCodePrefix", json!("+1"))
            .build(),
        Module::builder(STORE_EXTENSION, ModuleType::SetAttributes)
            .branch(Success, LOOKUP_AGENT)
            .branch(Error, AGENT_QUEUE_ERROR_PROMPT)
            .parameter(
                Parameter::new("Attribute", "Stored customer input")
                    .with_key("extensionNumber")
                    .with_namespace("System"),
            )
            .position(882, 594)
            .build(),
        Module::builder(LOOKUP_AGENT, ModuleType::InvokeExternalResource)
            .branch(Success, SET_AGENT_ATTRIBUTES)
            .branch(Error, AGENT_NOT_FOUND_PROMPT)
            .param("FunctionArn", inputs.lookup_function)
            .param("TimeLimit", LOOKUP_TIME_LIMIT)
            .parameter(
                Parameter::new("Parameter", "extensionNumber")
                    .with_key("extensionNumber")
                    .with_namespace("User Defined"),
            )
            .position(1111, 494)
            .metadata("dynamicMetadata", json!({ "extensionNumber": true }))
            .target("Lambda")
            .build(),
        LOOKUP_ATTRIBUTES
            .iter()
            .fold(
                Module::builder(SET_AGENT_ATTRIBUTES, ModuleType::SetAttributes)
                    .branch(Success, CHECK_DEFAULT_AGENT)
                    .branch(Error, AGENT_QUEUE_ERROR_PROMPT),
                |builder, attribute| {
                    builder.parameter(
                        Parameter::new("Attribute", *attribute)
                            .with_key(*attribute)
                            .with_namespace("External"),
                    )
                },
            )
            .position(1340, 387)
            .build(),
        Module::builder(CHECK_DEFAULT_AGENT, ModuleType::CheckAttribute)
            .evaluate("Equals", DEFAULT_AGENT_SENTINEL, SET_FALLBACK_QUEUE)
            .branch(NoMatch, SET_AGENT_QUEUE)
            .param("Attribute", "agentName")
            .param("Namespace", "User Defined")
            .position(1572, 267)
            .build(),
        text_prompt(AGENT_NOT_FOUND_PROMPT, &inputs.prompts.agent_not_found, RETRY_LOOP, 1635, 574),
        Module::builder(RETRY_LOOP, ModuleType::Loop)
            .branch(Looping, CAPTURE_EXTENSION)
            .branch(Complete, LOOP_COUNT_MET_PROMPT)
            .param("LoopCount", inputs.error_loop_count.to_string())
            .position(1648, 938)
            .build(),
        Module::builder(SET_AGENT_QUEUE, ModuleType::SetQueue)
            .branch(Success, SET_CUSTOMER_QUEUE_FLOW)
            .branch(Error, AGENT_QUEUE_ERROR_PROMPT)
            .parameter(Parameter::new("Agent", "agentId").with_namespace("User Defined"))
            .position(1807, 160)
            .metadata("useDynamic", json!(true))
            .metadata("queue", json!("agentId"))
            .build(),
        Module::builder(SET_CUSTOMER_QUEUE_FLOW, ModuleType::SetContactFlow)
            .branch(Success, CHECK_STAFFING)
            .parameter(Parameter::new("ContactFlowId", "").with_resource_name(CUSTOMER_QUEUE_FLOW_NAME))
            .param("Type", "CustomerQueue")
            .position(2050, 182)
            .metadata("contactFlow", json!({ "id": "", "text": CUSTOMER_QUEUE_FLOW_NAME }))
            .build(),
        Module::builder(CHECK_STAFFING, ModuleType::CheckStaffing)
            .branch(True, MARK_AVAILABLE)
            .branch(False, TRANSFER_TO_AGENT)
            .branch(Error, AGENT_QUEUE_ERROR_PROMPT)
            .param("Status", "Available")
            .position(2278, 128)
            .build(),
        Module::builder(MARK_AVAILABLE, ModuleType::SetAttributes)
            .branch(Success, TRANSFER_TO_AGENT)
            .branch(Error, TRANSFER_TO_AGENT)
            .keyed_param("Attribute", "available", "true")
            .position(2512, 78)
            .build(),
        Module::builder(TRANSFER_TO_AGENT, ModuleType::Transfer)
            .branch(AtCapacity, DISCONNECT)
            .branch(Error, AGENT_QUEUE_ERROR_PROMPT)
            .position(2743, 106)
            .target("Queue")
            .build(),
        text_prompt(
            AGENT_QUEUE_ERROR_PROMPT,
            &inputs.prompts.agent_queue_set_error,
            LOOP_COUNT_MET_PROMPT,
            2523,
            495,
        ),
        text_prompt(
            LOOP_COUNT_MET_PROMPT,
            &inputs.prompts.loop_count_met_transfer,
            SET_FALLBACK_QUEUE,
            2100,
            918,
        ),
        Module::builder(SET_FALLBACK_QUEUE, ModuleType::SetQueue)
            .branch(Success, TRANSFER_TO_FALLBACK)
            .branch(Error, TRANSFER_TO_FALLBACK)
            .parameter(Parameter::new("Queue", queue.arn.as_str()).with_resource_name(queue.name.as_str()))
            .position(2447, 917)
            .metadata("queue", json!({ "id": queue.arn, "text": queue.name }))
            .build(),
        Module::builder(TRANSFER_TO_FALLBACK, ModuleType::Transfer)
            .branch(AtCapacity, DISCONNECT)
            .branch(Error, DEFAULT_ERROR_PROMPT)
            .position(2717, 917)
            .target("Queue")
            .build(),
        text_prompt(DEFAULT_ERROR_PROMPT, inputs.default_error_message, DISCONNECT, 2968, 493),
        Module::builder(DISCONNECT, ModuleType::Disconnect)
            .position(3228, 413)
            .build(),
    ];

    Flow::new(
        FlowKind::ContactFlow,
        FlowDescriptor::new(FLOW_NAME, FLOW_DESCRIPTION, FlowKind::ContactFlow).with_entry_point(82, 398),
        SET_LOGGING,
        modules,
    )
}
