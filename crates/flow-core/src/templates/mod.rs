//! The two fixed-topology flows of the voicemail routing script
//!
//! Module ids and branch wiring are a contract with the deployed script and
//! must not change between builds. Only parameter values vary with the build
//! inputs; positions and editor hints are regenerated on every build.

pub mod customer_queue;
pub mod greeting;

use crate::config::PromptSet;
use crate::duration::NormalizedDuration;
use crate::queue::ResolvedQueue;

pub use customer_queue::customer_queue_flow;
pub use greeting::greeting_flow;

/// Name under which the customer-queue flow is referenced from the greeting flow
pub const CUSTOMER_QUEUE_FLOW_NAME: &str = customer_queue::FLOW_NAME;

/// Values bound into the templates for one build
#[derive(Debug, Clone)]
pub struct TemplateInputs<'a> {
    /// `Enable` or `Disable`
    pub logging_behavior: &'a str,
    pub welcome_message: &'a str,
    pub default_error_message: &'a str,
    pub duration: &'a NormalizedDuration,
    pub error_loop_count: u32,
    pub fallback_queue: &'a ResolvedQueue,
    pub lookup_function: &'a str,
    pub prompts: &'a PromptSet,
}
