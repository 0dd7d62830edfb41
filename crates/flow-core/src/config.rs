//! Builder configuration

use vmconnect_infra_common::ConnectConfig;

/// Fixed caller-facing prompts of the greeting flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub extension_prompt: String,
    pub agent_not_found: String,
    pub loop_count_met_transfer: String,
    pub agent_queue_set_error: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            extension_prompt: "Please enter your party's extension number to continue.".to_string(),
            agent_not_found: "We cannot find an agent with the extension number you entered.".to_string(),
            loop_count_met_transfer:
                "Please wait while we transfer you over to our next available representative.".to_string(),
            agent_queue_set_error: "We're sorry, we were unable to connect you to your agent at the moment."
                .to_string(),
        }
    }
}

/// Everything the flow builder needs besides the per-build parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowBuildConfig {
    /// Instance whose queue directory is searched
    pub instance_id: String,
    /// Function invoked by the greeting flow to look up an agent by extension
    pub agent_lookup_function: String,
    /// Value of the flows' `SetLoggingBehavior` step
    pub logging_enabled: bool,
    pub prompts: PromptSet,
}

impl FlowBuildConfig {
    pub fn new(instance_id: impl Into<String>, agent_lookup_function: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            agent_lookup_function: agent_lookup_function.into(),
            logging_enabled: true,
            prompts: PromptSet::default(),
        }
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    pub fn with_prompts(mut self, prompts: PromptSet) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn logging_behavior(&self) -> &'static str {
        if self.logging_enabled {
            "Enable"
        } else {
            "Disable"
        }
    }
}

impl From<&ConnectConfig> for FlowBuildConfig {
    fn from(config: &ConnectConfig) -> Self {
        FlowBuildConfig::new(config.instance_id(), config.agent_lookup_function_arn.clone())
            .with_logging(config.logging_enabled)
    }
}
