//! Contact-flow builder: resolves the fallback queue and instantiates both templates

use crate::config::FlowBuildConfig;
use crate::duration::normalize;
use crate::error::Result;
use crate::model::Flow;
use crate::params::{BuildParameters, BuildRequest};
use crate::queue::{QueueDirectory, QueueResolver};
use crate::templates::{self, TemplateInputs};
use std::sync::Arc;
use tracing::{info, Instrument};
use vmconnect_infra_common::LogContext;

/// The flows produced by one build
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPair {
    pub greeting: Flow,
    pub customer_queue: Flow,
}

impl FlowPair {
    /// `[greeting, customer_queue]`, the order the runtime expects them in
    pub fn into_vec(self) -> Vec<Flow> {
        vec![self.greeting, self.customer_queue]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flow> {
        [&self.greeting, &self.customer_queue].into_iter()
    }
}

/// Builds the greeting and customer-queue flows for one contact-center instance
///
/// ```
/// use std::sync::Arc;
/// use vmconnect_flow_core::*;
///
/// # tokio_test::block_on(async {
/// let directory = StaticQueueDirectory::from_json(
///     r#"[{"Arn": "arn:aws:connect:us-east-1:1:instance/i/queue/q", "Name": "BasicQueue"}]"#,
/// )?;
/// let builder = ContactFlowBuilder::new(FlowBuildConfig::new("i", "lookup-fn"), Arc::new(directory));
///
/// let params = BuildParameters {
///     welcome_message: "Thanks for calling.".into(),
///     default_error_message: "Sorry, please try again later.".into(),
///     max_voicemail_duration: 30,
///     duration_unit: DurationUnit::Second,
///     fallback_queue_name: "BasicQueue".into(),
///     error_loop_count: 2,
/// };
/// let flows = builder.build(&params).await?;
/// assert_eq!(flows.greeting.name(), "VM-Greeting");
/// assert_eq!(flows.customer_queue.name(), "VM-Agent");
/// # Ok::<(), FlowError>(())
/// # }).unwrap();
/// ```
#[derive(Clone)]
pub struct ContactFlowBuilder {
    config: FlowBuildConfig,
    resolver: QueueResolver,
}

impl ContactFlowBuilder {
    pub fn new(config: FlowBuildConfig, directory: Arc<dyn QueueDirectory>) -> Self {
        let resolver = QueueResolver::new(directory, config.instance_id.clone());
        Self { config, resolver }
    }

    pub fn config(&self) -> &FlowBuildConfig {
        &self.config
    }

    /// Validate raw caller input, then build. Nothing is looked up when validation fails.
    pub async fn build_request(&self, request: BuildRequest) -> Result<FlowPair> {
        let params = request.validate()?;
        self.build(&params).await
    }

    /// Build both flows.
    ///
    /// The only external call is the fallback queue lookup; its failure aborts
    /// the build before any flow is assembled.
    pub async fn build(&self, params: &BuildParameters) -> Result<FlowPair> {
        let ctx = LogContext::with_operation("flow-core", "build")
            .with_field("instance", self.config.instance_id.as_str())
            .with_field("fallback_queue", params.fallback_queue_name.as_str());

        self.build_flows(params).instrument(ctx.span()).await
    }

    async fn build_flows(&self, params: &BuildParameters) -> Result<FlowPair> {
        let fallback_queue = self.resolver.resolve(&params.fallback_queue_name).await?;
        let duration = normalize(params.max_voicemail_duration, &params.duration_unit);

        let inputs = TemplateInputs {
            logging_behavior: self.config.logging_behavior(),
            welcome_message: &params.welcome_message,
            default_error_message: &params.default_error_message,
            duration: &duration,
            error_loop_count: params.error_loop_count,
            fallback_queue: &fallback_queue,
            lookup_function: &self.config.agent_lookup_function,
            prompts: &self.config.prompts,
        };

        let pair = FlowPair {
            greeting: templates::greeting_flow(&inputs)?,
            customer_queue: templates::customer_queue_flow(&inputs)?,
        };

        info!(
            queue_arn = %fallback_queue.arn,
            timeout_seconds = duration.canonical_seconds,
            greeting_modules = pair.greeting.modules().len(),
            customer_queue_modules = pair.customer_queue.modules().len(),
            "Built contact flows"
        );
        Ok(pair)
    }
}
