//! # Flow-Core
//!
//! Programmatic construction of the contact flows behind the voicemail
//! routing script.
//!
//! - [`model`]: the generic flow graph (modules, branches, parameters) and
//!   its structural validation
//! - [`queue`]: fallback queue lookup against the instance's queue directory
//! - [`duration`]: voicemail duration to seconds and prompt text
//! - [`templates`]: the fixed greeting and customer-queue topologies
//! - [`builder`]: [`ContactFlowBuilder`], tying the above together
//!
//! ```no_run
//! use std::sync::Arc;
//! use vmconnect_flow_core::{BuildRequest, ContactFlowBuilder, FlowBuildConfig, StaticQueueDirectory};
//!
//! # async fn example() -> vmconnect_flow_core::Result<()> {
//! let directory = Arc::new(StaticQueueDirectory::from_json_file("queues.json")?);
//! let builder = ContactFlowBuilder::new(FlowBuildConfig::new("instance-id", "lookup-fn"), directory);
//!
//! let request: BuildRequest = serde_json::from_str(r#"{
//!     "welcomeMessage": "Thanks for calling.",
//!     "defaultErrorMessage": "Sorry, please try again later.",
//!     "maxVoicemailDuration": 2,
//!     "durationType": "MINUTE",
//!     "fallbackQueueName": "BasicQueue",
//!     "errorLoopCount": 3
//! }"#)?;
//!
//! for flow in builder.build_request(request).await?.into_vec() {
//!     println!("{}", flow.to_json()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod duration;
pub mod error;
pub mod model;
pub mod params;
pub mod queue;
pub mod templates;

pub use builder::{ContactFlowBuilder, FlowPair};
pub use config::{FlowBuildConfig, PromptSet};
pub use duration::{normalize, DurationUnit, NormalizedDuration};
pub use error::{FlowError, Result};
pub use model::{Flow, FlowKind, Module, ModuleId, ModuleType};
pub use params::{BuildParameters, BuildRequest};
pub use queue::{QueueDirectory, QueueResolver, QueueSummary, ResolvedQueue, StaticQueueDirectory};
