//! # vmconnect - voicemail routing for contact centers
//!
//! This crate bundles the vmconnect components:
//!
//! - **Flow Core**: the contact-flow graph model and the greeting /
//!   customer-queue flow builder
//! - **Voicemail Core**: change-event classification and agent notification
//! - **Infra Common**: startup configuration and logging
//!
//! ## Quick Start
//!
//! ```rust
//! use vmconnect::prelude::*;
//!
//! let completed = classify(Some(&TranscriptionStatus::InProgress), Some(&TranscriptionStatus::Completed));
//! assert!(completed.should_deliver());
//! ```
//!
//! ## Module Structure
//!
//! - [`flow_core`]: contact-flow construction
//! - [`voicemail_core`]: voicemail delivery
//! - [`infra_common`]: configuration and logging

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

// Re-export all crates as modules
pub use vmconnect_flow_core as flow_core;
pub use vmconnect_infra_common as infra_common;
pub use vmconnect_voicemail_core as voicemail_core;

pub mod prelude {
    //! Common imports for vmconnect applications

    pub use crate::flow_core::{
        BuildParameters, BuildRequest, ContactFlowBuilder, DurationUnit, Flow, FlowBuildConfig, FlowError, FlowKind,
        FlowPair, QueueDirectory, QueueSummary, StaticQueueDirectory,
    };
    pub use crate::infra_common::{setup_logging, ConnectConfig, InstanceArn, LogContext, LoggingConfig};
    pub use crate::voicemail_core::{
        classify, classify_records, AgentDirectory, AgentEntry, ChangeEvent, DeliveryError, DeliveryOrchestrator,
        DeliveryReceipt, GlobalSettings, GlobalSettingsStore, NotificationChannel, ProcessOutcome, Resolution,
        TranscriptionStatus, VoicemailError, VoicemailRecord, VoicemailRepository, VoicemailService,
    };
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
