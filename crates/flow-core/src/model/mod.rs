//! Generic contact-flow graph model
//!
//! A [`Flow`] is a set of [`Module`]s (nodes) wired together by named
//! [`Branch`]es (edges), plus an entry point and a metadata envelope. The
//! model knows nothing about the concrete scripts built in
//! [`crate::templates`]; it only enforces the structural contract every flow
//! must satisfy before it is handed to the call-control runtime.

pub mod flow;
pub mod module;

pub use flow::{Flow, FlowDescriptor, FlowKind, FlowStatus, Position};
pub use module::{
    Branch, BranchCondition, Module, ModuleBuilder, ModuleId, ModuleType, Parameter, ParameterValue,
};
