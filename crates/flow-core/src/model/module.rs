//! Modules (graph nodes), their parameters and outgoing branches

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Stable identifier of a module within one flow
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of call-handling step. Unknown kinds round-trip through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleType {
    PlayPrompt,
    StoreUserInput,
    GetUserInput,
    SetQueue,
    Transfer,
    Loop,
    LoopPrompts,
    CheckAttribute,
    CheckStaffing,
    InvokeExternalResource,
    SetAttributes,
    SetContactFlow,
    SetLoggingBehavior,
    StartMediaStreaming,
    StopMediaStreaming,
    Disconnect,
    Other(String),
}

impl ModuleType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlayPrompt => "PlayPrompt",
            Self::StoreUserInput => "StoreUserInput",
            Self::GetUserInput => "GetUserInput",
            Self::SetQueue => "SetQueue",
            Self::Transfer => "Transfer",
            Self::Loop => "Loop",
            Self::LoopPrompts => "LoopPrompts",
            Self::CheckAttribute => "CheckAttribute",
            Self::CheckStaffing => "CheckStaffing",
            Self::InvokeExternalResource => "InvokeExternalResource",
            Self::SetAttributes => "SetAttributes",
            Self::SetContactFlow => "SetContactFlow",
            Self::SetLoggingBehavior => "SetLoggingBehavior",
            Self::StartMediaStreaming => "StartMediaStreaming",
            Self::StopMediaStreaming => "StopMediaStreaming",
            Self::Disconnect => "Disconnect",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for ModuleType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "PlayPrompt" => Self::PlayPrompt,
            "StoreUserInput" => Self::StoreUserInput,
            "GetUserInput" => Self::GetUserInput,
            "SetQueue" => Self::SetQueue,
            "Transfer" => Self::Transfer,
            "Loop" => Self::Loop,
            "LoopPrompts" => Self::LoopPrompts,
            "CheckAttribute" => Self::CheckAttribute,
            "CheckStaffing" => Self::CheckStaffing,
            "InvokeExternalResource" => Self::InvokeExternalResource,
            "SetAttributes" => Self::SetAttributes,
            "SetContactFlow" => Self::SetContactFlow,
            "SetLoggingBehavior" => Self::SetLoggingBehavior,
            "StartMediaStreaming" => Self::StartMediaStreaming,
            "StopMediaStreaming" => Self::StopMediaStreaming,
            "Disconnect" => Self::Disconnect,
            _ => Self::Other(name),
        }
    }
}

impl From<ModuleType> for String {
    fn from(module_type: ModuleType) -> Self {
        match module_type {
            ModuleType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome label on a branch. The legal labels depend on the module type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BranchCondition {
    Success,
    Error,
    Timeout,
    AtCapacity,
    Looping,
    Complete,
    True,
    False,
    NoMatch,
    Evaluate,
    Other(String),
}

impl BranchCondition {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Timeout => "Timeout",
            Self::AtCapacity => "AtCapacity",
            Self::Looping => "Looping",
            Self::Complete => "Complete",
            Self::True => "True",
            Self::False => "False",
            Self::NoMatch => "NoMatch",
            Self::Evaluate => "Evaluate",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for BranchCondition {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Success" => Self::Success,
            "Error" => Self::Error,
            "Timeout" => Self::Timeout,
            "AtCapacity" => Self::AtCapacity,
            "Looping" => Self::Looping,
            "Complete" => Self::Complete,
            "True" => Self::True,
            "False" => Self::False,
            "NoMatch" => Self::NoMatch,
            "Evaluate" => Self::Evaluate,
            _ => Self::Other(label),
        }
    }
}

impl From<BranchCondition> for String {
    fn from(condition: BranchCondition) -> Self {
        match condition {
            BranchCondition::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BranchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter value as the runtime expects it: most values are text, a few are bare integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(i64),
    Text(String),
}

impl ParameterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for ParameterValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One (name, value) configuration entry of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            key: None,
            namespace: None,
            resource_name: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }
}

/// Named outgoing edge. No transition means the condition ends the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub condition: BranchCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<ModuleId>,
}

impl Branch {
    pub fn to(condition: BranchCondition, target: impl Into<ModuleId>) -> Self {
        Self {
            condition,
            condition_type: None,
            condition_value: None,
            transition: Some(target.into()),
        }
    }

    pub fn terminal(condition: BranchCondition) -> Self {
        Self {
            condition,
            condition_type: None,
            condition_value: None,
            transition: None,
        }
    }
}

/// A node of a flow graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Presentation data (layout, editor hints); never interpreted
    #[serde(default)]
    pub metadata: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Module {
    pub fn builder(id: impl Into<ModuleId>, module_type: ModuleType) -> ModuleBuilder {
        ModuleBuilder::new(id, module_type)
    }

    /// First parameter with the given name
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Target of the first branch with the given condition
    pub fn transition(&self, condition: &BranchCondition) -> Option<&ModuleId> {
        self.branches
            .iter()
            .find(|b| &b.condition == condition)
            .and_then(|b| b.transition.as_ref())
    }

    /// Distinct successor ids in branch order
    pub fn successors(&self) -> Vec<&ModuleId> {
        let mut out: Vec<&ModuleId> = Vec::new();
        for target in self.branches.iter().filter_map(|b| b.transition.as_ref()) {
            if !out.contains(&target) {
                out.push(target);
            }
        }
        out
    }
}

/// Fluent construction of a [`Module`]
pub struct ModuleBuilder {
    module: Module,
    metadata: Map<String, Value>,
}

impl ModuleBuilder {
    pub fn new(id: impl Into<ModuleId>, module_type: ModuleType) -> Self {
        Self {
            module: Module {
                id: id.into(),
                module_type,
                branches: Vec::new(),
                parameters: Vec::new(),
                metadata: Value::Null,
                target: None,
            },
            metadata: Map::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl Into<ParameterValue>) -> Self {
        self.module.parameters.push(Parameter::new(name, value));
        self
    }

    pub fn keyed_param(mut self, name: &str, key: &str, value: impl Into<ParameterValue>) -> Self {
        self.module
            .parameters
            .push(Parameter::new(name, value).with_key(key));
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.module.parameters.push(parameter);
        self
    }

    pub fn branch(mut self, condition: BranchCondition, target: &str) -> Self {
        self.module.branches.push(Branch::to(condition, target));
        self
    }

    pub fn terminal_branch(mut self, condition: BranchCondition) -> Self {
        self.module.branches.push(Branch::terminal(condition));
        self
    }

    /// `Evaluate` branch taken when the checked value compares `condition_type` to `value`
    pub fn evaluate(mut self, condition_type: &str, value: &str, target: &str) -> Self {
        self.module.branches.push(Branch {
            condition: BranchCondition::Evaluate,
            condition_type: Some(condition_type.to_string()),
            condition_value: Some(value.to_string()),
            transition: Some(target.into()),
        });
        self
    }

    pub fn position(self, x: i64, y: i64) -> Self {
        self.metadata("position", serde_json::json!({ "x": x, "y": y }))
    }

    pub fn metadata(mut self, key: &str, value: Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.module.target = Some(target.to_string());
        self
    }

    pub fn build(mut self) -> Module {
        self.module.metadata = Value::Object(self.metadata);
        self.module
    }
}
