//! Complete flow documents

use super::module::{Module, ModuleId, ModuleType};
use crate::error::{FlowError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Which runtime slot consumes the flow; also constrains its module types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowKind {
    ContactFlow,
    CustomerQueue,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactFlow => "contactFlow",
            Self::CustomerQueue => "customerQueue",
        }
    }

    /// Whether a module of `module_type` may appear in a flow of this kind.
    ///
    /// Queue-routing steps only run in contact flows; looping hold prompts only
    /// run while the caller sits in a queue. Unknown types are accepted.
    pub fn permits(&self, module_type: &ModuleType) -> bool {
        match self {
            Self::ContactFlow => !matches!(module_type, ModuleType::LoopPrompts),
            Self::CustomerQueue => !matches!(
                module_type,
                ModuleType::Transfer
                    | ModuleType::SetQueue
                    | ModuleType::SetContactFlow
                    | ModuleType::CheckStaffing
                    | ModuleType::StoreUserInput
            ),
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    Draft,
    Published,
}

/// Editor canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// Flow-level metadata envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDescriptor {
    #[serde(default)]
    pub entry_point_position: Position,
    #[serde(default)]
    pub snap_to_grid: bool,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub status: FlowStatus,
    /// Informational content hash; carried through, never verified
    #[serde(default)]
    pub hash: String,
}

impl FlowDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: FlowKind) -> Self {
        Self {
            entry_point_position: Position::default(),
            snap_to_grid: false,
            name: name.into(),
            description: description.into(),
            kind,
            status: FlowStatus::Published,
            hash: String::new(),
        }
    }

    pub fn with_status(mut self, status: FlowStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_entry_point(mut self, x: i64, y: i64) -> Self {
        self.entry_point_position = Position { x, y };
        self
    }
}

/// A complete routing script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    modules: Vec<Module>,
    version: String,
    #[serde(rename = "type")]
    kind: FlowKind,
    start: ModuleId,
    #[serde(rename = "metadata")]
    descriptor: FlowDescriptor,
}

impl Flow {
    pub const DOCUMENT_VERSION: &'static str = "1";

    /// Assemble and validate a flow. The descriptor's kind and hash are derived
    /// from `kind` and the module list.
    pub fn new(
        kind: FlowKind,
        mut descriptor: FlowDescriptor,
        start: impl Into<ModuleId>,
        modules: Vec<Module>,
    ) -> Result<Self> {
        descriptor.kind = kind;
        descriptor.hash = content_hash(&modules)?;

        let flow = Self {
            modules,
            version: Self::DOCUMENT_VERSION.to_string(),
            kind,
            start: start.into(),
            descriptor,
        };
        flow.validate()?;
        Ok(flow)
    }

    /// Parse a flow document and check its structure
    pub fn from_json(json: &str) -> Result<Self> {
        let flow: Flow = serde_json::from_str(json)?;
        flow.validate()?;
        Ok(flow)
    }

    /// Check the structural invariants: matching kinds in the document and its
    /// metadata, unique ids, an existing start module, no dangling branch
    /// targets and only module types legal for the kind.
    pub fn validate(&self) -> Result<()> {
        if self.descriptor.kind != self.kind {
            return Err(FlowError::KindMismatch {
                kind: self.kind.to_string(),
                descriptor_kind: self.descriptor.kind.to_string(),
            });
        }

        let mut ids = HashSet::with_capacity(self.modules.len());
        for module in &self.modules {
            if !ids.insert(&module.id) {
                return Err(FlowError::DuplicateModule {
                    id: module.id.to_string(),
                });
            }
        }

        if !ids.contains(&self.start) {
            return Err(FlowError::MissingStart {
                start: self.start.to_string(),
            });
        }

        for module in &self.modules {
            if !self.kind.permits(&module.module_type) {
                return Err(FlowError::IllegalModule {
                    module: module.id.to_string(),
                    module_type: module.module_type.to_string(),
                    kind: self.kind.to_string(),
                });
            }

            for target in module.branches.iter().filter_map(|b| b.transition.as_ref()) {
                if !ids.contains(target) {
                    return Err(FlowError::DanglingTransition {
                        module: module.id.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn start(&self) -> &ModuleId {
        &self.start
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn descriptor(&self) -> &FlowDescriptor {
        &self.descriptor
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| &m.id == id)
    }

    pub fn successors(&self, id: &ModuleId) -> Vec<&ModuleId> {
        self.module(id).map(Module::successors).unwrap_or_default()
    }

    /// Module ids reachable from the start module, in breadth-first order
    pub fn reachable_from_start(&self) -> Vec<ModuleId> {
        let by_id: HashMap<&ModuleId, &Module> = self.modules.iter().map(|m| (&m.id, m)).collect();
        let mut seen: HashSet<&ModuleId> = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([&self.start]);

        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            order.push(id.clone());
            if let Some(module) = by_id.get(id) {
                queue.extend(module.successors());
            }
        }

        order
    }

    /// SHA-256 of the serialized module list, hex encoded
    pub fn content_hash(&self) -> Result<String> {
        content_hash(&self.modules)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn content_hash(modules: &[Module]) -> Result<String> {
    let bytes = serde_json::to_vec(modules)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::module::BranchCondition;
    use pretty_assertions::assert_eq;

    fn prompt(id: &str, next: Option<&str>) -> Module {
        let builder = Module::builder(id, ModuleType::PlayPrompt).param("Text", "hello");
        match next {
            Some(next) => builder.branch(BranchCondition::Success, next).build(),
            None => builder.build(),
        }
    }

    fn descriptor() -> FlowDescriptor {
        FlowDescriptor::new("Test", "test flow", FlowKind::ContactFlow)
    }

    #[test]
    fn test_valid_flow() {
        let flow = Flow::new(
            FlowKind::ContactFlow,
            descriptor(),
            "a",
            vec![prompt("a", Some("b")), prompt("b", None)],
        )
        .unwrap();

        assert_eq!(flow.start().as_str(), "a");
        assert_eq!(flow.version(), "1");
        assert_eq!(flow.descriptor().hash.len(), 64);
        assert_eq!(flow.content_hash().unwrap(), flow.descriptor().hash);
        assert_eq!(flow.reachable_from_start(), vec![ModuleId::from("a"), ModuleId::from("b")]);
    }

    #[test]
    fn test_missing_start() {
        let err = Flow::new(FlowKind::ContactFlow, descriptor(), "zzz", vec![prompt("a", None)]).unwrap_err();
        assert!(matches!(err, FlowError::MissingStart { start } if start == "zzz"));
    }

    #[test]
    fn test_duplicate_module() {
        let err = Flow::new(
            FlowKind::ContactFlow,
            descriptor(),
            "a",
            vec![prompt("a", None), prompt("a", None)],
        )
        .unwrap_err();
        assert!(matches!(err, FlowError::DuplicateModule { id } if id == "a"));
    }

    #[test]
    fn test_dangling_transition() {
        let err = Flow::new(FlowKind::ContactFlow, descriptor(), "a", vec![prompt("a", Some("gone"))]).unwrap_err();
        match err {
            FlowError::DanglingTransition { module, target } => {
                assert_eq!(module, "a");
                assert_eq!(target, "gone");
            }
            other => panic!("Expected DanglingTransition, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_restricts_module_types() {
        let transfer = Module::builder("t", ModuleType::Transfer).target("Queue").build();
        let err = Flow::new(
            FlowKind::CustomerQueue,
            FlowDescriptor::new("Queue", "", FlowKind::CustomerQueue),
            "t",
            vec![transfer],
        )
        .unwrap_err();
        assert!(matches!(err, FlowError::IllegalModule { .. }));

        assert!(FlowKind::ContactFlow.permits(&ModuleType::Other("SetVoice".into())));
        assert!(!FlowKind::ContactFlow.permits(&ModuleType::LoopPrompts));
    }

    #[test]
    fn test_document_roundtrip_keeps_hash() {
        let flow = Flow::new(FlowKind::ContactFlow, descriptor(), "a", vec![prompt("a", None)]).unwrap();
        let mut doc: serde_json::Value = serde_json::from_str(&flow.to_json().unwrap()).unwrap();
        assert_eq!(doc["type"], "contactFlow");
        assert_eq!(doc["metadata"]["type"], "contactFlow");
        assert_eq!(doc["metadata"]["status"], "published");

        // The hash is opaque: a stale value is accepted as-is.
        doc["metadata"]["hash"] = serde_json::Value::from("stale");
        let parsed = Flow::from_json(&doc.to_string()).unwrap();
        assert_eq!(parsed.descriptor().hash, "stale");
        assert_eq!(parsed.modules(), flow.modules());
    }

    #[test]
    fn test_metadata_kind_must_match() {
        let flow = Flow::new(FlowKind::ContactFlow, descriptor(), "a", vec![prompt("a", None)]).unwrap();
        let mut doc: serde_json::Value = serde_json::from_str(&flow.to_json().unwrap()).unwrap();
        doc["metadata"]["type"] = serde_json::Value::from("customerQueue");

        let err = Flow::from_json(&doc.to_string()).unwrap_err();
        match &err {
            FlowError::KindMismatch { kind, descriptor_kind } => {
                assert_eq!(kind, "contactFlow");
                assert_eq!(descriptor_kind, "customerQueue");
            }
            other => panic!("Expected KindMismatch, got {:?}", other),
        }
        assert_eq!(err.code(), "InvalidFlow");
    }

    #[test]
    fn test_draft_status_is_carried() {
        let draft = descriptor().with_status(FlowStatus::Draft);
        let flow = Flow::new(FlowKind::ContactFlow, draft, "a", vec![prompt("a", None)]).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&flow.to_json().unwrap()).unwrap();
        assert_eq!(doc["metadata"]["status"], "draft");
        assert_eq!(Flow::from_json(&doc.to_string()).unwrap().descriptor().status, FlowStatus::Draft);
    }
}
