//! Fallback queue resolution against the instance's queue directory

use crate::error::{FlowError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// One entry of a queue listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueSummary {
    #[serde(default)]
    pub id: String,
    pub arn: String,
    pub name: String,
}

/// Queue name bound to its durable identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQueue {
    pub name: String,
    pub arn: String,
}

/// Read-only queue directory of a contact-center instance
#[async_trait]
pub trait QueueDirectory: Send + Sync {
    /// List the instance's queues in directory order
    async fn list_queues(&self, instance_id: &str) -> Result<Vec<QueueSummary>>;
}

/// Queue directory backed by a fixed listing
#[derive(Debug, Clone, Default)]
pub struct StaticQueueDirectory {
    queues: Vec<QueueSummary>,
}

impl StaticQueueDirectory {
    pub fn new(queues: Vec<QueueSummary>) -> Self {
        Self { queues }
    }

    /// Load a listing from a JSON file containing either an array of queue
    /// summaries or an object with a `QueueSummaryList` array.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| FlowError::directory(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Listing {
            Bare(Vec<QueueSummary>),
            Wrapped {
                #[serde(rename = "QueueSummaryList", default)]
                queue_summary_list: Vec<QueueSummary>,
            },
        }

        let queues = match serde_json::from_str::<Listing>(raw)? {
            Listing::Bare(queues) => queues,
            Listing::Wrapped { queue_summary_list } => queue_summary_list,
        };
        Ok(Self::new(queues))
    }
}

#[async_trait]
impl QueueDirectory for StaticQueueDirectory {
    async fn list_queues(&self, _instance_id: &str) -> Result<Vec<QueueSummary>> {
        Ok(self.queues.clone())
    }
}

/// Resolves queue names of one instance to durable identifiers
#[derive(Clone)]
pub struct QueueResolver {
    directory: Arc<dyn QueueDirectory>,
    instance_id: String,
}

impl QueueResolver {
    pub fn new(directory: Arc<dyn QueueDirectory>, instance_id: impl Into<String>) -> Self {
        Self {
            directory,
            instance_id: instance_id.into(),
        }
    }

    /// Find the queue named exactly `queue_name`.
    ///
    /// On duplicate names the first entry in directory order wins.
    pub async fn resolve(&self, queue_name: &str) -> Result<ResolvedQueue> {
        let queues = self.directory.list_queues(&self.instance_id).await?;
        let mut matches = queues.into_iter().filter(|q| q.name == queue_name);

        let first = matches
            .next()
            .ok_or_else(|| FlowError::queue_not_found(queue_name))?;

        let duplicates = matches.count();
        if duplicates > 0 {
            warn!(
                queue = queue_name,
                duplicates,
                arn = %first.arn,
                "Queue name is not unique in the directory, using the first listed match"
            );
        }

        debug!(queue = queue_name, arn = %first.arn, "Resolved queue");
        Ok(ResolvedQueue {
            name: first.name,
            arn: first.arn,
        })
    }
}
