//! Build command - assemble both contact flows from a request file

use anyhow::Context;
use clap::Args;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use vmconnect::flow_core::{BuildRequest, ContactFlowBuilder, FlowBuildConfig, FlowPair, StaticQueueDirectory};
use vmconnect::infra_common::config::{INSTANCE_ARN_KEY, LOGGING_ENABLED_KEY, LOOKUP_FUNCTION_KEY};
use vmconnect::infra_common::ConnectConfig;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// JSON file with the build parameters
    #[arg(long, value_name = "FILE")]
    pub request: PathBuf,

    /// JSON queue listing (array of queue summaries or `{"QueueSummaryList": [...]}`)
    #[arg(long, value_name = "FILE")]
    pub queues: PathBuf,

    /// Directory to write the flow documents to; stdout when omitted
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Contact-center instance ARN
    #[arg(long, env = INSTANCE_ARN_KEY)]
    pub instance_arn: Option<String>,

    /// Agent lookup function invoked by the greeting flow
    #[arg(long, env = LOOKUP_FUNCTION_KEY)]
    pub lookup_function: Option<String>,

    /// Contact-flow logging (true / false)
    #[arg(long, env = LOGGING_ENABLED_KEY)]
    pub flow_logging: Option<String>,
}

impl BuildArgs {
    fn connect_config(&self) -> anyhow::Result<ConnectConfig> {
        let mut values = HashMap::new();
        let pairs = [
            (INSTANCE_ARN_KEY, &self.instance_arn),
            (LOOKUP_FUNCTION_KEY, &self.lookup_function),
            (LOGGING_ENABLED_KEY, &self.flow_logging),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                values.insert(key.to_string(), value.clone());
            }
        }
        Ok(ConnectConfig::from_map(&values)?)
    }
}

/// Build both flows as described by `args`
pub async fn build_flows(args: &BuildArgs) -> anyhow::Result<FlowPair> {
    let config = args.connect_config()?;

    let raw = std::fs::read_to_string(&args.request)
        .with_context(|| format!("cannot read build request {}", args.request.display()))?;
    let request: BuildRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid build request {}", args.request.display()))?;
    let directory = StaticQueueDirectory::from_json_file(&args.queues)?;

    let builder = ContactFlowBuilder::new(FlowBuildConfig::from(&config), Arc::new(directory));
    Ok(builder.build_request(request).await?)
}

/// Write each flow to `<dir>/<flow name>.json`, returning the written paths
pub fn write_flows(flows: &FlowPair, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let mut written = Vec::new();
    for flow in flows.iter() {
        let path = dir.join(format!("{}.json", flow.name()));
        std::fs::write(&path, flow.to_json_pretty()?)
            .with_context(|| format!("cannot write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Execute build command
pub async fn execute(args: BuildArgs) -> anyhow::Result<()> {
    let flows = build_flows(&args).await?;

    match &args.out {
        Some(dir) => {
            for path in write_flows(&flows, dir)? {
                info!(path = %path.display(), "Wrote flow");
                println!("{}", path.display());
            }
        }
        None => {
            let documents = flows.into_vec();
            println!("{}", serde_json::to_string_pretty(&documents)?);
        }
    }

    Ok(())
}
