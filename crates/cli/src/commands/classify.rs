//! Classify command - show the decision for one status transition

use clap::Args;
use vmconnect::voicemail_core::{classify, Resolution, TranscriptionStatus};

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Status before the change; `-` for none
    #[arg(long, default_value = "-")]
    pub old: String,

    /// Status after the change; `-` for none
    #[arg(long, default_value = "-")]
    pub new: String,
}

fn status(arg: &str) -> Option<TranscriptionStatus> {
    match arg.trim() {
        "" | "-" => None,
        value => Some(TranscriptionStatus::from(value.to_uppercase())),
    }
}

pub fn resolve(args: &ClassifyArgs) -> Resolution {
    let (old, new) = (status(&args.old), status(&args.new));
    classify(old.as_ref(), new.as_ref())
}

/// Execute classify command
pub fn execute(args: ClassifyArgs) -> anyhow::Result<()> {
    println!("{}", resolve(&args));
    Ok(())
}
