use clap::Parser;
use pretty_assertions::assert_eq;
use std::path::Path;
use vmconnect::voicemail_core::{DeliverReason, Resolution};
use vmconnect_cli::commands::{build, classify};
use vmconnect_cli::{user_message, Cli, Command};

const ARN: &str = "arn:aws:connect:us-east-1:123456789012:instance/inst-1";

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn fixtures(dir: &Path, queue_name: &str) -> (String, String) {
    let request = write(
        dir,
        "request.json",
        &format!(
            r#"{{
                "welcomeMessage": "Thank you for calling.",
                "defaultErrorMessage": "Sorry, we cannot take your call.",
                "maxVoicemailDuration": 3,
                "durationType": "MINUTE",
                "fallbackQueueName": "{}",
                "errorLoopCount": 2
            }}"#,
            queue_name
        ),
    );
    let queues = write(
        dir,
        "queues.json",
        r#"[{"Id": "q1", "Arn": "arn:aws:connect:us-east-1:123456789012:instance/inst-1/queue/q1", "Name": "BasicQueue"}]"#,
    );
    (request, queues)
}

fn build_args(cli: Cli) -> build::BuildArgs {
    match cli.command {
        Command::Build(args) => args,
        other => panic!("Expected build command, got {:?}", other),
    }
}

#[tokio::test]
async fn test_build_writes_both_flows() {
    let dir = tempfile::tempdir().unwrap();
    let (request, queues) = fixtures(dir.path(), "BasicQueue");
    let out = dir.path().join("flows");

    let cli = Cli::try_parse_from([
        "vmconnect",
        "build",
        "--request",
        request.as_str(),
        "--queues",
        queues.as_str(),
        "--out",
        out.to_str().unwrap(),
        "--instance-arn",
        ARN,
        "--lookup-function",
        "lookup-fn",
        "--flow-logging",
        "true",
    ])
    .unwrap();
    cli.run().await.unwrap();

    let greeting = std::fs::read_to_string(out.join("VM-Greeting.json")).unwrap();
    let agent = std::fs::read_to_string(out.join("VM-Agent.json")).unwrap();
    assert!(greeting.contains("lookup-fn"));
    assert!(greeting.contains("queue/q1"));
    assert!(agent.contains("You have 3 minutes"));
}

#[tokio::test]
async fn test_build_reports_missing_queue() {
    let dir = tempfile::tempdir().unwrap();
    let (request, queues) = fixtures(dir.path(), "Overflow");

    let args = build_args(
        Cli::try_parse_from([
            "vmconnect",
            "build",
            "--request",
            request.as_str(),
            "--queues",
            queues.as_str(),
            "--instance-arn",
            ARN,
            "--lookup-function",
            "lookup-fn",
            "--flow-logging",
            "false",
        ])
        .unwrap(),
    );

    let err = build::build_flows(&args).await.unwrap_err();
    assert_eq!(
        user_message(&err),
        "The queue with the name \"Overflow\" cannot be found. Please check to see if the queue exists in your Amazon Connect instance"
    );
}

#[tokio::test]
async fn test_build_rejects_bad_instance_arn() {
    let dir = tempfile::tempdir().unwrap();
    let (request, queues) = fixtures(dir.path(), "BasicQueue");

    let args = build_args(
        Cli::try_parse_from([
            "vmconnect",
            "build",
            "--request",
            request.as_str(),
            "--queues",
            queues.as_str(),
            "--instance-arn",
            "not-an-arn",
            "--lookup-function",
            "lookup-fn",
        ])
        .unwrap(),
    );
    assert!(build::build_flows(&args).await.is_err());
}

#[test]
fn test_classify_arguments() {
    let cli = Cli::try_parse_from(["vmconnect", "classify", "--old", "in_progress", "--new", "COMPLETED"]).unwrap();
    let Command::Classify(args) = cli.command else {
        panic!("Expected classify command");
    };
    assert_eq!(
        classify::resolve(&args),
        Resolution::Deliver(DeliverReason::TranscriptionCompleted)
    );

    let cli = Cli::try_parse_from(["vmconnect", "classify", "--old", "COMPLETED"]).unwrap();
    let Command::Classify(args) = cli.command else {
        panic!("Expected classify command");
    };
    assert_eq!(classify::resolve(&args), Resolution::Deliver(DeliverReason::NoTranscription));
}
