use std::collections::HashMap;

use tracing_subscriber::EnvFilter;

use pipeline_plugin::job::{ExecutionOutcome, JobDefinition};

fn echo(args: HashMap<String, String>) -> ExecutionOutcome {
    match args.get("message") {
        Some(message) => {
            eprintln!("{}", message);
            ExecutionOutcome::Success
        }
        None => ExecutionOutcome::Failed("no message argument given".to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr: stdout belongs to the handshake line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let jobs = vec![
        JobDefinition::new("Echo", echo)
            .with_description("Echoes the message argument to stderr")
            .with_priority(0),
        JobDefinition::new("Stop early", |_args| {
            ExecutionOutcome::ExitRequested("nothing left to do".to_string())
        })
        .with_description("Asks the pipeline to stop without failing")
        .with_priority(10),
    ];

    pipeline_plugin::plugin::serve(jobs).await?;
    Ok(())
}
