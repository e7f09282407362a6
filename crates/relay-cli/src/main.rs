use relay_core::{Client, ExecutionOptions, Kwargs, PublisherConfig, delay};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    // (A) config from the environment, client over the in-memory publisher
    let config = PublisherConfig::from_env()?;
    info!(default_queue = %config.default_queue, "starting relay demo");
    let client = Client::in_memory(config);

    // (B) positional-only dispatch
    let add = client.create_task("task.add");
    let handle = delay!(add, 1, 2).await?;
    info!(id = %handle.task_id(), queue = handle.queue(), "dispatched task.add");

    // (C) kwargs plus a queue override
    let report = client.create_task("report.build");
    let handle = report
        .dispatch(
            Some(vec![json!("2024-Q1")].into()),
            Some(Kwargs::new().with("format", "pdf")),
            Some(ExecutionOptions::new().queue("reports").countdown_secs(30)),
        )
        .await?;
    info!(id = %handle.task_id(), queue = handle.queue(), "dispatched report.build");

    // (D) untyped input with the wrong shape never reaches the publisher
    if let Err(err) = add.dispatch_value(Some(json!("1, 2")), None, None).await {
        warn!(error = %err, "bad input rejected");
    }

    // (E) show what each queue holds
    let counts = client.publisher().counts().await;
    println!("{}", serde_json::to_string_pretty(&counts)?);
    for queue in counts.pending.keys() {
        for message in client.publisher().drain(queue).await {
            println!("{}", serde_json::to_string(&message)?);
        }
    }

    Ok(())
}
