//! taskforge - demo entry point.
//!
//! Wires the default system with the stub chat client, runs one audit task,
//! and prints the final answer plus the execution log.

use std::sync::Arc;

use taskforge::{config::OrchestratorConfig, Orchestrator, StubChatClient, Task};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Env-tunable knobs; defaults match the documented values.
    let config = OrchestratorConfig::from_env()?;
    tracing::info!(
        memory_top_k = config.memory_top_k,
        "starting with configuration"
    );

    // To swap in a real model, pass any ChatClient implementation here.
    let orchestrator = Orchestrator::with_config(Arc::new(StubChatClient), config);

    let task = Task::new(
        "user-123",
        "Audit this codebase for obvious security issues and draft a remediation plan.",
    );

    let completed = orchestrator.handle_task(task).await;

    println!("=== FINAL ANSWER ===");
    println!("{}", completed.final_answer().unwrap_or("(none)"));
    println!("\n=== LOGS ===");
    for log in &completed.logs {
        println!("- {log}");
    }

    Ok(())
}
