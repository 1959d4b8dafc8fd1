use std::process;

use relay_models::{error::ReportDisplayExt, log::init_tracing};
use teams_relay::{config::RelayConfig, handler::run_invocation};
use tokio::io::{self, AsyncReadExt};

/// Handles one invocation: the SNS event payload is read from stdin and the
/// exit status reports whether every record was delivered.
#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("teams-relay error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    dotenv::dotenv().ok();

    let config = RelayConfig::from_env().map_err(|e| format!("{e}: {}", e.format()))?;
    init_tracing(config.prod_logs);

    let mut payload = String::new();
    io::stdin()
        .read_to_string(&mut payload)
        .await
        .map_err(|e| format!("Failed to read invocation payload from stdin: {e}"))?;

    let summary = run_invocation(&payload, &config)
        .await
        .map_err(|e| format!("{e}: {}", e.format()))?;

    tracing::info!(delivered = summary.delivered, "Invocation complete");
    Ok(())
}
