//! Doctor command implementation.
//!
//! Reports the effective configuration and probes the backend so problems
//! surface before an action fails mid-flight.

use crate::backend::BackendClient;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the doctor command.
pub async fn run_doctor(settings: Settings) -> Result<()> {
    Output::header("Configuration");
    Output::kv("config file", &Settings::default_config_path().display().to_string());
    Output::kv("backend", &settings.backend.base_url);
    Output::kv(
        "request timeout",
        &settings
            .backend
            .request_timeout_seconds
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "none".to_string()),
    );
    Output::kv("pdf filename", &settings.export.pdf_filename);

    Output::header("Backend");
    let client = match BackendClient::new(&settings.backend) {
        Ok(client) => client,
        Err(e) => {
            Output::error(&format!("Invalid backend URL: {}", e));
            return Ok(());
        }
    };

    let spinner = Output::spinner("Probing backend...");
    let probe = client.probe().await;
    spinner.finish_and_clear();

    match probe {
        Ok(()) => Output::success(&format!("Backend reachable at {}", client.base_url())),
        Err(e) => {
            Output::error(&e.to_string());
            Output::info("Start the summarizer backend and try again.");
        }
    }

    Ok(())
}
