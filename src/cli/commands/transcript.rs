//! Transcript command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::dispatcher::Fetched;
use crate::error::TittError;
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(
    url: &str,
    title: Option<String>,
    output: Option<String>,
    settings: Settings,
) -> Result<()> {
    let dispatcher = super::dispatcher(url, title, &settings)?;

    let spinner = Output::spinner("Fetching transcript...");
    let result = dispatcher.transcribe().await;
    spinner.finish_and_clear();

    match result {
        Ok(Fetched::Ok(transcript)) => match output {
            Some(path) if path != "-" => {
                std::fs::write(&path, &transcript)?;
                Output::success(&format!("Transcript written to {}", path));
            }
            _ => println!("{}", transcript),
        },
        Ok(Fetched::Failed(msg)) => Output::error(msg),
        Err(TittError::NoVideo) => Output::error(&TittError::NoVideo.to_string()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
