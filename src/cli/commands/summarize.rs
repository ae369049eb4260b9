//! Summarize command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::dispatcher::Fetched;
use crate::error::TittError;
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(url: &str, title: Option<String>, settings: Settings) -> Result<()> {
    let dispatcher = super::dispatcher(url, title, &settings)?;

    let spinner = Output::spinner("Generating summary...");
    let result = dispatcher.summarize().await;
    spinner.finish_and_clear();

    match result {
        Ok(Fetched::Ok(summary)) => {
            Output::header("Overview");
            println!("{}", summary.overview);
            Output::header("Detailed Summary");
            println!("{}", summary.detailed_summary);
        }
        Ok(Fetched::Failed(msg)) => Output::error(msg),
        Err(TittError::NoVideo) => Output::error(&TittError::NoVideo.to_string()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
