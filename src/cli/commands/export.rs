//! PDF export command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::dispatcher::Fetched;
use crate::error::TittError;
use anyhow::Result;

/// Run the export command.
pub async fn run_export(
    url: &str,
    title: Option<String>,
    output: Option<String>,
    settings: Settings,
) -> Result<()> {
    let dispatcher = super::dispatcher(url, title, &settings)?;

    let spinner = Output::spinner("Exporting PDF...");
    let result = dispatcher.export_pdf().await;
    spinner.finish_and_clear();

    match result {
        Ok(Fetched::Ok(bytes)) => {
            let path = output.unwrap_or_else(|| settings.export.pdf_filename.clone());
            let path = Settings::expand_path(&path);
            std::fs::write(&path, &bytes)?;
            Output::success(&format!("Saved {} ({} bytes)", path.display(), bytes.len()));
        }
        Ok(Fetched::Failed(msg)) => Output::error(msg),
        Err(TittError::NoVideo) => Output::error(&TittError::NoVideo.to_string()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
