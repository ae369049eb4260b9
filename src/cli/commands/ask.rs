//! Ask command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::TittError;
use anyhow::Result;

/// Run the ask command: one question, one answer.
pub async fn run_ask(
    url: &str,
    question: &str,
    title: Option<String>,
    settings: Settings,
) -> Result<()> {
    let mut dispatcher = super::dispatcher(url, title, &settings)?;

    let spinner = Output::spinner("Asking...");
    let result = dispatcher.ask(question).await;
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            for turn in dispatcher.chat_log().turns() {
                Output::chat_bubble(turn);
            }
        }
        Err(e @ (TittError::NoVideo | TittError::EmptyQuestion)) => {
            Output::error(&e.to_string());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
