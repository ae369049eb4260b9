//! Interactive Q&A chat command.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::TittError;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat command.
///
/// Keeps the session chat transcript across questions; the transcript is
/// discarded when the session ends.
pub async fn run_chat(url: &str, title: Option<String>, settings: Settings) -> Result<()> {
    let mut dispatcher = super::dispatcher(url, title, &settings)?;

    let context = dispatcher.video_context().await?;
    Output::video_panel(&context);
    if !context.is_video() {
        return Ok(());
    }

    println!("\n{}", style("Titt Chat").bold().cyan());
    println!(
        "{}\n",
        style("Ask about the video, or 'exit' to quit.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        let spinner = Output::spinner("Thinking...");
        let result = dispatcher.ask(input).await;
        spinner.finish_and_clear();

        match result {
            Ok(turn) => {
                println!("{} {}\n", style("Titt:").cyan().bold(), turn.text());
            }
            Err(TittError::NoVideo) => {
                // The tab stopped resolving as a video mid-session.
                Output::error(&TittError::NoVideo.to_string());
                break;
            }
            Err(e) => {
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
