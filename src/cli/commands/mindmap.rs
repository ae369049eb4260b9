//! Mind-map command implementation.

use crate::cli::{render_mind_map, Output};
use crate::config::Settings;
use crate::dispatcher::Fetched;
use crate::error::TittError;
use anyhow::Result;

/// Run the mindmap command.
pub async fn run_mindmap(url: &str, title: Option<String>, settings: Settings) -> Result<()> {
    let dispatcher = super::dispatcher(url, title, &settings)?;

    let spinner = Output::spinner("Generating mind map...");
    let result = dispatcher.mind_map().await;
    spinner.finish_and_clear();

    match result {
        Ok(Fetched::Ok(tree)) => {
            Output::header("Mind Map");
            print!("{}", render_mind_map(&tree));
            Output::kv("nodes", &tree.node_count().to_string());
            Output::kv("depth", &tree.depth().to_string());
        }
        Ok(Fetched::Failed(msg)) => Output::error(msg),
        Err(TittError::NoVideo) => Output::error(&TittError::NoVideo.to_string()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
