//! CLI command implementations.

mod ask;
mod chat;
mod config;
mod doctor;
mod export;
mod mindmap;
mod summarize;
mod transcript;

pub use ask::run_ask;
pub use chat::run_chat;
pub use config::run_config;
pub use doctor::run_doctor;
pub use export::run_export;
pub use mindmap::run_mindmap;
pub use summarize::run_summarize;
pub use transcript::run_transcript;

use crate::backend::BackendClient;
use crate::config::Settings;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::tab::FixedTab;
use std::sync::Arc;

/// Build a dispatcher whose "active tab" is the given URL and title.
fn dispatcher(url: &str, title: Option<String>, settings: &Settings) -> Result<Dispatcher> {
    let tabs = Arc::new(FixedTab::new(url, title.unwrap_or_default()));
    let backend = BackendClient::new(&settings.backend)?;
    Ok(Dispatcher::new(tabs, backend))
}
