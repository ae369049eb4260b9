//! CLI output formatting utilities.
//!
//! Pure rendering functions turn dispatcher results into strings; the
//! printing helpers put them on the terminal. This is the CLI stand-in for
//! the popup's presentation panels.

use crate::backend::MindMapNode;
use crate::chat::{ChatTurn, Sender};
use crate::tab::{VideoContext, NO_VIDEO_LABEL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print the video panel: title and thumbnail, or the no-video label.
    pub fn video_panel(context: &VideoContext) {
        match context {
            VideoContext::Video(reference) => {
                println!("{}", style(&reference.title).bold());
                if let Some(thumbnail) = reference.thumbnail_url() {
                    println!("{}", style(thumbnail).dim());
                }
            }
            VideoContext::NoVideo => {
                println!("{}", style(NO_VIDEO_LABEL).dim());
            }
        }
    }

    /// Print one chat turn as a styled bubble.
    pub fn chat_bubble(turn: &ChatTurn) {
        match turn.sender() {
            Sender::User => println!("{} {}", style("You:").green().bold(), turn.text()),
            Sender::Bot => println!("{} {}", style("Titt:").cyan().bold(), turn.text()),
        }
    }

    /// Create a spinner for a pending backend call.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Render a mind-map tree as indented text, one line per node.
pub fn render_mind_map(node: &MindMapNode) -> String {
    let mut out = String::new();
    render_node(node, 0, &mut out);
    out
}

fn render_node(node: &MindMapNode, depth: usize, out: &mut String) {
    let label = if node.name.is_empty() { "(unnamed)" } else { &node.name };
    out.push_str(&"  ".repeat(depth));
    if depth > 0 {
        out.push_str("- ");
    }
    out.push_str(label);
    out.push('\n');
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}
