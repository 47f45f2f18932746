mod parse;
mod preview;
mod prompt;

use crate::prelude::*;

pub use parse::ParseOptions;
pub use preview::PreviewOptions;
pub use prompt::{PromptOptions, Stage};

#[derive(Debug, clap::Parser)]
#[command(name = "project")]
#[command(about = "Extract, inspect, and preview generated project files")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Extract the file set from a raw model response
    #[clap(name = "parse")]
    Parse(ParseOptions),

    /// Assemble a sandbox-renderable preview document from responses
    #[clap(name = "preview")]
    Preview(PreviewOptions),

    /// Print the prompt for a generation stage
    #[clap(name = "prompt")]
    Prompt(PromptOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Parse(options) => parse::parse(options, global).await,
        Commands::Preview(options) => preview::preview(options, global).await,
        Commands::Prompt(options) => prompt::prompt(options, global).await,
    }
}

/// Read a response file, wrapping I/O failures with the path.
pub(crate) async fn read_response(path: &str) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| eyre!("Failed to read response '{}': {}", path, e))
}
