#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod prelude;
mod project;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Materialize project files and live-preview documents from model responses"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "GENTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generated project operations: parse, preview, prompt
    Project(crate::project::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Project(sub_app) => crate::project::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
