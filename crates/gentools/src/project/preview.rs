use crate::prelude::{eprintln, println, *};
use gentools_core::preview::assemble;
use gentools_core::project::ProjectState;
use gentools_core::response::parse_response;

#[derive(Debug, clap::Args, Clone)]
pub struct PreviewOptions {
    /// Path to the full-generation response text
    pub file: String,

    /// Incremental (chat) response files, merged on top in order
    #[arg(long = "patch")]
    pub patches: Vec<String>,

    /// Write the preview document to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

pub async fn preview(options: PreviewOptions, global: crate::Global) -> Result<()> {
    let raw = super::read_response(&options.file).await?;

    // Full generation replaces the whole state.
    let files = parse_response(&raw);
    if files.is_empty() {
        eprintln!("No files found in response; the preview will be a placeholder");
    }

    let mut state = ProjectState::new();
    state.replace(&files);

    // Incremental responses update only the keys they name.
    for patch in &options.patches {
        let raw = super::read_response(patch).await?;
        let updates = parse_response(&raw);
        if updates.is_empty() {
            eprintln!("No files found in patch '{patch}'");
        }
        if global.verbose {
            for update in &updates {
                eprintln!("Updated: {}", update.name);
            }
        }
        state.merge(&updates);
    }

    // Pure transformation: one renderable document, whatever the state.
    let document = assemble(&state);

    match &options.output {
        Some(path) => {
            tokio::fs::write(path, &document)
                .await
                .map_err(|e| eyre!("Failed to write preview '{}': {}", path, e))?;
            if global.verbose {
                eprintln!("Wrote {} bytes to {}", document.len(), path);
            }
        }
        None => println!("{document}"),
    }

    Ok(())
}
