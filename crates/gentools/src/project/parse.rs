use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use gentools_core::response::{parse_response, GeneratedFile};

#[derive(Debug, clap::Args, Clone)]
pub struct ParseOptions {
    /// Path to the raw response text
    pub file: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct ParseOutput {
    pub source: String,
    pub count: usize,
    pub files: Vec<GeneratedFile>,
}

pub async fn parse(options: ParseOptions, global: crate::Global) -> Result<()> {
    let raw = super::read_response(&options.file).await?;

    // Pure transformation: extract the ordered file set.
    let files = parse_response(&raw);

    if global.verbose {
        eprintln!(
            "Parsed {} file(s) from {} bytes of response text",
            files.len(),
            raw.len()
        );
    }

    let output = ParseOutput {
        source: options.file,
        count: files.len(),
        files,
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.files.is_empty() {
        // A valid outcome, not an error: the response produced no files.
        println!("{}", "No files found in response".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "NAME".bold(),
        "LANGUAGE".bold(),
        "SIZE".bold()
    ]);
    for file in &output.files {
        table.add_row(prettytable::row![
            file.name,
            file.language,
            f!("{} chars", file.content.chars().count())
        ]);
    }
    table.printstd();

    Ok(())
}
