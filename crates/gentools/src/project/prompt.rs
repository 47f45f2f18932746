use crate::prelude::{println, *};
use gentools_core::prompt::{
    chat_system_prompt, plan_prompt, project_prompt, PLAN_SYSTEM_PROMPT, PROJECT_SYSTEM_PROMPT,
};

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum Stage {
    /// Project planning
    Plan,
    /// Full project file generation
    Files,
    /// Chat-driven revision
    Chat,
}

#[derive(Debug, clap::Args, Clone)]
pub struct PromptOptions {
    /// Generation stage to build the prompt for
    #[arg(value_enum)]
    pub stage: Stage,

    /// Project description (plan and files stages)
    #[arg(long, default_value = "")]
    pub description: String,

    /// Path to the project plan text (files stage)
    #[arg(long)]
    pub plan: Option<String>,

    /// Current project file name, repeatable (chat stage)
    #[arg(long = "file")]
    pub files: Vec<String>,

    /// Print the system prompt instead of the user prompt
    #[arg(long)]
    pub system: bool,
}

pub async fn prompt(options: PromptOptions, _global: crate::Global) -> Result<()> {
    let text = match options.stage {
        Stage::Plan => {
            if options.system {
                PLAN_SYSTEM_PROMPT.to_string()
            } else {
                plan_prompt(&options.description)
            }
        }
        Stage::Files => {
            if options.system {
                PROJECT_SYSTEM_PROMPT.to_string()
            } else {
                let plan = match &options.plan {
                    Some(path) => tokio::fs::read_to_string(path)
                        .await
                        .map_err(|e| eyre!("Failed to read plan '{}': {}", path, e))?,
                    None => String::new(),
                };
                project_prompt(&options.description, plan.trim_end())
            }
        }
        Stage::Chat => chat_system_prompt(&options.files),
    };

    println!("{text}");

    Ok(())
}
