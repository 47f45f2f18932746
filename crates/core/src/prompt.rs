//! Prompt construction for the three generation stages.
//!
//! Pure builders for the prompts the shell sends to a completion service:
//! project planning, full project generation, and chat-driven revision.
//! The file format demanded by the generation prompt is the same fenced
//! format [`crate::response::parse_response`] extracts.

/// System prompt for the project planning stage.
pub const PLAN_SYSTEM_PROMPT: &str = "\
You are a professional project planning assistant. Create a detailed project plan for the described project.

Provide:
1. Project overview
2. Technical architecture
3. File structure
4. Key features
5. Implementation approach

Be detailed and technical.";

/// System prompt for the full project generation stage.
///
/// The fenced format demanded here is what the primary response grammar
/// expects: language token on the fence, file name in a comment on the
/// first content line.
pub const PROJECT_SYSTEM_PROMPT: &str = "\
You are a code generator. Generate a complete, working project based on the plan.

Generate EXACTLY these 4 files:
1. App.js - Complete React component
2. styles.css - Complete styling
3. index.html - Full HTML page
4. README.md - Project documentation

Use this EXACT format for each file:
```javascript
// App.js
[React component code]
```

```css
/* styles.css */
[CSS styling]
```

```html
<!-- index.html -->
[HTML page]
```

```markdown
# README.md
[Documentation]
```

Make it functional and professional.";

/// User prompt for the planning stage.
pub fn plan_prompt(description: &str) -> String {
    format!("Create a detailed project plan for: {description}")
}

/// User prompt for the full generation stage.
pub fn project_prompt(description: &str, plan: &str) -> String {
    format!("Generate the complete project files for: {description}\n\nProject Plan:\n{plan}")
}

/// System prompt for the chat revision stage, listing the current file
/// inventory so revisions come back as complete named files.
pub fn chat_system_prompt(file_names: &[String]) -> String {
    let inventory = file_names
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a code assistant helping improve a web project. Current files:\n\
         {inventory}\n\n\
         When updating code, return the complete file using this format:\n\
         ```javascript\n\
         // filename.js\n\
         [complete updated code]\n\
         ```\n\n\
         Provide working improvements."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prompt_embeds_description() {
        let prompt = plan_prompt("a todo app with dark theme");
        assert_eq!(
            prompt,
            "Create a detailed project plan for: a todo app with dark theme"
        );
    }

    #[test]
    fn test_project_prompt_embeds_description_and_plan() {
        let prompt = project_prompt("a todo app", "1. Use React\n2. Keep it simple");
        assert!(prompt.contains("Generate the complete project files for: a todo app"));
        assert!(prompt.contains("Project Plan:\n1. Use React\n2. Keep it simple"));
    }

    #[test]
    fn test_chat_system_prompt_lists_inventory() {
        let files = vec!["App.js".to_string(), "styles.css".to_string()];
        let prompt = chat_system_prompt(&files);

        assert!(prompt.contains("- App.js\n- styles.css"));
        assert!(prompt.contains("// filename.js"));
    }

    #[test]
    fn test_chat_system_prompt_with_no_files() {
        let prompt = chat_system_prompt(&[]);
        assert!(prompt.contains("Current files:\n\n"));
    }

    #[test]
    fn test_generation_prompt_format_matches_parser() {
        // The format the generation prompt demands must be extractable by
        // the primary response grammar.
        let sample = "```javascript\n// App.js\nfunction App(){return null}\n```";
        assert!(PROJECT_SYSTEM_PROMPT.contains("// App.js"));
        assert_eq!(crate::response::parse_response(sample).len(), 1);
    }
}
