use serde::{Deserialize, Serialize};

/// Semantic language tag for a generated file.
///
/// Derived from the file extension or from the language token declared on a
/// fenced segment. Anything unrecognized lands on [`Language::Text`]; there
/// is deliberately no error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Css,
    Scss,
    Html,
    Json,
    Markdown,
    Python,
    Text,
}

impl Language {
    /// Map a fence language token (e.g. `javascript`, `jsx`) to a tag.
    ///
    /// Returns `None` for unknown tokens so the caller can fall back to
    /// classifying by file name instead.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Some(Self::Javascript),
            "typescript" | "ts" | "tsx" => Some(Self::Typescript),
            "css" => Some(Self::Css),
            "scss" => Some(Self::Scss),
            "html" | "htm" => Some(Self::Html),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "python" | "py" => Some(Self::Python),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Html => "html",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Python => "python",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a file name by its extension (case-insensitive).
///
/// Total function: a missing or unmapped extension classifies as
/// [`Language::Text`].
pub fn classify(file_name: &str) -> Language {
    let ext = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => return Language::Text,
    };

    match ext.as_str() {
        "js" | "jsx" => Language::Javascript,
        "ts" | "tsx" => Language::Typescript,
        "css" => Language::Css,
        "scss" => Language::Scss,
        "html" | "htm" => Language::Html,
        "json" => Language::Json,
        "md" => Language::Markdown,
        "py" => Language::Python,
        _ => Language::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_table() {
        assert_eq!(classify("App.js"), Language::Javascript);
        assert_eq!(classify("App.jsx"), Language::Javascript);
        assert_eq!(classify("main.ts"), Language::Typescript);
        assert_eq!(classify("main.tsx"), Language::Typescript);
        assert_eq!(classify("styles.css"), Language::Css);
        assert_eq!(classify("styles.scss"), Language::Scss);
        assert_eq!(classify("index.html"), Language::Html);
        assert_eq!(classify("index.htm"), Language::Html);
        assert_eq!(classify("package.json"), Language::Json);
        assert_eq!(classify("README.md"), Language::Markdown);
        assert_eq!(classify("script.py"), Language::Python);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(classify("App.JS"), Language::Javascript);
        assert_eq!(classify("INDEX.HTML"), Language::Html);
    }

    #[test]
    fn test_unknown_extension_defaults_to_text() {
        assert_eq!(classify("main.rs"), Language::Text);
        assert_eq!(classify("data.csv"), Language::Text);
    }

    #[test]
    fn test_missing_extension_defaults_to_text() {
        assert_eq!(classify("Makefile"), Language::Text);
        assert_eq!(classify(""), Language::Text);
        // A leading dot with no stem is not an extension.
        assert_eq!(classify(".gitignore"), Language::Text);
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Language::from_token("javascript"), Some(Language::Javascript));
        assert_eq!(Language::from_token("jsx"), Some(Language::Javascript));
        assert_eq!(Language::from_token("CSS"), Some(Language::Css));
        assert_eq!(Language::from_token("zig"), None);
        assert_eq!(Language::from_token(""), None);
    }
}
