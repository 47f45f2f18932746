use serde::Serialize;

use crate::response::GeneratedFile;

/// One entry of the project state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFile {
    pub name: String,
    pub content: String,
}

/// In-memory project file state: file name to current content.
///
/// Entries keep first-introduction order so listing surfaces stay stable
/// across updates. The state supports exactly two generation write modes
/// plus direct editor writes:
///
/// - [`replace`](Self::replace) — a full generation becomes the entire new
///   state; previously existing files not present in the batch are
///   discarded.
/// - [`merge`](Self::merge) — an incremental (chat) generation updates only
///   the names it contains, leaving everything else untouched.
/// - [`set`](Self::set) — a single direct write from the editing surface.
///
/// Duplicate names within one batch resolve later-occurrence-wins. There is
/// no remove operation; a file can only be superseded, never deleted, until
/// the next full replace.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectState {
    files: Vec<ProjectFile>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-generation write: the batch becomes the entire new state.
    pub fn replace(&mut self, files: &[GeneratedFile]) {
        self.files.clear();
        self.merge(files);
    }

    /// Incremental write: update or introduce only the named keys.
    pub fn merge(&mut self, files: &[GeneratedFile]) {
        for file in files {
            self.set(&file.name, &file.content);
        }
    }

    /// Direct write for a single file, e.g. from the editor surface.
    pub fn set(&mut self, name: &str, content: &str) {
        match self.files.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.content = content.to_string(),
            None => self.files.push(ProjectFile {
                name: name.to_string(),
                content: content.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.content.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }

    /// File names in first-introduction order.
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn file(name: &str, content: &str) -> GeneratedFile {
        GeneratedFile {
            name: name.to_string(),
            content: content.to_string(),
            language: Language::Text,
        }
    }

    #[test]
    fn test_replace_discards_previous_entries() {
        let mut state = ProjectState::new();
        state.replace(&[file("App.js", "old"), file("styles.css", "old")]);
        state.replace(&[file("index.html", "<h1>new</h1>")]);

        assert_eq!(state.len(), 1);
        assert!(!state.contains("App.js"));
        assert_eq!(state.get("index.html"), Some("<h1>new</h1>"));
    }

    #[test]
    fn test_merge_touches_only_named_keys() {
        let mut state = ProjectState::new();
        state.replace(&[
            file("App.js", "component"),
            file("styles.css", "body{margin:0}"),
            file("README.md", "docs"),
        ]);

        state.merge(&[file("App.js", "updated component")]);

        assert_eq!(state.get("App.js"), Some("updated component"));
        // Untouched keys remain byte-identical.
        assert_eq!(state.get("styles.css"), Some("body{margin:0}"));
        assert_eq!(state.get("README.md"), Some("docs"));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_merge_introduces_new_files() {
        let mut state = ProjectState::new();
        state.replace(&[file("App.js", "component")]);
        state.merge(&[file("utils.js", "helpers")]);

        assert_eq!(state.names(), vec!["App.js", "utils.js"]);
    }

    #[test]
    fn test_duplicate_names_later_occurrence_wins() {
        let mut state = ProjectState::new();
        state.replace(&[file("App.js", "first"), file("App.js", "second")]);

        assert_eq!(state.len(), 1);
        assert_eq!(state.get("App.js"), Some("second"));

        state.merge(&[file("App.js", "third"), file("App.js", "fourth")]);
        assert_eq!(state.get("App.js"), Some("fourth"));
    }

    #[test]
    fn test_set_preserves_introduction_order() {
        let mut state = ProjectState::new();
        state.replace(&[file("App.js", "a"), file("styles.css", "b")]);
        state.set("App.js", "edited");

        assert_eq!(state.names(), vec!["App.js", "styles.css"]);
        assert_eq!(state.get("App.js"), Some("edited"));
    }

    #[test]
    fn test_empty_state() {
        let state = ProjectState::new();
        assert!(state.is_empty());
        assert_eq!(state.get("App.js"), None);
    }
}
