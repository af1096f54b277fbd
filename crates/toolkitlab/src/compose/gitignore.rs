use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::registry::{GitignoreTemplate, Registry};
use crate::utils::datetime;

const PLACEHOLDER: &str = "# Select templates from the left panel to generate your .gitignore file\n\n\
                           # Tip: You can select multiple templates and they will be combined automatically";

const POPULAR: [&str; 3] = ["node", "macos", "vscode"];

/// Template ids picked by the user, in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GitignoreSelection(Vec<String>);

impl GitignoreSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a template id, returning whether it is now selected
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.0.iter().position(|selected| selected == id) {
            Some(pos) => {
                self.0.remove(pos);
                false
            }
            None => {
                self.0.push(id.to_string());
                true
            }
        }
    }

    /// Add the common Node.js, macOS and VS Code templates
    pub fn select_popular(&mut self) {
        for id in POPULAR {
            if !self.contains(id) {
                self.0.push(id.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for GitignoreSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            let id = id.into();
            if !selection.contains(&id) {
                selection.0.push(id);
            }
        }
        selection
    }
}

/// Combine the selected templates, stamped with today's UTC date
pub fn compose_gitignore<S: AsRef<str>>(selected: &[S], registry: &Registry) -> String {
    compose_gitignore_on(selected, registry, OffsetDateTime::now_utc().date())
}

/// Combine the selected templates, stamped with `date`
///
/// Bodies appear in selection order. Unknown ids are skipped; a selection
/// with no known ids yields the placeholder text.
pub fn compose_gitignore_on<S: AsRef<str>>(
    selected: &[S],
    registry: &Registry,
    date: Date,
) -> String {
    let templates: Vec<&GitignoreTemplate> = selected
        .iter()
        .filter_map(|id| {
            let id = id.as_ref();
            let template = registry.gitignore_template(id);
            if template.is_none() {
                tracing::warn!(template = %id, "skipping unknown gitignore template");
            }
            template
        })
        .collect();

    if templates.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
    let bodies: Vec<&str> = templates.iter().map(|t| t.content.as_str()).collect();
    let generated_on = datetime::format_date(date).unwrap_or_else(|| date.to_string());

    let output = format!(
        "# Generated by toolkitLab - gitignore Generator\n\
         # Templates: {}\n\
         # Generated on: {generated_on}\n\n\
         {}",
        names.join(", "),
        bodies.join("\n"),
    );

    tracing::debug!(templates = templates.len(), bytes = output.len(), "composed gitignore");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_empty_selection_placeholder() {
        let output = compose_gitignore_on::<&str>(&[], &Registry::default(), date!(2024 - 03 - 05));
        assert_eq!(
            output,
            "# Select templates from the left panel to generate your .gitignore file\n\n\
             # Tip: You can select multiple templates and they will be combined automatically"
        );
    }

    #[test]
    fn test_header_and_order() {
        let output = compose_gitignore_on(
            &["rust", "linux"],
            &Registry::default(),
            date!(2024 - 03 - 05),
        );

        assert_eq!(
            output,
            "# Generated by toolkitLab - gitignore Generator\n\
             # Templates: Rust, Linux\n\
             # Generated on: 3/5/2024\n\n\
             # Rust\n/target/\n**/*.rs.bk\nCargo.lock\n*.pdb\n\n\
             # Linux\n*~\n.fuse_hidden*\n.directory\n.Trash-*\n.nfs*\n"
        );
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let registry = Registry::default();
        let day = date!(2024 - 03 - 05);

        let output = compose_gitignore_on(&["cobol", "go"], &registry, day);
        assert!(output.contains("# Templates: Go\n"));

        let output = compose_gitignore_on(&["cobol"], &registry, day);
        assert!(output.starts_with("# Select templates"));
    }

    #[test]
    fn test_toggle() {
        let mut selection = GitignoreSelection::new();
        assert!(selection.toggle("node"));
        assert!(selection.toggle("python"));
        assert!(!selection.toggle("node"));
        assert_eq!(selection.ids(), ["python"]);
    }

    #[test]
    fn test_select_popular_keeps_existing_order() {
        let mut selection: GitignoreSelection = ["vscode", "rust"].into_iter().collect();
        selection.select_popular();
        assert_eq!(selection.ids(), ["vscode", "rust", "node", "macos"]);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_from_iter_drops_duplicates() {
        let selection: GitignoreSelection = ["go", "go", "java"].into_iter().collect();
        assert_eq!(selection.ids(), ["go", "java"]);
    }
}
