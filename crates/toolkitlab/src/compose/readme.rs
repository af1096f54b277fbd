use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::Registry;

const DEFAULT_TITLE: &str = "Project Title";
const DEFAULT_DESCRIPTION: &str = "A brief description of your project.";
const DEFAULT_PACKAGE: &str = "package-name";
const DEFAULT_USERNAME: &str = "username";
const DEFAULT_REPO: &str = "repo";

/// License offered by the README generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "ISC")]
    Isc,
    #[serde(rename = "Unlicense")]
    Unlicense,
}

impl License {
    pub const ALL: [License; 6] = [
        License::Mit,
        License::Apache2,
        License::Gpl3,
        License::Bsd3Clause,
        License::Isc,
        License::Unlicense,
    ];

    /// SPDX identifier
    pub fn id(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Isc => "ISC",
            License::Unlicense => "Unlicense",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            License::Mit => "MIT License",
            License::Apache2 => "Apache 2.0",
            License::Gpl3 => "GPL 3.0",
            License::Bsd3Clause => "BSD 3-Clause",
            License::Isc => "ISC",
            License::Unlicense => "Unlicense",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for License {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        License::ALL
            .into_iter()
            .find(|license| license.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLicense(s.to_string()))
    }
}

/// A bullet in the features list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub text: String,
}

/// A user-added README section, created from a [`SectionTemplate`](crate::SectionTemplate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub emoji: String,
    #[serde(default)]
    pub content: String,
}

/// Everything the README generator knows about a project
///
/// The caller owns and edits this value; [`compose_readme`] only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtifactSpec {
    pub title: String,
    pub description: String,
    pub installation: String,
    pub usage: String,
    pub contributing: String,
    pub license: License,
    pub author: String,
    pub github_username: String,
    pub repo_name: String,
    /// Display order is insertion order
    pub features: Vec<Feature>,
    /// Rendered in canonical registry order, not selection order
    pub badges: BTreeSet<String>,
    /// Rendered in exactly this order
    pub custom_sections: Vec<CustomSection>,
}

impl ArtifactSpec {
    /// A spec pre-filled with the generator's starting values
    pub fn starter() -> Self {
        Self {
            installation: "npm install my-project".into(),
            usage: "npm start".into(),
            contributing:
                "Contributions are welcome! Please feel free to submit a Pull Request.".into(),
            ..Self::default()
        }
    }

    /// Append a feature; blank text is ignored
    pub fn add_feature(&mut self, text: &str) -> Option<&Feature> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let next_id = self
            .features
            .iter()
            .filter_map(|f| f.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        self.features.push(Feature {
            id: next_id.to_string(),
            text: text.to_string(),
        });
        self.features.last()
    }

    pub fn remove_feature(&mut self, id: &str) -> bool {
        let before = self.features.len();
        self.features.retain(|f| f.id != id);
        self.features.len() != before
    }

    /// Select or deselect a badge, returning whether it is now selected
    pub fn toggle_badge(&mut self, id: &str) -> bool {
        if self.badges.remove(id) {
            false
        } else {
            self.badges.insert(id.to_string());
            true
        }
    }

    /// Add an empty section from a registry template
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSection`] when the registry has no such template,
    /// [`Error::DuplicateSection`] when the section was already added.
    pub fn add_section(&mut self, template_id: &str, registry: &Registry) -> Result<()> {
        let template = registry
            .section(template_id)
            .ok_or_else(|| Error::UnknownSection(template_id.to_string()))?;

        if self.custom_sections.iter().any(|s| s.id == template_id) {
            return Err(Error::DuplicateSection(template_id.to_string()));
        }

        self.custom_sections.push(CustomSection {
            id: template.id.clone(),
            title: template.title.clone(),
            emoji: template.emoji.clone(),
            content: String::new(),
        });
        Ok(())
    }

    pub fn remove_section(&mut self, id: &str) -> bool {
        let before = self.custom_sections.len();
        self.custom_sections.retain(|s| s.id != id);
        self.custom_sections.len() != before
    }

    pub fn update_section_content(&mut self, id: &str, content: impl Into<String>) -> bool {
        match self.custom_sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Replace the section order in one step
    ///
    /// `new_order` must name every current section exactly once. On error the
    /// sections are left untouched.
    pub fn reorder_sections<S: AsRef<str>>(&mut self, new_order: &[S]) -> Result<()> {
        let mut expected: Vec<&str> = self.custom_sections.iter().map(|s| s.id.as_str()).collect();
        let mut found: Vec<&str> = new_order.iter().map(|id| id.as_ref()).collect();
        expected.sort_unstable();
        found.sort_unstable();

        if expected != found {
            return Err(Error::InvalidSectionOrder {
                expected: self.custom_sections.iter().map(|s| s.id.clone()).collect(),
                found: new_order.iter().map(|id| id.as_ref().to_string()).collect(),
            });
        }

        let mut remaining = std::mem::take(&mut self.custom_sections);
        for id in new_order {
            if let Some(pos) = remaining.iter().position(|s| s.id == id.as_ref()) {
                self.custom_sections.push(remaining.remove(pos));
            }
        }
        Ok(())
    }

    fn package_or_default(&self) -> &str {
        non_empty_or(&self.repo_name, DEFAULT_PACKAGE)
    }
}

/// Render a README with the built-in registry
pub fn compose_readme(spec: &ArtifactSpec) -> String {
    compose_readme_with(spec, Registry::global())
}

/// Render a README, resolving badges against `registry`
///
/// Never fails: missing title and description fall back to placeholder text
/// and empty optional sections are left out.
pub fn compose_readme_with(spec: &ArtifactSpec, registry: &Registry) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(format!("# {}", non_empty_or(&spec.title, DEFAULT_TITLE)));

    let badges = render_badges(spec, registry);
    if !badges.is_empty() {
        blocks.push(badges);
    }

    blocks.push(non_empty_or(&spec.description, DEFAULT_DESCRIPTION).to_string());
    blocks.push(format!(
        "## 📦 Installation\n\n```bash\n{}\n```",
        spec.installation
    ));
    blocks.push(format!("## 🚀 Usage\n\n```bash\n{}\n```", spec.usage));

    if !spec.features.is_empty() {
        let bullets: Vec<String> = spec
            .features
            .iter()
            .map(|f| format!("- {}", f.text))
            .collect();
        blocks.push(format!("## ✨ Features\n\n{}", bullets.join("\n")));
    }

    for section in &spec.custom_sections {
        if !section.content.is_empty() {
            blocks.push(format!(
                "## {} {}\n\n{}",
                section.emoji, section.title, section.content
            ));
        }
    }

    if !spec.contributing.is_empty() {
        blocks.push(format!("## 🤝 Contributing\n\n{}", spec.contributing));
    }

    if !spec.author.is_empty() {
        let mut author = format!("## 👤 Author\n\n**{}**", spec.author);
        if !spec.github_username.is_empty() {
            author.push_str(&format!(
                "\n- GitHub: [@{user}](https://github.com/{user})",
                user = spec.github_username
            ));
        }
        blocks.push(author);
    }

    blocks.push(format!(
        "## 📝 License\n\nThis project is [{}](LICENSE) licensed.",
        spec.license
    ));
    blocks.push("---".to_string());

    if !spec.github_username.is_empty() && !spec.repo_name.is_empty() {
        blocks.push(format!(
            "⭐️ If you found this project helpful, please give it a star on [GitHub](https://github.com/{}/{})!",
            spec.github_username, spec.repo_name
        ));
    } else {
        blocks.push("⭐️ If you found this project helpful, please give it a star!".to_string());
    }

    let mut markdown = blocks.join("\n\n");
    markdown.push('\n');

    tracing::debug!(bytes = markdown.len(), "composed README");
    markdown
}

/// Selected badges in registry order, joined by single spaces
fn render_badges(spec: &ArtifactSpec, registry: &Registry) -> String {
    for id in &spec.badges {
        if registry.badge(id).is_none() {
            tracing::warn!(badge = %id, "skipping unknown badge");
        }
    }

    let rendered: Vec<String> = registry
        .badges
        .iter()
        .filter(|badge| spec.badges.contains(&badge.id))
        .map(|badge| {
            badge
                .template
                .replace("{package}", spec.package_or_default())
                .replace("{license}", spec.license.id())
                .replace(
                    "{username}",
                    non_empty_or(&spec.github_username, DEFAULT_USERNAME),
                )
                .replace("{repo}", non_empty_or(&spec.repo_name, DEFAULT_REPO))
        })
        .collect();

    rendered.join(" ")
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
