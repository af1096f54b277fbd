//! Template registry
//!
//! Static configuration the composers read from: badge URL patterns, README
//! section templates and `.gitignore` bodies. The built-in set is available
//! through [`Registry::global`]; a replacement set can be loaded from JSON.
//! Registries are read-only once constructed.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A badge image pattern with `{package}`, `{license}`, `{username}` and `{repo}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeTemplate {
    pub id: String,
    pub label: String,
    pub template: String,
}

/// An optional README section the user can add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTemplate {
    pub id: String,
    pub title: String,
    pub emoji: String,
}

/// A group of `.gitignore` templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitignoreCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// A `.gitignore` body for one language, framework, OS or editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitignoreTemplate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub content: String,
}

/// Read-only template configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Registry {
    /// Badges in canonical render order
    pub badges: Vec<BadgeTemplate>,
    pub sections: Vec<SectionTemplate>,
    pub gitignore_categories: Vec<GitignoreCategory>,
    pub gitignore: Vec<GitignoreTemplate>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// The built-in registry, initialised on first use
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::default)
    }

    /// Load a registry from JSON
    ///
    /// Collections missing from the document keep their built-in contents.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let registry: Registry =
            serde_json::from_str(json).map_err(|e| Error::RegistryLoad(e.to_string()))?;
        tracing::debug!(
            badges = registry.badges.len(),
            sections = registry.sections.len(),
            gitignore = registry.gitignore.len(),
            "template registry loaded"
        );
        Ok(registry)
    }

    pub fn badge(&self, id: &str) -> Option<&BadgeTemplate> {
        self.badges.iter().find(|b| b.id == id)
    }

    pub fn section(&self, id: &str) -> Option<&SectionTemplate> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn gitignore_template(&self, id: &str) -> Option<&GitignoreTemplate> {
        self.gitignore.iter().find(|t| t.id == id)
    }

    /// Filter gitignore templates by category id and case-insensitive name substring
    ///
    /// `None` or an empty query matches everything.
    pub fn search_gitignore<'a>(
        &'a self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> impl Iterator<Item = &'a GitignoreTemplate> + use<'a> {
        let query = query.map(str::to_lowercase).filter(|q| !q.is_empty());
        let category = category.map(str::to_owned);

        self.gitignore.iter().filter(move |t| {
            category.as_deref().is_none_or(|c| t.category == c)
                && query
                    .as_deref()
                    .is_none_or(|q| t.name.to_lowercase().contains(q))
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            badges: BUILTIN_BADGES
                .iter()
                .map(|&(id, label, template)| BadgeTemplate {
                    id: id.into(),
                    label: label.into(),
                    template: template.into(),
                })
                .collect(),
            sections: BUILTIN_SECTIONS
                .iter()
                .map(|&(id, title, emoji)| SectionTemplate {
                    id: id.into(),
                    title: title.into(),
                    emoji: emoji.into(),
                })
                .collect(),
            gitignore_categories: BUILTIN_GITIGNORE_CATEGORIES
                .iter()
                .map(|&(id, name, icon)| GitignoreCategory {
                    id: id.into(),
                    name: name.into(),
                    icon: icon.into(),
                })
                .collect(),
            gitignore: BUILTIN_GITIGNORE
                .iter()
                .map(|&(id, name, category, content)| GitignoreTemplate {
                    id: id.into(),
                    name: name.into(),
                    category: category.into(),
                    content: content.into(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Built-in templates
// ============================================================================

const BUILTIN_BADGES: &[(&str, &str, &str)] = &[
    (
        "npm",
        "npm version",
        "![npm](https://img.shields.io/npm/v/{package})",
    ),
    (
        "license",
        "License",
        "![License](https://img.shields.io/badge/license-{license}-blue)",
    ),
    (
        "stars",
        "GitHub Stars",
        "![GitHub stars](https://img.shields.io/github/stars/{username}/{repo})",
    ),
    (
        "forks",
        "GitHub Forks",
        "![GitHub forks](https://img.shields.io/github/forks/{username}/{repo})",
    ),
    (
        "issues",
        "GitHub Issues",
        "![GitHub issues](https://img.shields.io/github/issues/{username}/{repo})",
    ),
    (
        "build",
        "Build Status",
        "![Build Status](https://img.shields.io/github/actions/workflow/status/{username}/{repo}/ci.yml)",
    ),
];

const BUILTIN_SECTIONS: &[(&str, &str, &str)] = &[
    ("features", "Features", "✨"),
    ("demo", "Demo", "🎬"),
    ("api", "API Reference", "📖"),
    ("roadmap", "Roadmap", "🗺️"),
    ("faq", "FAQ", "❓"),
    ("acknowledgments", "Acknowledgments", "🙏"),
];

const BUILTIN_GITIGNORE_CATEGORIES: &[(&str, &str, &str)] = &[
    ("languages", "Languages", "💻"),
    ("frameworks", "Frameworks", "🚀"),
    ("os", "Operating Systems", "🖥️"),
    ("editors", "Editors & IDEs", "📝"),
];

const BUILTIN_GITIGNORE: &[(&str, &str, &str, &str)] = &[
    // Languages
    (
        "node",
        "Node.js",
        "languages",
        "# Node.js\nnode_modules/\nnpm-debug.log*\nyarn-debug.log*\nyarn-error.log*\n.env\n.env.local\n.env.*.local\ndist/\nbuild/\n.npm\n.yarn-integrity\n",
    ),
    (
        "python",
        "Python",
        "languages",
        "# Python\n__pycache__/\n*.py[cod]\n*$py.class\n*.so\nvenv/\nenv/\n.env\n*.egg-info/\ndist/\nbuild/\n.pytest_cache/\n",
    ),
    (
        "java",
        "Java",
        "languages",
        "# Java\n*.class\n*.log\n*.jar\n*.war\n*.nar\n*.ear\n*.zip\n*.tar.gz\n*.rar\nhs_err_pid*\ntarget/\n.gradle/\nbuild/\n",
    ),
    (
        "go",
        "Go",
        "languages",
        "# Go\n*.exe\n*.exe~\n*.dll\n*.so\n*.dylib\n*.test\n*.out\nvendor/\ngo.sum\n",
    ),
    (
        "rust",
        "Rust",
        "languages",
        "# Rust\n/target/\n**/*.rs.bk\nCargo.lock\n*.pdb\n",
    ),
    (
        "ruby",
        "Ruby",
        "languages",
        "# Ruby\n*.gem\n*.rbc\n/.config\n/coverage/\n/InstalledFiles\n/pkg/\n/spec/reports/\n/tmp/\n.bundle/\nvendor/bundle/\n",
    ),
    (
        "php",
        "PHP",
        "languages",
        "# PHP\n/vendor/\ncomposer.phar\ncomposer.lock\n*.log\n.env\n.phpunit.result.cache\n",
    ),
    // Frameworks
    (
        "react",
        "React",
        "frameworks",
        "# React\nnode_modules/\nbuild/\n.env.local\n.env.development.local\n.env.test.local\n.env.production.local\nnpm-debug.log*\n",
    ),
    (
        "nextjs",
        "Next.js",
        "frameworks",
        "# Next.js\n.next/\nout/\nbuild/\nnode_modules/\n.env*.local\nnpm-debug.log*\n.vercel\n*.tsbuildinfo\n",
    ),
    (
        "vue",
        "Vue.js",
        "frameworks",
        "# Vue.js\nnode_modules/\ndist/\n.env.local\n.env.*.local\nnpm-debug.log*\nyarn-debug.log*\nyarn-error.log*\n",
    ),
    (
        "angular",
        "Angular",
        "frameworks",
        "# Angular\ndist/\ntmp/\nout-tsc/\nnode_modules/\n.angular/\n.sass-cache/\n",
    ),
    (
        "django",
        "Django",
        "frameworks",
        "# Django\n*.log\n*.pot\n*.pyc\n__pycache__/\nlocal_settings.py\ndb.sqlite3\nmedia/\nstaticfiles/\n.env\n",
    ),
    (
        "laravel",
        "Laravel",
        "frameworks",
        "# Laravel\n/vendor/\nnode_modules/\n.env\n.env.backup\nstorage/*.key\nHomestead.json\nHomestead.yaml\n",
    ),
    // Operating Systems
    (
        "macos",
        "macOS",
        "os",
        "# macOS\n.DS_Store\n.AppleDouble\n.LSOverride\n._*\n.DocumentRevisions-V100\n.fseventsd\n.Spotlight-V100\n.TemporaryItems\n.Trashes\n.VolumeIcon.icns\n.com.apple.timemachine.donotpresent\n",
    ),
    (
        "windows",
        "Windows",
        "os",
        "# Windows\nThumbs.db\nThumbs.db:encryptable\nehthumbs.db\nehthumbs_vista.db\n*.stackdump\n[Dd]esktop.ini\n$RECYCLE.BIN/\n*.lnk\n",
    ),
    (
        "linux",
        "Linux",
        "os",
        "# Linux\n*~\n.fuse_hidden*\n.directory\n.Trash-*\n.nfs*\n",
    ),
    // Editors
    (
        "vscode",
        "VS Code",
        "editors",
        "# VS Code\n.vscode/*\n!.vscode/settings.json\n!.vscode/tasks.json\n!.vscode/launch.json\n!.vscode/extensions.json\n*.code-workspace\n.history/\n",
    ),
    (
        "intellij",
        "IntelliJ IDEA",
        "editors",
        "# IntelliJ IDEA\n.idea/\n*.iws\n*.iml\n*.ipr\nout/\n.idea_modules/\n",
    ),
    (
        "vim",
        "Vim",
        "editors",
        "# Vim\n[._]*.s[a-v][a-z]\n!*.svg\n[._]*.sw[a-p]\n[._]s[a-rt-v][a-z]\n[._]ss[a-gi-z]\n[._]sw[a-p]\nSession.vim\nNetrwhist\n*~\ntags\n",
    ),
    (
        "sublimetext",
        "Sublime Text",
        "editors",
        "# Sublime Text\n*.tmlanguage.cache\n*.tmPreferences.cache\n*.stTheme.cache\n*.sublime-workspace\n*.sublime-project\nsftp-config.json\n",
    ),
];
