//! Text artifact composers
//!
//! Each composer renders a plain input value into a finished artifact. They
//! are pure functions of their input (and the registry they read templates
//! from) apart from the gitignore date stamp, which has a fixed-date variant.

mod gitignore;
mod meta;
mod readme;

pub use gitignore::{GitignoreSelection, compose_gitignore, compose_gitignore_on};
pub use meta::{MetaSpec, compose_meta_html, validate_meta_spec};
pub use readme::{ArtifactSpec, CustomSection, Feature, License, compose_readme, compose_readme_with};
