//! Developer toolkit: token inspection and text artifact generation.
//!
//! [`decode_token`] splits a compact JWT and decodes its header and payload
//! for display. **Signatures are never verified**; a `Valid` result only
//! means the token is well-formed.
//!
//! The composers turn structured input into README markdown
//! ([`compose_readme`]), HTML meta tags ([`compose_meta_html`]) and
//! `.gitignore` files ([`compose_gitignore`]), reading templates from a
//! [`Registry`].

mod error;

// Internal modules
pub(crate) mod compose;
pub(crate) mod registry;
pub(crate) mod token;
pub mod utils;

// Public Interface
pub use compose::{
    ArtifactSpec, CustomSection, Feature, GitignoreSelection, License, MetaSpec,
    compose_gitignore, compose_gitignore_on, compose_meta_html, compose_readme,
    compose_readme_with, validate_meta_spec,
};
pub use error::{Error, Result};
pub use registry::{BadgeTemplate, GitignoreCategory, GitignoreTemplate, Registry, SectionTemplate};
pub use token::{
    Claim, DecodedToken, ErrorKind, JsonObject, TokenDecoder, decode_token, derive_claims,
    derive_claims_at,
};

pub(crate) mod limits;
