use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "toolkitlab",
    version,
    about = "Developer utilities: inspect JWTs and generate README, .gitignore and meta-tag files"
)]
pub struct Cli {
    /// Load templates from a JSON registry instead of the built-in set
    #[arg(long, global = true, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a JWT and show its header, payload and claims (signature is NOT verified)
    Jwt(JwtArgs),
    /// Generate README.md markdown
    Readme(ReadmeArgs),
    /// Generate HTML meta tags for social previews
    Meta(MetaArgs),
    /// Generate a .gitignore from templates
    Gitignore(GitignoreArgs),
}

#[derive(Args, Debug)]
pub struct JwtArgs {
    /// Token to decode; read from stdin when omitted
    pub token: Option<String>,

    /// Only accept the standard Base64 alphabet
    #[arg(long)]
    pub strict_base64: bool,
}

#[derive(Args, Debug)]
pub struct ReadmeArgs {
    /// Project description as JSON; starter values when omitted
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct MetaArgs {
    /// Page description as JSON; sample values when omitted
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Report title, description, URL and image issues on stderr
    #[arg(long)]
    pub validate: bool,
}

#[derive(Args, Debug)]
pub struct GitignoreArgs {
    /// Template ids, combined in the order given
    pub ids: Vec<String>,

    /// List available templates instead of generating
    #[arg(long)]
    pub list: bool,

    /// Restrict --list to one category (languages, frameworks, os, editors)
    #[arg(long, requires = "list")]
    pub category: Option<String>,

    /// Restrict --list to templates whose name contains this text
    #[arg(long, requires = "list")]
    pub search: Option<String>,

    /// Add the Node.js, macOS and VS Code templates
    #[arg(long)]
    pub popular: bool,
}
