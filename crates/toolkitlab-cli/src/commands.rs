use std::fmt::Write as _;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use toolkitlab::{
    ArtifactSpec, DecodedToken, GitignoreSelection, MetaSpec, Registry, TokenDecoder,
    compose_gitignore, compose_meta_html, compose_readme_with, validate_meta_spec,
};

use crate::args::{Cli, Command, GitignoreArgs, JwtArgs, MetaArgs, ReadmeArgs};
use crate::exit_codes::{INVALID_TOKEN, SUCCESS};

pub fn dispatch(cli: Cli) -> Result<u8> {
    let loaded = cli.registry.as_deref().map(load_registry).transpose()?;
    let registry = loaded.as_ref().unwrap_or_else(|| Registry::global());

    match cli.cmd {
        Command::Jwt(args) => jwt(args),
        Command::Readme(args) => readme(args, registry),
        Command::Meta(args) => meta(args),
        Command::Gitignore(args) => gitignore(args, registry),
    }
}

fn load_registry(path: &Path) -> Result<Registry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read registry {}", path.display()))?;
    let registry = Registry::from_json_str(&json)
        .with_context(|| format!("invalid registry {}", path.display()))?;
    tracing::info!(path = %path.display(), "using custom template registry");
    Ok(registry)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn jwt(args: JwtArgs) -> Result<u8> {
    let raw = match args.token {
        Some(token) => token,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read token from stdin")?;
            buf
        }
    };

    let decoder = if args.strict_base64 {
        TokenDecoder::new().strict_alphabet()
    } else {
        TokenDecoder::new()
    };

    let Some(token) = decoder.decode(&raw) else {
        bail!("no token provided");
    };

    if let Some(message) = token.error_message() {
        eprintln!("{message}");
        return Ok(INVALID_TOKEN);
    }

    print!("{}", render_token(&token));
    Ok(SUCCESS)
}

/// Plain-text report of a decoded token
fn render_token(token: &DecodedToken) -> String {
    let mut out = String::new();

    match token.algorithm() {
        Some(alg) => {
            let _ = writeln!(out, "Header (alg: {alg})");
        }
        None => out.push_str("Header\n"),
    }
    let _ = writeln!(out, "{}\n", token.header_json());
    let _ = writeln!(out, "Payload\n{}\n", token.payload_json());
    let _ = writeln!(out, "Signature (not verified)\n{}", token.signature());

    let claims = token.claims();
    if !claims.is_empty() {
        out.push_str("\nClaims\n");
        let width = claims.iter().map(|c| c.label.len()).max().unwrap_or(0);
        for claim in &claims {
            let marker = if claim.is_expired { "  [expired]" } else { "" };
            let _ = writeln!(
                out,
                "  {:<width$}  {}{marker}",
                claim.label, claim.display_value
            );
        }
    }

    out
}

fn readme(args: ReadmeArgs, registry: &Registry) -> Result<u8> {
    let spec = match args.spec {
        Some(path) => read_json::<ArtifactSpec>(&path)?,
        None => ArtifactSpec::starter(),
    };

    print!("{}", compose_readme_with(&spec, registry));
    Ok(SUCCESS)
}

fn meta(args: MetaArgs) -> Result<u8> {
    let spec = match args.spec {
        Some(path) => read_json::<MetaSpec>(&path)?,
        None => MetaSpec::sample(),
    };

    if args.validate {
        for issue in validate_meta_spec(&spec) {
            eprintln!("warning: {issue}");
        }
    }

    println!("{}", compose_meta_html(&spec));
    Ok(SUCCESS)
}

fn gitignore(args: GitignoreArgs, registry: &Registry) -> Result<u8> {
    if args.list {
        print!(
            "{}",
            render_template_list(registry, args.category.as_deref(), args.search.as_deref())
        );
        return Ok(SUCCESS);
    }

    let mut selection: GitignoreSelection = args.ids.into_iter().collect();
    if args.popular {
        selection.select_popular();
    }

    let output = compose_gitignore(selection.ids(), registry);
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(SUCCESS)
}

/// Templates grouped by category, filtered like the picker's search box
fn render_template_list(registry: &Registry, category: Option<&str>, query: Option<&str>) -> String {
    let mut out = String::new();

    for group in &registry.gitignore_categories {
        if category.is_some_and(|c| c != group.id) {
            continue;
        }

        let templates: Vec<_> = registry.search_gitignore(query, Some(group.id.as_str())).collect();
        if templates.is_empty() {
            continue;
        }

        let _ = writeln!(out, "{} {}", group.icon, group.name);
        for template in templates {
            let _ = writeln!(out, "  {:<10}  {}", template.id, template.name);
        }
    }

    out
}
