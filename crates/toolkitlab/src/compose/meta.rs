use serde::{Deserialize, Serialize};
use url::Url;

use crate::limits::{
    MAX_META_DESCRIPTION_LENGTH, MAX_META_TITLE_LENGTH, MIN_META_DESCRIPTION_LENGTH,
    MIN_META_TITLE_LENGTH,
};

const FALLBACK_HOST: &str = "example.com";

/// Page details for social preview meta tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaSpec {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub site_name: String,
    /// Twitter handle including the leading `@`; empty to omit `twitter:site`
    pub twitter_handle: String,
}

impl MetaSpec {
    /// Demo values for a fresh editor
    pub fn sample() -> Self {
        Self {
            title: "My Awesome Website".into(),
            description: "The best website for developer tools and resources. Build faster with our curated collection of utilities.".into(),
            url: "https://mysite.com".into(),
            image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=1200&h=630&fit=crop".into(),
            site_name: "My Site".into(),
            twitter_handle: "@mysite".into(),
        }
    }

    /// Host shown on preview cards
    pub fn display_host(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| FALLBACK_HOST.to_string())
    }
}

/// Render the meta-tag snippet
///
/// Values are inserted as given, without HTML escaping.
pub fn compose_meta_html(spec: &MetaSpec) -> String {
    let MetaSpec {
        title,
        description,
        url,
        image,
        site_name,
        twitter_handle,
    } = spec;

    let primary = format!(
        "<!-- Primary Meta Tags -->\n\
         <title>{title}</title>\n\
         <meta name=\"title\" content=\"{title}\">\n\
         <meta name=\"description\" content=\"{description}\">"
    );

    let open_graph = format!(
        "<!-- Open Graph / Facebook -->\n\
         <meta property=\"og:type\" content=\"website\">\n\
         <meta property=\"og:url\" content=\"{url}\">\n\
         <meta property=\"og:title\" content=\"{title}\">\n\
         <meta property=\"og:description\" content=\"{description}\">\n\
         <meta property=\"og:image\" content=\"{image}\">\n\
         <meta property=\"og:site_name\" content=\"{site_name}\">"
    );

    let mut twitter = format!(
        "<!-- Twitter -->\n\
         <meta property=\"twitter:card\" content=\"summary_large_image\">\n\
         <meta property=\"twitter:url\" content=\"{url}\">\n\
         <meta property=\"twitter:title\" content=\"{title}\">\n\
         <meta property=\"twitter:description\" content=\"{description}\">\n\
         <meta property=\"twitter:image\" content=\"{image}\">"
    );
    if !twitter_handle.is_empty() {
        twitter.push_str(&format!(
            "\n<meta property=\"twitter:site\" content=\"{twitter_handle}\">"
        ));
    }

    let linkedin = format!(
        "<!-- LinkedIn -->\n\
         <meta property=\"og:locale\" content=\"en_US\">\n\
         <meta name=\"author\" content=\"{site_name}\">"
    );

    let canonical = format!("<!-- Canonical -->\n<link rel=\"canonical\" href=\"{url}\">");

    let html = [primary, open_graph, twitter, linkedin, canonical].join("\n\n");
    tracing::debug!(bytes = html.len(), "composed meta tags");
    html
}

/// Advisory checks on a meta spec, empty when nothing stands out
///
/// Title and description lengths count Unicode scalar values. Browsers count
/// UTF-16 code units, so text with characters outside the Basic Multilingual
/// Plane (most emoji) measures shorter here than in a page script.
pub fn validate_meta_spec(spec: &MetaSpec) -> Vec<String> {
    let mut issues = Vec::new();

    let title_len = spec.title.chars().count();
    if title_len > MAX_META_TITLE_LENGTH {
        issues.push(format!("Title exceeds {MAX_META_TITLE_LENGTH} characters"));
    } else if title_len < MIN_META_TITLE_LENGTH {
        issues.push("Title is too short".to_string());
    }

    let description_len = spec.description.chars().count();
    if description_len > MAX_META_DESCRIPTION_LENGTH {
        issues.push(format!(
            "Description exceeds {MAX_META_DESCRIPTION_LENGTH} characters"
        ));
    } else if description_len < MIN_META_DESCRIPTION_LENGTH {
        issues.push("Description is too short".to_string());
    }

    if !spec.url.starts_with("http") {
        issues.push("URL should start with http:// or https://".to_string());
    }

    if spec.image.is_empty() {
        issues.push("Image URL is missing".to_string());
    }

    issues
}
