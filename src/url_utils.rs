//! URL helpers for the mobilize pipeline.
//!
//! The pipeline needs three things from the request URL: the base
//! (`scheme://host`) handed to the link rewriter, the host used as the
//! domain parameter of overlay controls, and resolution of relative links.

use url::Url;

/// Parse a string as an absolute `http`/`https` URL with a host.
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Resolve `link` against `base`.
///
/// Absolute links and special schemes (`data:`, `javascript:`, `mailto:`,
/// `tel:`) and fragment-only links are returned unchanged, so resolving an
/// already resolved link is a no-op.
#[must_use]
pub fn resolve_link(link: &str, base: &Url) -> String {
    let trimmed = link.trim();

    if trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("data:")
        || trimmed.starts_with("javascript:")
        || trimmed.starts_with("mailto:")
        || trimmed.starts_with("tel:")
        || parse_absolute(trimmed).is_some()
    {
        return link.to_string();
    }

    match base.join(trimmed) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => link.to_string(),
    }
}

/// Host part of a URL, or an empty string when the URL is not absolute.
#[must_use]
pub fn get_domain(url_str: &str) -> String {
    parse_absolute(url_str)
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// `scheme://host[:port]` of a URL, or an empty string when not absolute.
#[must_use]
pub fn get_base_url(url_str: &str) -> String {
    let Some(url) = parse_absolute(url_str) else {
        return String::new();
    };
    let Some(host) = url.host_str() else {
        return String::new();
    };

    match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    }
}
