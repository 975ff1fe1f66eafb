//! # rs-mobilizer
//!
//! Reduces a full web page to its article body for reading on a small
//! screen.
//!
//! The page is normalized (scripts, styles and form selects removed), then
//! the article root is chosen by a per-site rule or by a weighted scan of
//! candidate blocks, and the result is post-processed into a compact HTML
//! fragment: hidden classes dropped, the page image promoted, tables
//! flattened.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_mobilizer::{mobilize, Options};
//!
//! let html = r#"<html><body>
//!     <div class="sidebar">Links</div>
//!     <div class="content">A long enough article body.</div>
//! </body></html>"#;
//!
//! let result = mobilize(html.as_bytes(), &Options::default())?;
//! assert_eq!(result.html, r#"<div class="content">A long enough article body.</div>"#);
//! # Ok::<(), rs_mobilizer::Error>(())
//! ```
//!
//! ## Rules
//!
//! Sites the scan gets wrong can be pinned with rules of the form
//! `keyword:id=value` or `keyword:class=value`; see [`selector::rules`].
//!
//! ## Tag overlay
//!
//! [`MobilizeMode::MobilizeWithTagOverlay`] annotates every class on the
//! page with controls calling `openTagMenu(class, domain, action)`, which a
//! host UI uses to build rules and remove-lists.

mod error;
mod extract;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Compiled patterns and tag tables used for scoring.
pub mod patterns;

/// Best-element selection and per-site rules.
pub mod selector;

/// Parsing, normalization and candidate collection.
pub mod html_processing;

/// Candidate weighting.
pub mod scoring;

/// Hidden classes, title de-duplication, image promotion and comments.
pub mod postprocess;

/// Table flattening and header stripping.
pub mod tables;

/// Interactive tag overlay.
pub mod overlay;

/// Collaborator traits and their default implementations.
pub mod hooks;

/// URL utilities for link resolution and overlay domains.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use hooks::{AbsoluteLinks, ByteSink, CancelFlag, Hooks, MarkupRewriter};
pub use options::{MobilizeMode, Options};
pub use result::{MobilizeResult, SelectionKind};
pub use selector::rules::{parse_rules, ExtractionRule, RuleError, RuleParse, TargetType};

/// Mobilizes an HTML document with default collaborators.
///
/// # Arguments
///
/// * `html` - The raw page bytes; the charset is taken from `<meta>` tags
/// * `options` - URL, mode, rules and feature flags
///
/// # Errors
///
/// Returns [`Error::MissingDocument`] for empty input.
///
/// # Example
///
/// ```rust
/// use rs_mobilizer::{mobilize, MobilizeMode, Options};
///
/// let options = Options {
///     mode: MobilizeMode::None,
///     ..Options::default()
/// };
/// let result = mobilize(b"<table><tr><td>a</td></tr></table>", &options)?;
/// assert!(result.html.contains("<p>a</p>"));
/// # Ok::<(), rs_mobilizer::Error>(())
/// ```
pub fn mobilize(html: &[u8], options: &Options) -> Result<MobilizeResult> {
    mobilize_with_hooks(html, options, &Hooks::default())
}

/// Mobilizes an HTML document, reporting to and consulting `hooks`.
///
/// # Errors
///
/// Returns [`Error::MissingDocument`] for empty input.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use rs_mobilizer::{mobilize_with_hooks, AbsoluteLinks, Hooks, Options};
///
/// let bytes = AtomicUsize::new(0);
/// let hooks = Hooks {
///     bytes: &bytes,
///     markup: &AbsoluteLinks,
///     ..Hooks::default()
/// };
/// let options = Options {
///     url: "https://example.com/news/1".to_string(),
///     ..Options::default()
/// };
/// let html = r#"<div class="post"><a href="/about">About</a> and more text here</div>"#;
/// let result = mobilize_with_hooks(html.as_bytes(), &options, &hooks)?;
/// assert!(result.html.contains(r#"href="https://example.com/about""#));
/// assert_eq!(bytes.load(Ordering::Relaxed), html.len());
/// # Ok::<(), rs_mobilizer::Error>(())
/// ```
pub fn mobilize_with_hooks(html: &[u8], options: &Options, hooks: &Hooks) -> Result<MobilizeResult> {
    extract::mobilize_content(html, options, hooks)
}

/// Mobilizes an already decoded document.
///
/// # Errors
///
/// Returns [`Error::MissingDocument`] for empty input.
pub fn mobilize_str(html: &str, options: &Options) -> Result<MobilizeResult> {
    mobilize(html.as_bytes(), options)
}
