//! Collaborators the pipeline calls out to.
//!
//! Byte accounting, cancellation and link rewriting belong to the host
//! application. Each is a small trait; [`Hooks`] bundles borrowed
//! implementations for one call. The defaults do nothing (or leave markup
//! untouched), so library users only wire up what they need.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use url::Url;

use crate::dom;
use crate::options::MobilizeMode;
use crate::url_utils;

/// Receives the raw size of every parsed document.
pub trait ByteSink {
    fn add_bytes(&self, len: usize);
}

/// Cooperative cancellation, polled between normalization passes.
pub trait CancelFlag {
    fn is_cancelled(&self) -> bool;
}

/// Link/URL normalization applied to the finished fragment.
///
/// Implementations must be idempotent on their own output and must not
/// drop element content.
pub trait MarkupRewriter {
    fn improve_markup(&self, html: &str, base_url: &str, mode: MobilizeMode) -> String;
}

/// Discards byte counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ByteSink for NoopSink {
    fn add_bytes(&self, _len: usize) {}
}

impl ByteSink for AtomicUsize {
    fn add_bytes(&self, len: usize) {
        self.fetch_add(len, Ordering::Relaxed);
    }
}

/// Never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl CancelFlag for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelFlag for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Returns markup unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRewriter;

impl MarkupRewriter for IdentityRewriter {
    fn improve_markup(&self, html: &str, _base_url: &str, _mode: MobilizeMode) -> String {
        html.to_string()
    }
}

/// `href`/`src` attribute in serialized markup (always double-quoted).
#[allow(clippy::expect_used)]
static LINK_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)(href|src)="([^"]*)""#).expect("LINK_ATTR regex")
});

/// Resolves relative `href` and `src` values against the base URL.
///
/// Works on the serialized markup so everything except the rewritten
/// attribute values is left byte-for-byte intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteLinks;

impl MarkupRewriter for AbsoluteLinks {
    fn improve_markup(&self, html: &str, base_url: &str, _mode: MobilizeMode) -> String {
        let Some(base) = url_utils::parse_absolute(base_url) else {
            return html.to_string();
        };

        LINK_ATTR
            .replace_all(html, |caps: &Captures| rewrite_attr(caps, &base))
            .into_owned()
    }
}

fn rewrite_attr(caps: &Captures, base: &Url) -> String {
    let raw = &caps[3];
    let value = raw.replace("&amp;", "&");
    let resolved = url_utils::resolve_link(&value, base);
    let written = if resolved == value {
        raw.to_string()
    } else {
        dom::escape_attribute(&resolved)
    };
    format!("{}{}=\"{written}\"", &caps[1], &caps[2])
}

/// Borrowed collaborators for one mobilize call.
#[derive(Clone, Copy)]
pub struct Hooks<'a> {
    pub bytes: &'a dyn ByteSink,
    pub cancel: &'a dyn CancelFlag,
    pub markup: &'a dyn MarkupRewriter,
}

impl Default for Hooks<'_> {
    fn default() -> Self {
        Self {
            bytes: &NoopSink,
            cancel: &NeverCancelled,
            markup: &IdentityRewriter,
        }
    }
}

impl std::fmt::Debug for Hooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}
