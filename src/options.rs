//! Configuration options for mobilizing a page.
//!
//! `Options` carries everything a caller decides per request: the page URL,
//! which pipeline stages run, and the externally persisted configuration
//! (per-site extraction rules, the class remove-list, feature flags). It is
//! plain data, so one instance can be shared across threads and loaded from
//! JSON.

use serde::{Deserialize, Serialize};

use crate::selector::rules::{self, ExtractionRule, RuleError};

/// Which pipeline stages run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilizeMode {
    /// Normalize and post-process the whole document; no selection.
    None,
    /// Select the article root and reduce the page to it.
    #[default]
    Mobilize,
    /// Whole-document pass followed by the interactive tag overlay.
    MobilizeWithTagOverlay,
}

/// Configuration options for a mobilize call.
///
/// # Example
///
/// ```rust
/// use rs_mobilizer::{MobilizeMode, Options};
///
/// let options = Options {
///     url: "https://example.com/news/1".to_string(),
///     include_tables: true,
///     ..Options::default()
/// };
/// assert_eq!(options.mode, MobilizeMode::Mobilize);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// URL the document was fetched from. Rules are matched against it and
    /// it provides the link-rewrite base and the overlay domain.
    ///
    /// Default: empty
    pub url: String,

    /// Text expected to appear inside the true article body, typically the
    /// feed excerpt. Children containing it get a strong scoring bonus.
    ///
    /// Default: `None`
    pub content_indicator: Option<String>,

    /// Stages to run.
    ///
    /// Default: `MobilizeMode::Mobilize`
    pub mode: MobilizeMode,

    /// Run the heuristic scorer when no rule resolves a root.
    ///
    /// Default: `true`
    pub find_best_element: bool,

    /// Keep tables as tables instead of flattening them to paragraphs.
    ///
    /// Default: `false`
    pub include_tables: bool,

    /// Append the page's `#comments` section after the article.
    ///
    /// Default: `false`
    pub load_comments: bool,

    /// Classes whose elements are removed from the extraction (and shown
    /// struck through in the tag overlay).
    ///
    /// Default: empty
    pub remove_classes: Vec<String>,

    /// Per-site extraction rules, evaluated in order.
    ///
    /// Default: empty
    pub rules: Vec<ExtractionRule>,

    /// Raw rule table, parsed on every call and evaluated after `rules`.
    /// Malformed entries are reported in `MobilizeResult::rule_errors`.
    ///
    /// Default: `None`
    pub rules_blob: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: String::new(),
            content_indicator: None,
            mode: MobilizeMode::Mobilize,
            find_best_element: true,
            include_tables: false,
            load_comments: false,
            remove_classes: Vec::new(),
            rules: Vec::new(),
            rules_blob: None,
        }
    }
}

impl Options {
    /// Replace the rule table with the rules parsed from a configuration
    /// blob, returning the entries that were skipped as malformed.
    pub fn set_rules_blob(&mut self, blob: &str) -> Vec<RuleError> {
        let parsed = rules::parse_rules(blob);
        self.rules = parsed.rules;
        parsed.errors
    }

    /// Content indicator, if set and non-empty.
    #[must_use]
    pub fn content_indicator(&self) -> Option<&str> {
        self.content_indicator.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether `class` is on the remove-list.
    #[must_use]
    pub fn is_hidden_class(&self, class: &str) -> bool {
        self.remove_classes.iter().any(|c| c == class)
    }

    /// Load options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::ParseError(e.to_string()))
    }
}
