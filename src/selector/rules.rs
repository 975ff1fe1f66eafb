//! Per-site extraction rules.
//!
//! A rule table is a blob of entries separated by newlines or any other
//! whitespace. Each entry has the form `keyword:type=value`, where `type` is
//! `id` or `class` (case-insensitive). A rule applies when its keyword occurs
//! anywhere in the request URL; the first applicable rule in file order wins.
//!
//! ```text
//! example.com:class=story
//! blog.example.org:id=post-body
//! news.example.net:class=mobilize_root
//! ```
//!
//! Entries that do not parse are skipped one by one and reported; they never
//! abort the parse of the remaining table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::patterns::ROOT_CLASS;

/// What a rule's value names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// The element with this `id`.
    Id,
    /// All elements bearing this class.
    Class,
}

/// A single per-site override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRule {
    /// Substring the request URL must contain.
    pub match_substring: String,
    /// Whether `target_value` is an id or a class.
    pub target_type: TargetType,
    /// Id or class name to select.
    pub target_value: String,
}

impl ExtractionRule {
    /// Whether this rule applies to `url`.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        url.contains(&self.match_substring)
    }

    /// Whether the rule asks for the whole document.
    #[must_use]
    pub fn selects_whole_document(&self) -> bool {
        self.target_value == ROOT_CLASS
    }
}

impl fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.target_type {
            TargetType::Id => "id",
            TargetType::Class => "class",
        };
        write!(f, "{}:{kind}={}", self.match_substring, self.target_value)
    }
}

/// Why an entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleErrorKind {
    /// No `:` between keyword and target.
    #[error("missing ':' after keyword")]
    MissingColon,
    /// Keyword before `:` is empty; it would match every URL.
    #[error("empty keyword")]
    EmptyKeyword,
    /// No `=` between type and value, or nothing after it.
    #[error("missing '=value'")]
    MissingValue,
    /// Type is neither `id` nor `class`.
    #[error("unknown target type '{0}'")]
    UnknownType(String),
}

impl FromStr for ExtractionRule {
    type Err = RuleErrorKind;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let mut segments = entry.split(':');
        let keyword = segments.next().unwrap_or_default();
        let target = segments
            .next()
            .filter(|t| !t.is_empty())
            .ok_or(RuleErrorKind::MissingColon)?;
        if keyword.is_empty() {
            return Err(RuleErrorKind::EmptyKeyword);
        }

        let mut parts = target.split('=');
        let kind = parts.next().unwrap_or_default().to_lowercase();
        let value = parts
            .next()
            .filter(|v| !v.is_empty())
            .ok_or(RuleErrorKind::MissingValue)?;

        let target_type = match kind.as_str() {
            "id" => TargetType::Id,
            "class" => TargetType::Class,
            _ => return Err(RuleErrorKind::UnknownType(kind)),
        };

        Ok(Self {
            match_substring: keyword.to_string(),
            target_type,
            target_value: value.to_string(),
        })
    }
}

/// A rejected entry of a rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleError {
    /// Position of the entry among the non-empty entries of the blob.
    pub index: usize,
    /// The entry text as found.
    pub entry: String,
    /// What was wrong with it.
    #[serde(serialize_with = "serialize_kind")]
    pub reason: RuleErrorKind,
}

fn serialize_kind<S: serde::Serializer>(kind: &RuleErrorKind, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(kind)
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule #{} '{}': {}", self.index, self.entry, self.reason)
    }
}

/// Outcome of parsing a rule table: the usable rules in file order plus
/// every skipped entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleParse {
    pub rules: Vec<ExtractionRule>,
    pub errors: Vec<RuleError>,
}

/// Parse a rule table blob.
///
/// # Example
///
/// ```rust
/// use rs_mobilizer::selector::rules::parse_rules;
///
/// let parsed = parse_rules("example.com:class=story  bad-entry\nfoo.org:id=main");
/// assert_eq!(parsed.rules.len(), 2);
/// assert_eq!(parsed.errors.len(), 1);
/// ```
#[must_use]
pub fn parse_rules(blob: &str) -> RuleParse {
    let mut parsed = RuleParse::default();

    for (index, entry) in blob.split_whitespace().enumerate() {
        match entry.parse::<ExtractionRule>() {
            Ok(rule) => parsed.rules.push(rule),
            Err(reason) => {
                tracing::warn!(index, entry, %reason, "skipping malformed extraction rule");
                parsed.errors.push(RuleError {
                    index,
                    entry: entry.to_string(),
                    reason,
                });
            }
        }
    }

    parsed
}

/// First rule in order that applies to `url`.
#[must_use]
pub fn first_match<'r>(rules: &'r [ExtractionRule], url: &str) -> Option<&'r ExtractionRule> {
    rules.iter().find(|rule| rule.matches(url))
}
