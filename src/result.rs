//! Result types for mobilize output.
//!
//! Everything a call produces is returned here, including the pre-overlay
//! markup that the overlay pass starts from, so no state outlives a call.

use serde::Serialize;

use crate::selector::rules::RuleError;

/// How the extraction root was chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// The whole document (no selection requested, or every strategy fell
    /// through, or a rule asked for it).
    #[default]
    Document,
    /// A rule resolved to a single element.
    Rule,
    /// A class rule matched several elements; the root is a synthetic
    /// wrapper holding copies of all of them.
    RuleAmbiguous,
    /// The highest-weight candidate of the heuristic scan.
    Heuristic,
}

/// Result of mobilizing one document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MobilizeResult {
    /// The extracted, normalized HTML fragment. In overlay mode this is the
    /// annotated document.
    pub html: String,

    /// Markup the overlay pass started from (overlay mode only).
    pub pre_overlay_html: Option<String>,

    /// How the root was chosen.
    pub selection: SelectionKind,

    /// Weight of the winning candidate for heuristic selections.
    pub best_weight: Option<i32>,

    /// Normalization stopped early because the caller cancelled.
    pub cancelled: bool,

    /// Rule-table entries that were skipped while parsing.
    pub rule_errors: Vec<RuleError>,

    /// Non-fatal notes about the run.
    pub warnings: Vec<String>,
}
