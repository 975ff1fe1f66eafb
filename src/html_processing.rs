//! Document Normalization and Candidate Collection
//!
//! Parses raw page bytes into a tree and strips the elements that never
//! belong in a reading view, then gathers the nodes the scorer looks at.
//!
//! Normalization is cooperative: the cancellation flag is polled between
//! removal passes and a cancelled run leaves the tree as far as it got.
//! That partial tree is still a valid input for every later stage.

use dom_query::{Document, Selection};

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::hooks::{ByteSink, CancelFlag};
use crate::options::MobilizeMode;
use crate::patterns::{CANDIDATE_TAGS, CLUTTER_TAGS, FORM_TAGS};

/// How far normalization got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Every removal pass ran.
    Complete,
    /// Cancelled after `passes` removal passes.
    Cancelled { passes: usize },
}

impl Normalization {
    #[must_use]
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Parse raw bytes into a document, reporting the input size to `bytes`.
///
/// Empty input is treated as a missing document.
pub fn parse_document(html: &[u8], bytes: &dyn ByteSink) -> Result<Document> {
    if html.is_empty() {
        return Err(Error::MissingDocument);
    }

    bytes.add_bytes(html.len());
    Ok(dom::parse(&encoding::decode_html(html)))
}

/// Tags removed by normalization, in pass order.
#[must_use]
pub fn removal_passes(mode: MobilizeMode) -> Vec<&'static str> {
    let mut passes = Vec::with_capacity(FORM_TAGS.len() + CLUTTER_TAGS.len());
    if mode != MobilizeMode::None {
        passes.extend(FORM_TAGS);
    }
    passes.extend(CLUTTER_TAGS);
    passes
}

/// Remove scripts, styles and (when mobilizing) form selects from `doc`.
pub fn normalize_document(doc: &Document, mode: MobilizeMode, cancel: &dyn CancelFlag) -> Normalization {
    for (done, tag) in removal_passes(mode).into_iter().enumerate() {
        if done > 0 && cancel.is_cancelled() {
            tracing::warn!(passes = done, "normalization cancelled");
            return Normalization::Cancelled { passes: done };
        }
        let found = doc.select(tag);
        if found.exists() {
            tracing::debug!(tag, count = found.length(), "removing elements");
            found.remove();
        }
    }

    Normalization::Complete
}

/// Body descendants eligible as extraction roots, in document order.
#[must_use]
pub fn collect_candidates(doc: &Document) -> Vec<Selection<'_>> {
    let body = doc.select("body");
    dom::select_each(&body, "*")
        .into_iter()
        .filter(|el| dom::tag_name(el).is_some_and(|tag| CANDIDATE_TAGS.contains(&tag.as_str())))
        .collect()
}

/// `meta` elements of the head, in document order.
#[must_use]
pub fn collect_metas(doc: &Document) -> Vec<Selection<'_>> {
    dom::select_each(&doc.select("head"), "meta")
}

/// `content` of the first `og:image` meta, if any.
#[must_use]
pub fn og_image(metas: &[Selection]) -> Option<String> {
    metas
        .iter()
        .find(|meta| meta.attr("property").is_some_and(|p| &*p == "og:image"))
        .map(|meta| dom::get_attribute(meta, "content").unwrap_or_default())
}
