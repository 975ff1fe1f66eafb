//! Candidate weighting.
//!
//! A candidate's weight combines three signals:
//!
//! 1. its own `class`/`id`/`style` attributes matched against the pattern
//!    tables in [`crate::patterns`],
//! 2. the density of its own text (direct text children only),
//! 3. a one-level look at its direct element children: long own text,
//!    headings, paragraphs, captions and the caller's content indicator.
//!
//! Weighting only reads the tree. Every function here takes shared borrows,
//! so a candidate can be scored any number of times with the same result.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{HEADER_TAGS, NEGATIVE, NEGATIVE_STYLE, POSITIVE, UNLIKELY};

/// Children with less text than this are ignored by [`child_weight`].
const MIN_CHILD_TEXT_LEN: usize = 20;

/// A `p` child with more text than this counts toward a paragraph cluster.
const PARAGRAPH_TEXT_LEN: usize = 50;

/// Own text above this length earns the long-text bonus.
const LONG_OWN_TEXT_LEN: usize = 200;

/// Total weight of a candidate.
///
/// # Example
///
/// ```rust
/// use rs_mobilizer::{dom, scoring};
///
/// let doc = dom::parse(r#"<div class="content"><p>short</p></div>"#);
/// assert_eq!(scoring::weight(&doc.select("div"), None), 35);
/// ```
#[must_use]
pub fn weight(node: &Selection, content_indicator: Option<&str>) -> i32 {
    let own_len = char_len(&dom::own_text(node));
    class_id_weight(node) + own_text_weight(own_len) + child_weight(node, content_indicator)
}

/// Weight from `class`, `id` and `style` attributes.
#[must_use]
pub fn class_id_weight(node: &Selection) -> i32 {
    let class = dom::class_name(node).unwrap_or_default();
    let id = dom::id(node).unwrap_or_default();
    let mut weight = 0;

    if POSITIVE.is_match(&class) {
        weight += 35;
    }
    if POSITIVE.is_match(&id) {
        weight += 40;
    }

    if UNLIKELY.is_match(&class) {
        weight -= 20;
    }
    if UNLIKELY.is_match(&id) {
        weight -= 20;
    }

    if NEGATIVE.is_match(&class) {
        weight -= 50;
    }
    if NEGATIVE.is_match(&id) {
        weight -= 50;
    }

    if dom::get_attribute(node, "style").is_some_and(|style| NEGATIVE_STYLE.is_match(&style)) {
        weight -= 50;
    }

    weight
}

/// One point per ten characters of own text, rounded to nearest.
#[must_use]
pub fn own_text_weight(own_len: usize) -> i32 {
    (own_len as f64 / 100.0 * 10.0).round() as i32
}

/// Weight from the node's direct element children.
#[must_use]
pub fn child_weight(node: &Selection, content_indicator: Option<&str>) -> i32 {
    let content_indicator = content_indicator.filter(|ci| !ci.is_empty());
    let children = dom::element_children(node);

    let mut weight = 0;
    let mut caption_seen = false;
    let mut paragraphs = 0;

    for child in &children {
        let text = dom::text_content(child);
        let text_len = char_len(&text);
        if text_len < MIN_CHILD_TEXT_LEN {
            continue;
        }

        if content_indicator.is_some_and(|ci| text.contains(ci)) {
            weight += 100;
        }

        let own_len = char_len(&dom::own_text(child));
        if own_len > LONG_OWN_TEXT_LEN {
            weight += (own_len as i32 / 10).max(50);
        }

        let tag = dom::tag_name(child).unwrap_or_default();
        match tag.as_str() {
            "h1" | "h2" => weight += 30,
            "div" | "p" => {
                weight += own_len as i32 / 25;
                if tag == "p" && text_len > PARAGRAPH_TEXT_LEN {
                    paragraphs += 1;
                }
                if dom::class_name(child).is_some_and(|c| c.to_lowercase() == "caption") {
                    caption_seen = true;
                }
            }
            _ => {}
        }
    }

    if caption_seen {
        weight += 30;
    }

    if paragraphs >= 2 {
        let headers = children
            .iter()
            .filter(|child| dom::tag_name(child).is_some_and(|tag| HEADER_TAGS.contains(&tag.as_str())))
            .count();
        weight += 20 * headers as i32;
    }

    weight
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
