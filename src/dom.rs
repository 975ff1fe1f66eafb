//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. Nodes live in the document's
//! arena; a `Selection` is a handle into it, and parent links are arena
//! indices (`NodeId`), so nothing here owns a parent.
//!
//! Text helpers return whitespace-normalized, trimmed text, which is what
//! every length measured by the scorer is based on.

pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for callers that want the raw text handles
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Root element of a document (`<html>`, which the parser always creates).
#[inline]
#[must_use]
pub fn document_root(doc: &Document) -> Selection<'_> {
    doc.select("html").first()
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute (the raw string)
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Class names of an element in attribute order, duplicates dropped.
///
/// Matching is case-sensitive: `Story` and `story` are different classes.
#[must_use]
pub fn class_names(sel: &Selection) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    if let Some(raw) = sel.attr("class") {
        for name in raw.split_whitespace() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Case-sensitive class membership test.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|raw| raw.split_whitespace().any(|c| c == class))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Add a class, keeping existing ones
pub fn add_class(sel: &Selection, class: &str) {
    if has_class(sel, class) {
        return;
    }
    let value = match class_name(sel) {
        Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
        _ => class.to_string(),
    };
    sel.set_attr("class", &value);
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Arena id of the first node of a selection.
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

/// Whether two selections point at the same first node.
#[must_use]
pub fn same_node(a: &Selection, b: &Selection) -> bool {
    matches!((node_id(a), node_id(b)), (Some(x), Some(y)) if x == y)
}

// === Text Content ===

/// Collapse whitespace runs to one space and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// All text of the element and its descendants, normalized.
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    normalize_whitespace(&sel.text())
}

/// Text of the element's direct text children only, normalized.
#[must_use]
pub fn own_text(sel: &Selection) -> String {
    let mut raw = String::new();
    if let Some(node) = sel.nodes().first() {
        for child in node.children() {
            if child.is_text() {
                raw.push_str(&child.text());
            }
        }
    }
    normalize_whitespace(&raw)
}

/// Whether the element has any non-whitespace text below it.
#[must_use]
pub fn has_text(sel: &Selection) -> bool {
    sel.text().chars().any(|c| !c.is_whitespace())
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Querying ===

/// Direct element children as individual selections, in order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children().nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// Descendants of `root` matching a CSS selector, one selection each, in
/// document order.
#[must_use]
pub fn select_each<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Descendants of `root` carrying `class` (case-sensitive), document order.
#[must_use]
pub fn elements_with_class<'a>(root: &Selection<'a>, class: &str) -> Vec<Selection<'a>> {
    select_each(root, "[class]")
        .into_iter()
        .filter(|el| has_class(el, class))
        .collect()
}

/// First descendant of `root` whose id equals `id` exactly.
#[must_use]
pub fn element_by_id<'a>(root: &Selection<'a>, id: &str) -> Option<Selection<'a>> {
    select_each(root, "[id]")
        .into_iter()
        .find(|el| el.attr("id").is_some_and(|v| &*v == id))
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Rename element tag
#[inline]
pub fn rename(sel: &Selection, new_tag: &str) {
    sel.rename(new_tag);
}

/// Insert parsed HTML before the element's first child.
#[inline]
pub fn prepend_html(sel: &Selection, html: &str) {
    sel.prepend_html(html);
}

/// Insert parsed HTML after the element's last child.
#[inline]
pub fn append_html(sel: &Selection, html: &str) {
    sel.append_html(html);
}

/// Move the element into a new parent parsed from `html` (one empty
/// element), which takes its place in the tree.
pub fn wrap_html(sel: &Selection, html: &str) {
    if let Some(node) = sel.nodes().first() {
        node.wrap_html(html);
    }
}

/// Append a deep copy of `source` as the last child of `target`. The two
/// may live in different documents; `source` itself is left in place.
pub fn append_copy(target: &Selection, source: &Selection) {
    let Some(node) = source.nodes().first() else {
        return;
    };
    let fragment = node.to_fragment();
    if let Some(copy) = fragment.html_root().first_element_child() {
        target.append_selection(&Selection::from(copy));
    }
}

/// Escape a value for use inside a double-quoted attribute.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text content.
#[must_use]
pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
