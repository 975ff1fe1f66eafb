//! Best-Element Selection
//!
//! Picks the extraction root of a page. Strategies run in order and the
//! first one that resolves wins:
//!
//! 1. the first per-site rule whose keyword occurs in the URL,
//! 2. the highest-weight candidate of the heuristic scan (if requested),
//! 3. the whole document.
//!
//! Selection never fails. A class rule that matches several elements marks
//! every match with [`BEST_ELEMENT_ATTR`] and returns a synthetic wrapper
//! holding copies of them, so the wrapper lives in its own [`Document`].

use dom_query::{Document, Selection};

use crate::dom;
use crate::html_processing;
use crate::patterns::BEST_ELEMENT_ATTR;
use crate::result::SelectionKind;
use crate::scoring;

pub mod rules;

use rules::{ExtractionRule, TargetType};

/// Once the running maximum passes this weight the scan stops early.
pub const EARLY_EXIT_WEIGHT: i32 = 300;

/// Where the chosen root lives.
pub enum Root<'a> {
    /// The whole parsed document.
    Document,
    /// An element of the parsed document.
    Element(Selection<'a>),
    /// A wrapper `<div>` around copies of several rule matches.
    Wrapper(Document),
}

/// Outcome of best-element selection.
pub struct BestMatch<'a> {
    pub root: Root<'a>,
    pub kind: SelectionKind,
    /// Weight of the winner for heuristic picks.
    pub weight: Option<i32>,
}

impl<'a> BestMatch<'a> {
    /// The whole document.
    #[must_use]
    pub fn document() -> Self {
        Self {
            root: Root::Document,
            kind: SelectionKind::Document,
            weight: None,
        }
    }

    fn element(sel: Selection<'a>, kind: SelectionKind, weight: Option<i32>) -> Self {
        Self {
            root: Root::Element(sel),
            kind,
            weight,
        }
    }

    /// The root as a selection. `doc` must be the document selection ran on.
    #[must_use]
    pub fn root_selection<'s>(&'s self, doc: &'s Document) -> Selection<'s> {
        match &self.root {
            Root::Document => dom::document_root(doc),
            Root::Element(sel) => sel.clone(),
            Root::Wrapper(wrapper) => wrapper_element(wrapper),
        }
    }

    /// Whether `sel` is the chosen root element itself.
    #[must_use]
    pub fn is_root(&self, doc: &Document, sel: &Selection) -> bool {
        match &self.root {
            Root::Document => dom::same_node(&dom::document_root(doc), sel),
            Root::Element(root) => dom::same_node(root, sel),
            Root::Wrapper(_) => false,
        }
    }

    /// Serialized markup of the root.
    #[must_use]
    pub fn html(&self, doc: &Document) -> String {
        match &self.root {
            Root::Document => doc.html().to_string(),
            Root::Element(sel) => sel.html().to_string(),
            Root::Wrapper(wrapper) => wrapper_element(wrapper).html().to_string(),
        }
    }
}

impl std::fmt::Debug for BestMatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let root = match &self.root {
            Root::Document => "document",
            Root::Element(_) => "element",
            Root::Wrapper(_) => "wrapper",
        };
        f.debug_struct("BestMatch")
            .field("root", &root)
            .field("kind", &self.kind)
            .field("weight", &self.weight)
            .finish()
    }
}

fn wrapper_element(wrapper: &Document) -> Selection<'_> {
    wrapper.select("body > div").first()
}

/// Choose the extraction root of `doc`.
///
/// `rules` are consulted first; the heuristic scan only runs when no rule
/// resolved and `heuristic` is set.
pub fn find_best_element<'a>(
    doc: &'a Document,
    url: &str,
    content_indicator: Option<&str>,
    rules: &[ExtractionRule],
    heuristic: bool,
) -> BestMatch<'a> {
    if let Some(rule) = rules::first_match(rules, url) {
        tracing::debug!(%rule, "extraction rule applies");
        if let Some(found) = resolve_rule(doc, rule) {
            return found;
        }
        tracing::debug!(%rule, "rule target not found");
    }

    if heuristic {
        let candidates = html_processing::collect_candidates(doc);
        if let Some((best, weight)) = find_by_weight(candidates, content_indicator) {
            tracing::debug!(weight, tag = ?dom::tag_name(&best), "heuristic best element");
            return BestMatch::element(best, SelectionKind::Heuristic, Some(weight));
        }
    }

    tracing::debug!("falling back to whole document");
    BestMatch::document()
}

/// Resolve one rule against `doc`. `None` means the rule named an id that
/// does not exist.
pub fn resolve_rule<'a>(doc: &'a Document, rule: &ExtractionRule) -> Option<BestMatch<'a>> {
    if rule.selects_whole_document() {
        return Some(BestMatch::document());
    }

    let root = dom::document_root(doc);
    match rule.target_type {
        TargetType::Id => dom::element_by_id(&root, &rule.target_value)
            .map(|el| BestMatch::element(el, SelectionKind::Rule, None)),
        TargetType::Class => {
            let mut matches = dom::elements_with_class(&root, &rule.target_value);
            match matches.len() {
                0 => Some(BestMatch::document()),
                1 => matches.pop().map(|el| BestMatch::element(el, SelectionKind::Rule, None)),
                count => {
                    tracing::debug!(count, class = %rule.target_value, "ambiguous class rule");
                    Some(BestMatch {
                        root: Root::Wrapper(wrap_matches(&matches)),
                        kind: SelectionKind::RuleAmbiguous,
                        weight: None,
                    })
                }
            }
        }
    }
}

/// Mark every match and build a wrapper document holding their copies in
/// order. Marking happens first, so the copies carry the marker too.
///
/// Copies are taken node by node, so matches that only parse inside a
/// table (`td`, `tr`) keep their element and attributes.
fn wrap_matches(matches: &[Selection]) -> Document {
    for el in matches {
        dom::set_attribute(el, BEST_ELEMENT_ATTR, "1");
    }
    let wrapper = dom::parse("<div></div>");
    {
        let container = wrapper_element(&wrapper);
        for el in matches {
            dom::append_copy(&container, el);
        }
    }
    wrapper
}

/// Highest-weight candidate, scanning in order and keeping the first of
/// equal weights. Only weights above zero qualify.
pub fn find_by_weight<'a>(
    candidates: Vec<Selection<'a>>,
    content_indicator: Option<&str>,
) -> Option<(Selection<'a>, i32)> {
    let mut best = None;
    let mut max_weight = 0;

    for candidate in candidates {
        let weight = scoring::weight(&candidate, content_indicator);
        if weight > max_weight {
            max_weight = weight;
            best = Some(candidate);
            if max_weight > EARLY_EXIT_WEIGHT {
                break;
            }
        }
    }

    best.map(|sel| (sel, max_weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(entry: &str) -> ExtractionRule {
        entry.parse().unwrap()
    }

    #[test]
    fn no_rule_no_heuristic_is_document() {
        let doc = dom::parse(r#"<body><div class="content">Some article text</div></body>"#);
        let best = find_best_element(&doc, "https://example.com", None, &[], false);
        assert!(matches!(best.root, Root::Document));
        assert_eq!(best.kind, SelectionKind::Document);
        assert!(best.html(&doc).contains("<html>"));
    }

    #[test]
    fn id_rule_selects_element() {
        let doc = dom::parse(r#"<body><div id="main">a</div><div id="other">b</div></body>"#);
        let rules = vec![rule("example.com:id=main")];
        let best = find_best_element(&doc, "https://example.com/x", None, &rules, false);
        assert_eq!(best.kind, SelectionKind::Rule);
        assert_eq!(best.html(&doc), r#"<div id="main">a</div>"#);
    }

    #[test]
    fn missing_id_falls_through_to_heuristic() {
        let text = "t".repeat(120);
        let doc = dom::parse(&format!(r#"<body><div class="post">{text}</div></body>"#));
        let rules = vec![rule("example.com:id=nope")];
        let best = find_best_element(&doc, "example.com", None, &rules, true);
        assert_eq!(best.kind, SelectionKind::Heuristic);
        assert_eq!(best.weight, Some(35 + 12));
    }

    #[test]
    fn class_rule_without_matches_is_document() {
        let doc = dom::parse("<body><p>x</p></body>");
        let best = resolve_rule(&doc, &rule("a:class=story")).unwrap();
        assert!(matches!(best.root, Root::Document));
    }

    #[test]
    fn whole_document_sentinel() {
        let doc = dom::parse(r#"<body><div class="mobilize_root">x</div></body>"#);
        let best = resolve_rule(&doc, &rule("a:class=mobilize_root")).unwrap();
        assert!(matches!(best.root, Root::Document));
    }

    #[test]
    fn first_matching_rule_wins_even_if_unresolved() {
        let doc = dom::parse(r#"<body><div class="story">x</div></body>"#);
        let rules = vec![rule("example:id=missing"), rule("example.com:class=story")];
        let best = find_best_element(&doc, "example.com", None, &rules, false);
        assert!(matches!(best.root, Root::Document));
    }

    #[test]
    fn ambiguous_class_rule_wraps_copies() {
        let doc = dom::parse(
            r#"<body><p class="story">one</p><div><p class="story">two</p></div><p class="story">three</p></body>"#,
        );
        let best = resolve_rule(&doc, &rule("example.com:class=story")).unwrap();
        assert_eq!(best.kind, SelectionKind::RuleAmbiguous);
        assert_eq!(doc.select("[best_element]").length(), 3);

        let root = best.root_selection(&doc);
        let copies = dom::element_children(&root);
        let texts: Vec<_> = copies.iter().map(dom::text_content).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(copies.iter().all(|c| dom::has_attribute(c, BEST_ELEMENT_ATTR)));
    }

    #[test]
    fn ambiguous_table_cells_are_copied_whole() {
        let doc = dom::parse(
            r#"<table><tr><td class="story">first cell text</td><td class="story">second cell text</td></tr></table>"#,
        );
        let best = resolve_rule(&doc, &rule("example.com:class=story")).unwrap();

        assert_eq!(
            best.html(&doc),
            r#"<div><td class="story" best_element="1">first cell text</td><td class="story" best_element="1">second cell text</td></div>"#
        );
        assert_eq!(doc.select("tr > td.story").length(), 2);
    }

    #[test]
    fn weight_scan_keeps_first_of_equal_weights() {
        let doc = dom::parse(r#"<body><div class="post" id="a">x</div><div class="post" id="b">y</div></body>"#);
        let (best, weight) = find_by_weight(html_processing::collect_candidates(&doc), None).unwrap();
        assert_eq!(dom::id(&best).as_deref(), Some("a"));
        assert_eq!(weight, 35);
    }

    #[test]
    fn weight_scan_ignores_non_positive() {
        let doc = dom::parse(r#"<body><div class="sidebar">x</div><p>y</p></body>"#);
        assert!(find_by_weight(html_processing::collect_candidates(&doc), None).is_none());
    }

    #[test]
    fn weight_scan_stops_above_threshold() {
        let long = "z".repeat(3200);
        let doc = dom::parse(&format!(
            r#"<body><div id="first">{long}</div><div class="content" id="second">{long}</div></body>"#
        ));
        let (best, weight) = find_by_weight(html_processing::collect_candidates(&doc), None).unwrap();
        assert_eq!(dom::id(&best).as_deref(), Some("first"));
        assert_eq!(weight, 320);
    }

    #[test]
    fn is_root_identifies_chosen_element() {
        let doc = dom::parse(r#"<body><div id="main">a</div><p>b</p></body>"#);
        let best = resolve_rule(&doc, &rule("x:id=main")).unwrap();
        assert!(best.is_root(&doc, &doc.select("#main")));
        assert!(!best.is_root(&doc, &doc.select("p")));
    }
}
