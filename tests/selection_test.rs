use rs_mobilizer::selector::{self, Root};
use rs_mobilizer::{dom, mobilize, patterns, MobilizeMode, Options, SelectionKind};

fn options_for(url: &str) -> Options {
    Options {
        url: url.to_string(),
        ..Options::default()
    }
}

#[test]
fn without_rule_or_heuristic_the_whole_document_is_kept() {
    let html = r#"<html><body><div class="nav">Menu</div><div class="content">Article text that is long enough</div></body></html>"#;
    let options = Options {
        find_best_element: false,
        ..options_for("https://example.com/a")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::Document);
    assert!(result.html.starts_with("<html>"));
    assert!(result.html.contains("Menu"));
    assert!(result.html.contains("Article text"));
}

#[test]
fn highest_weight_sibling_is_selected_reproducibly() {
    let html = format!(
        r#"<html><body><div class="post" id="a">{}</div><div class="post" id="b">{}</div><div class="post" id="c">{}</div></body></html>"#,
        "a".repeat(21),
        "b".repeat(40),
        "c".repeat(80)
    );
    let options = options_for("https://example.com/a");

    let first = mobilize(html.as_bytes(), &options).unwrap();
    let second = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(first.selection, SelectionKind::Heuristic);
    assert_eq!(first.best_weight, Some(35 + 8));
    assert_eq!(first.html, format!(r#"<div class="post" id="c">{}</div>"#, "c".repeat(80)));
    assert_eq!(first.html, second.html);
}

#[test]
fn content_indicator_steers_selection() {
    let filler = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
    let html = format!(
        r#"<html><body>
        <div id="one"><span>{filler}</span></div>
        <div id="two"><span>{filler} The feed excerpt sentence.</span></div>
        </body></html>"#
    );
    let options = Options {
        content_indicator: Some("feed excerpt".to_string()),
        ..options_for("https://example.com/a")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert!(result.html.starts_with(r#"<div id="two">"#));
    assert_eq!(result.best_weight, Some(100));
}

#[test]
fn ambiguous_class_rule_wraps_copies_in_document_order() {
    let html = r#"<html><body>
        <div class="story">first</div>
        <div class="other"><p class="story">second</p></div>
        <section class="story">third</section>
    </body></html>"#;
    let options = Options {
        rules_blob: Some("example.com:class=story".to_string()),
        ..options_for("https://www.example.com/news/1")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::RuleAmbiguous);
    assert!(result.html.starts_with("<div>"));
    assert_eq!(result.html.matches(r#"best_element="1""#).count(), 3);
    let first = result.html.find("first").unwrap();
    let second = result.html.find("second").unwrap();
    let third = result.html.find("third").unwrap();
    assert!(first < second && second < third);
    assert!(!result.html.contains("other"));
}

#[test]
fn ambiguous_class_rule_marks_originals() {
    let doc = dom::parse(
        r#"<body><p class="story">1</p><p class="story">2</p><p class="story">3</p><p>4</p></body>"#,
    );
    let rules = rs_mobilizer::parse_rules("example.com:class=story").rules;

    let best = selector::find_best_element(&doc, "http://example.com/x", None, &rules, true);

    assert!(matches!(best.root, Root::Wrapper(_)));
    let marked = doc.select(&format!("[{}]", patterns::BEST_ELEMENT_ATTR));
    assert_eq!(marked.length(), 3);
    assert_eq!(dom::element_children(&best.root_selection(&doc)).len(), 3);
}

#[test]
fn single_class_match_is_the_element_itself() {
    let html = r#"<html><body><article class="story">Only one</article><p>Footer text</p></body></html>"#;
    let options = Options {
        rules_blob: Some("example.com:class=story".to_string()),
        ..options_for("https://example.com/a")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::Rule);
    assert_eq!(result.html, r#"<article class="story">Only one</article>"#);
}

#[test]
fn rule_for_other_site_is_ignored() {
    let html = r#"<html><body><div id="teaser">x</div><div class="content">The real article body text</div></body></html>"#;
    let options = Options {
        rules_blob: Some("other.org:id=teaser".to_string()),
        ..options_for("https://example.com/a")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::Heuristic);
    assert!(result.html.contains("The real article body text"));
}

#[test]
fn whole_document_rule_skips_heuristic() {
    let html = r#"<html><body><div class="content">Article body text here</div></body></html>"#;
    let options = Options {
        rules_blob: Some(format!("example.com:class={}", patterns::ROOT_CLASS)),
        ..options_for("https://example.com/a")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::Document);
    assert!(result.html.starts_with("<html>"));
}

#[test]
fn selection_only_runs_in_mobilize_mode() {
    let html = r#"<html><body><div class="nav">Menu</div><div class="content">Article body text here</div></body></html>"#;
    let options = Options {
        mode: MobilizeMode::None,
        ..options_for("https://example.com/a")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::Document);
    assert!(result.html.contains("Menu"));
}

#[test]
fn ambiguous_table_cells_keep_their_elements() {
    let html = r#"<html><body><table><tr><td class="story">first cell text</td><td class="story">second cell text</td></tr></table></body></html>"#;
    let options = Options {
        include_tables: true,
        rules_blob: Some("example.com:class=story".to_string()),
        ..options_for("https://example.com/a")
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::RuleAmbiguous);
    assert_eq!(
        result.html,
        r#"<div><td class="story" best_element="1">first cell text</td><td class="story" best_element="1">second cell text</td></div>"#
    );
}
