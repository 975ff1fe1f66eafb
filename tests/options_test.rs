use rs_mobilizer::{mobilize, parse_rules, ExtractionRule, MobilizeMode, Options, SelectionKind, TargetType};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.url.is_empty());
    assert_eq!(options.mode, MobilizeMode::Mobilize);
    assert!(options.find_best_element);
    assert!(!options.include_tables);
    assert!(!options.load_comments);
    assert!(options.remove_classes.is_empty());
    assert!(options.rules.is_empty());
}

#[test]
fn options_load_from_json() {
    let options = Options::from_json(
        r#"{
            "url": "https://example.com/a",
            "include_tables": true,
            "remove_classes": ["ads", "share"],
            "rules_blob": "example.com:id=main other.org:class=story"
        }"#,
    )
    .unwrap();

    assert!(options.include_tables);
    assert_eq!(options.mode, MobilizeMode::Mobilize);
    assert_eq!(options.remove_classes, vec!["ads", "share"]);
    assert!(options.rules_blob.is_some());
}

#[test]
fn rule_table_reports_every_bad_entry() {
    let parsed = parse_rules(
        "example.com:class=story\n\
         missing-colon\n\
         site.org:\n\
         :id=x\n\
         site.net:name=x\n\
         site.io:id=\n\
         news.example.net:ID=article-body",
    );

    assert_eq!(parsed.rules.len(), 2);
    assert_eq!(parsed.rules[1].target_type, TargetType::Id);
    assert_eq!(parsed.rules[1].target_value, "article-body");
    let bad: Vec<_> = parsed.errors.iter().map(|e| e.entry.as_str()).collect();
    assert_eq!(bad, vec!["missing-colon", "site.org:", ":id=x", "site.net:name=x", "site.io:id="]);
}

#[test]
fn pre_parsed_rules_come_before_blob_rules() {
    let html = r#"<html><body><div id="first">One</div><div id="second">Two</div></body></html>"#;
    let options = Options {
        url: "https://example.com/a".to_string(),
        rules: vec![ExtractionRule {
            match_substring: "example.com".to_string(),
            target_type: TargetType::Id,
            target_value: "first".to_string(),
        }],
        rules_blob: Some("example.com:id=second".to_string()),
        ..Options::default()
    };

    let result = mobilize(html.as_bytes(), &options).unwrap();

    assert_eq!(result.selection, SelectionKind::Rule);
    assert_eq!(result.html, r#"<div id="first">One</div>"#);
    assert!(result.rule_errors.is_empty());
}

#[test]
fn result_serializes_to_json() {
    let options = Options {
        rules_blob: Some("oops".to_string()),
        ..Options::default()
    };
    let result = mobilize(b"<p>x</p>", &options).unwrap();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["selection"], "document");
    assert_eq!(json["rule_errors"][0]["entry"], "oops");
    assert!(json["rule_errors"][0]["reason"].is_string());
}
