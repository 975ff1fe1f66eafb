//! Tag overlay for authoring extraction rules.
//!
//! Every class-bearing element with text gets a pair of inline controls per
//! class, `[ name ` before its content and ` name ]` after it. Each control
//! calls the host page's `openTagMenu(class, domain, action)` where action
//! is `show` for classes on the remove-list and `hide` otherwise. Elements
//! with a removed class are struck through rather than dropped, so the page
//! author still sees what the rule would hide.
//!
//! The document root carries [`ROOT_CLASS`]; its controls are placed at the
//! start and end of `<body>` since nothing may precede `<head>`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::Options;
use crate::patterns::{
    BEST_ELEMENT_ATTR, ROOT_CLASS, TAG_BUTTON_CLASS, TAG_BUTTON_HIDDEN_CLASS, TAG_BUTTON_ROOT_CLASS,
    TAG_MENU_CALLBACK,
};
use crate::selector::BestMatch;

/// Annotate `doc` in place. Returns the number of annotated elements.
///
/// `best` must come from selection over this same document. Controls and
/// strikethrough wrappers are inserted as nodes, so the existing tree
/// (table rows and cells included) keeps its shape.
pub fn add_tag_buttons(doc: &Document, best: &BestMatch, domain: &str, options: &Options) -> usize {
    let root = dom::document_root(doc);
    dom::add_class(&root, ROOT_CLASS);

    let body = doc.select("body").first();
    let mut elements = vec![root.clone()];
    if dom::has_attribute(&body, "class") {
        elements.push(body.clone());
    }
    elements.extend(dom::select_each(&body, "[class]"));

    // Root last, so its controls are the outermost ones in body.
    let mut annotated = 0;
    for el in elements.iter().rev() {
        let classes = dom::class_names(el);
        if classes.iter().any(|c| c == TAG_BUTTON_CLASS) || !dom::has_text(el) {
            continue;
        }

        let is_document_root = dom::same_node(el, &root);
        let full_text_root = best.is_root(doc, el) || dom::has_attribute(el, BEST_ELEMENT_ATTR);

        let mut prefixes = String::new();
        let mut suffixes = String::new();
        let mut hidden = 0;
        for class in &classes {
            let is_hidden = options.is_hidden_class(class);
            let style = if full_text_root {
                TAG_BUTTON_ROOT_CLASS
            } else if is_hidden {
                TAG_BUTTON_HIDDEN_CLASS
            } else {
                TAG_BUTTON_CLASS
            };
            let method = menu_call(class, domain, is_hidden);
            prefixes.insert_str(0, &control(style, &method, &format!("[ {class} ")));
            suffixes.push_str(&control(style, &method, &format!(" {class} ]")));
            if is_hidden {
                hidden += 1;
            }
        }

        let target = if is_document_root { &body } else { el };
        dom::prepend_html(target, &prefixes);
        dom::append_html(target, &suffixes);

        if hidden > 0 && !is_document_root && !dom::same_node(el, &body) {
            strike_through(el, hidden);
        }
        annotated += 1;
    }

    tracing::debug!(annotated, "tag overlay added");
    annotated
}

/// `openTagMenu('class', 'domain', 'show'|'hide')`.
fn menu_call(class: &str, domain: &str, is_hidden: bool) -> String {
    let action = if is_hidden { "show" } else { "hide" };
    format!(
        "{TAG_MENU_CALLBACK}('{}', '{}', '{action}')",
        js_string(class),
        js_string(domain)
    )
}

fn control(style: &str, method: &str, label: &str) -> String {
    format!(
        r#"<span class="{style}" onclick="{}">{}</span>"#,
        dom::escape_attribute(method),
        dom::escape_text(label)
    )
}

/// Escape for a single-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Nest `el` in `depth` strikethrough containers, in place.
fn strike_through(el: &Selection, depth: usize) {
    let wrapper = format!(r#"<s class="{TAG_BUTTON_HIDDEN_CLASS}"></s>"#);
    for _ in 0..depth {
        dom::wrap_html(el, &wrapper);
    }
}
