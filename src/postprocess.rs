//! Post-processing of the selected root.
//!
//! Tree edits (hidden classes, duplicate titles, comment retagging) run on
//! the parsed document before serialization. Image promotion works on the
//! serialized markup.

use dom_query::{Document, Selection};

use crate::dom;

/// Class of the element whose leading `h1` duplicates the page title.
const TITLE_CLASS: &str = "title";

/// Id of the comment section appended when comments are requested.
const COMMENTS_ID: &str = "comments";

/// Delete every element under `root` bearing one of `classes`.
///
/// Returns how many elements were removed.
pub fn remove_hidden_elements(root: &Selection, classes: &[String]) -> usize {
    let mut removed = 0;
    for class in classes.iter().filter(|c| !c.is_empty()) {
        for el in dom::elements_with_class(root, class) {
            dom::remove(&el);
            removed += 1;
        }
    }
    if removed > 0 {
        tracing::debug!(removed, "removed hidden elements");
    }
    removed
}

/// Remove the first `h1` among the elements under `root` classed `title`.
pub fn remove_title_duplicate(root: &Selection) -> bool {
    let heading = dom::elements_with_class(root, TITLE_CLASS)
        .into_iter()
        .find(|el| dom::tag_name(el).is_some_and(|tag| tag == "h1"));

    match heading {
        Some(h1) => {
            dom::remove(&h1);
            true
        }
        None => false,
    }
}

/// Prefix the markup with the page image unless the image URL already
/// appears in it.
///
/// # Example
///
/// ```rust
/// use rs_mobilizer::postprocess::promote_image;
///
/// let html = promote_image("<p>text</p>".to_string(), Some("http://x/img.png"));
/// assert_eq!(html, "<img src=\"http://x/img.png\"><br>\n<p>text</p>");
/// ```
#[must_use]
pub fn promote_image(html: String, og_image: Option<&str>) -> String {
    match og_image {
        Some(src) if !html.contains(src) => {
            format!("<img src=\"{}\"><br>\n{html}", dom::escape_attribute(src))
        }
        _ => html,
    }
}

/// Markup of the page's `#comments` section with list items and lists
/// retagged as paragraphs.
#[must_use]
pub fn inline_comments(doc: &Document) -> Option<String> {
    let comments = dom::element_by_id(&dom::document_root(doc), COMMENTS_ID)?;
    for tag in ["li", "ul"] {
        for el in dom::select_each(&comments, tag) {
            dom::rename(&el, "p");
        }
    }
    Some(dom::outer_html(&comments).to_string())
}
