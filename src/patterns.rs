//! Compiled regex patterns and tag tables for candidate scoring.
//!
//! All patterns are compiled once on first use using `LazyLock`. Matching is
//! case-sensitive and unanchored (substring search) unless the pattern says
//! otherwise, mirroring how class and id strings are tested in the scorer.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Class / Id Patterns
// =============================================================================

/// Class/id tokens that suggest an article body.
///
/// Leading `content`, `entry`, `main`, `post`, `story`, `blog` and friends,
/// or `article`/`artikel` anywhere in the string.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(^(body|content|h?entry|main|page|post|text|blog|story|haupt))|arti(cle|kel)|instapaper_body",
    )
    .expect("POSITIVE regex")
});

/// Class/id tokens for regions that are unlikely to hold the article.
///
/// Note: `sponsora(d|ll|gegate|rchive|ttachment)` is a single alternative,
/// so bare `ad`/`all` tokens do not match on their own.
pub static UNLIKELY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"com(bx|ment|munity)|dis(qus|cuss)|e(xtra|[-]?mail)|foot|",
        r"header|menu|re(mark|ply)|rss|sh(are|outbox)|sponsor",
        r"a(d|ll|gegate|rchive|ttachment)|(pag(er|ination))|popup|print|",
        r"login|si(debar|gn|ngle)",
    ))
    .expect("UNLIKELY regex")
});

/// Class/id tokens for navigation, widgets, footers and other chrome.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"nav($|igation)|user|combx|(^com-)|contact|",
        r"foot|masthead|(me(dia|ta))|outbrain|promo|related|scroll|(sho(utbox|pping))|",
        r"sidebar|sponsor|tags|tool|widget|player|disclaimer|toc|infobox|vcard",
    ))
    .expect("NEGATIVE regex")
});

/// Inline styles that hide an element or shrink it to fine print.
pub static NEGATIVE_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hidden|display: ?none|font-size: ?small").expect("NEGATIVE_STYLE regex")
});

/// Runs of whitespace, collapsed to a single space when measuring text.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// Tag Tables
// =============================================================================

/// Tags eligible as extraction roots.
pub const CANDIDATE_TAGS: [&str; 7] = ["p", "div", "td", "h1", "h2", "article", "section"];

/// Heading tags that earn the paragraph-cluster bonus.
///
/// The scorer historically tested `"h1;h2;h3;h4;h5;h6".contains(tag)`.
/// For every element name an HTML parser produces that substring test and
/// membership in this table agree; the lone exception is a non-standard
/// bare `<h>` element, which the substring test would have accepted.
pub const HEADER_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements stripped from every document before selection.
pub const CLUTTER_TAGS: [&str; 3] = ["script", "noscript", "style"];

/// Form controls stripped when mobilizing.
pub const FORM_TAGS: [&str; 2] = ["select", "option"];

// =============================================================================
// Reserved Class / Attribute Names
// =============================================================================

/// Class put on the document root in overlay mode. A rule whose value is
/// this name selects the whole document.
pub const ROOT_CLASS: &str = "mobilize_root";

/// Class carried by overlay controls; elements with it are never annotated.
pub const TAG_BUTTON_CLASS: &str = "tag_button";

/// Control class for classes currently on the remove-list, and the class of
/// the strikethrough wrapper.
pub const TAG_BUTTON_HIDDEN_CLASS: &str = "tag_button_hidden";

/// Control class for classes on the selected extraction root.
pub const TAG_BUTTON_ROOT_CLASS: &str = "tag_button_full_text";

/// Attribute set on every element matched by an ambiguous class rule.
pub const BEST_ELEMENT_ATTR: &str = "best_element";

/// Callback invoked by overlay controls.
pub const TAG_MENU_CALLBACK: &str = "openTagMenu";
