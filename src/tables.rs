//! Textual tag rewriting over serialized markup.
//!
//! Tables read badly on a narrow screen, so rows and cells are flattened
//! into paragraphs separated by rules. The rewrite is a single left-to-right
//! scan with these matching rules:
//!
//! - an opening tag matches on its name *prefix* (`<th` also matches
//!   `<thead>`, `<tr` also matches `<track>`) and runs to the first `>`;
//!   a line break before that `>` means no match,
//! - a closing tag must match exactly (`</th>`, not `</thead>`),
//! - matching is case-sensitive.
//!
//! Replacements never produce a matching tag, so the rewrite is idempotent.

/// One tag family and what its opening and closing tags become.
#[derive(Debug, Clone, Copy)]
struct TagRewrite {
    open_prefix: &'static str,
    open_with: &'static str,
    close_tag: &'static str,
    close_with: &'static str,
}

const TABLE_REWRITES: [TagRewrite; 4] = [
    TagRewrite {
        open_prefix: "<table",
        open_with: "<p>",
        close_tag: "</table>",
        close_with: "</p>",
    },
    TagRewrite {
        open_prefix: "<tr",
        open_with: "<p>",
        close_tag: "</tr>",
        close_with: "</p><hr>",
    },
    TagRewrite {
        open_prefix: "<td",
        open_with: "<p>",
        close_tag: "</td>",
        close_with: "</p>",
    },
    TagRewrite {
        open_prefix: "<th",
        open_with: "<p>",
        close_tag: "</th>",
        close_with: "</p><hr>",
    },
];

const HEADER_REWRITES: [TagRewrite; 3] = [
    TagRewrite {
        open_prefix: "<h1",
        open_with: "",
        close_tag: "</h1>",
        close_with: "",
    },
    TagRewrite {
        open_prefix: "<h2",
        open_with: "",
        close_tag: "</h2>",
        close_with: "",
    },
    TagRewrite {
        open_prefix: "<h3",
        open_with: "",
        close_tag: "</h3>",
        close_with: "",
    },
];

/// Flatten tables: tables, rows and cells become paragraphs, and rows and
/// header cells are followed by `<hr>`.
///
/// # Example
///
/// ```rust
/// use rs_mobilizer::tables::flatten_tables;
///
/// let html = r#"<table class="t"><tr><td>a</td></tr></table>"#;
/// assert_eq!(flatten_tables(html), "<p><p><p>a</p></p><hr></p>");
/// ```
#[must_use]
pub fn flatten_tables(html: &str) -> String {
    rewrite_tags(html, &TABLE_REWRITES)
}

/// Strip `h1`, `h2` and `h3` tags, keeping their content.
#[must_use]
pub fn remove_headers(html: &str) -> String {
    rewrite_tags(html, &HEADER_REWRITES)
}

fn rewrite_tags(html: &str, rewrites: &[TagRewrite]) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match match_tag(tail, rewrites) {
            Some((consumed, replacement)) => {
                out.push_str(replacement);
                rest = &tail[consumed..];
            }
            None => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Length of the tag at the start of `tail` and its replacement.
fn match_tag(tail: &str, rewrites: &[TagRewrite]) -> Option<(usize, &'static str)> {
    for rewrite in rewrites {
        if tail.starts_with(rewrite.close_tag) {
            return Some((rewrite.close_tag.len(), rewrite.close_with));
        }
        if let Some(after) = tail.strip_prefix(rewrite.open_prefix) {
            if let Some(end) = open_tag_end(after) {
                return Some((rewrite.open_prefix.len() + end + 1, rewrite.open_with));
            }
        }
    }
    None
}

/// Byte offset of the first `>`, unless a line break comes first.
fn open_tag_end(after: &str) -> Option<usize> {
    for (i, c) in after.char_indices() {
        if c == '>' {
            return Some(i);
        }
        if is_line_break(c) {
            return None;
        }
    }
    None
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}
