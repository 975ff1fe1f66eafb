//! The mobilize pipeline.
//!
//! Stages, in order:
//!
//! 1. parse and normalize,
//! 2. (mobilize mode) select the root and drop hidden classes,
//! 3. de-duplicate the title and serialize the root,
//! 4. promote the page image, append comments, flatten tables,
//! 5. rewrite links through the host's [`MarkupRewriter`],
//! 6. (overlay mode) re-parse, re-select and annotate.
//!
//! [`MarkupRewriter`]: crate::hooks::MarkupRewriter

use dom_query::Document;

use crate::dom;
use crate::error::Result;
use crate::hooks::Hooks;
use crate::html_processing;
use crate::options::{MobilizeMode, Options};
use crate::overlay;
use crate::postprocess;
use crate::result::MobilizeResult;
use crate::selector::rules::{self, ExtractionRule};
use crate::selector::{self, BestMatch};
use crate::tables;
use crate::url_utils;

/// Main entry point for mobilizing one document.
pub(crate) fn mobilize_content(html: &[u8], options: &Options, hooks: &Hooks) -> Result<MobilizeResult> {
    let document = html_processing::parse_document(html, hooks.bytes)?;
    tracing::debug!(bytes = html.len(), mode = ?options.mode, url = %options.url, "mobilizing document");

    let mut result = MobilizeResult::default();
    let rules = effective_rules(options, &mut result);

    let normalization = html_processing::normalize_document(&document, options.mode, hooks.cancel);
    if normalization.is_cancelled() {
        result.cancelled = true;
        result.warnings.push("normalization cancelled".to_string());
    }

    let best = if options.mode == MobilizeMode::Mobilize {
        let best = select_root(&document, options, &rules);
        let removed = postprocess::remove_hidden_elements(&best.root_selection(&document), &options.remove_classes);
        if removed > 0 {
            result.warnings.push(format!("removed {removed} hidden elements"));
        }
        best
    } else {
        BestMatch::document()
    };
    result.selection = best.kind;
    result.best_weight = best.weight;

    let og_image = html_processing::og_image(&html_processing::collect_metas(&document));

    postprocess::remove_title_duplicate(&best.root_selection(&document));
    let mut html = best.html(&document);
    html = postprocess::promote_image(html, og_image.as_deref());

    if options.mode == MobilizeMode::Mobilize && options.load_comments {
        match postprocess::inline_comments(&document) {
            Some(comments) => html.push_str(&comments),
            None => tracing::debug!("no comment section found"),
        }
    }

    if !options.include_tables {
        html = tables::flatten_tables(&html);
    }

    html = hooks
        .markup
        .improve_markup(&html, &url_utils::get_base_url(&options.url), options.mode);

    if options.mode == MobilizeMode::MobilizeWithTagOverlay {
        let overlay_doc = dom::parse(&html);
        let best = select_root(&overlay_doc, options, &rules);
        let domain = url_utils::get_domain(&options.url);
        overlay::add_tag_buttons(&overlay_doc, &best, &domain, options);
        result.pre_overlay_html = Some(html);
        html = overlay_doc.html().to_string();
    }

    result.html = html;
    Ok(result)
}

fn select_root<'a>(doc: &'a Document, options: &Options, rules: &[ExtractionRule]) -> BestMatch<'a> {
    selector::find_best_element(
        doc,
        &options.url,
        options.content_indicator(),
        rules,
        options.find_best_element,
    )
}

/// Pre-parsed rules followed by the rules of the raw blob, if any. Blob
/// parse errors are recorded on `result`.
fn effective_rules(options: &Options, result: &mut MobilizeResult) -> Vec<ExtractionRule> {
    let mut all = options.rules.clone();
    if let Some(blob) = options.rules_blob.as_deref() {
        let parsed = rules::parse_rules(blob);
        all.extend(parsed.rules);
        result.rule_errors = parsed.errors;
    }
    all
}
