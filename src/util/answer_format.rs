//! Display formatting for answer responses.
//!
//! Everything returned here is inserted as text nodes, never as markup, so
//! backend-supplied strings cannot inject elements or scripts.

use crate::net::types::Citation;

#[cfg(test)]
#[path = "answer_format_test.rs"]
mod answer_format_test;

/// Split an answer into the lines rendered between `<br>` elements.
///
/// Only `\n` separates lines; every other character is kept as-is.
pub fn answer_lines(answer: &str) -> Vec<String> {
    if answer.is_empty() {
        return Vec::new();
    }
    answer.split('\n').map(str::to_owned).collect()
}

/// Confidence text, or `None` when the backend sent no confidence.
pub fn confidence_label(confidence: &str) -> Option<String> {
    (!confidence.is_empty()).then(|| format!("Confidence: {confidence}"))
}

/// Class list for the confidence element. The value is used verbatim as a
/// style category.
pub fn confidence_class(confidence: &str) -> String {
    if confidence.is_empty() {
        "confidence".to_owned()
    } else {
        format!("confidence {confidence}")
    }
}

pub fn citation_header(citation: &Citation) -> String {
    format!("{} - {}", citation.doc_id, citation.section)
}

pub fn quoted_snippet(snippet: &str) -> String {
    format!("\"{snippet}\"")
}

pub fn citation_page(citation: &Citation) -> Option<String> {
    citation.page.map(|page| format!("p. {page}"))
}

/// Link target for a citation, limited to `http`/`https` so a hostile
/// backend cannot smuggle `javascript:` URLs into the page.
pub fn citation_link(citation: &Citation) -> Option<&str> {
    let url = citation.url.as_deref()?.trim();
    let scheme_end = url.find("://")?;
    let scheme = &url[..scheme_end];
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")).then_some(url)
}
