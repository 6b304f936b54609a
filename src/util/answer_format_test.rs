use super::*;
use crate::net::types::AskResponse;

fn citation(url: Option<&str>, page: Option<u32>) -> Citation {
    Citation {
        doc_id: "HR-01".to_owned(),
        section: "3.2".to_owned(),
        snippet: "20 days annually".to_owned(),
        page,
        url: url.map(str::to_owned),
    }
}

// =============================================================
// answer_lines
// =============================================================

#[test]
fn answer_lines_splits_on_newline_only() {
    assert_eq!(answer_lines("line one\nline two"), ["line one", "line two"]);
}

#[test]
fn answer_lines_keeps_other_characters_untouched() {
    let lines = answer_lines("<b>bold</b> & \"quoted\"\n  indented\t");
    assert_eq!(lines, ["<b>bold</b> & \"quoted\"", "  indented\t"]);
}

#[test]
fn answer_lines_keeps_blank_lines() {
    assert_eq!(answer_lines("a\n\nb"), ["a", "", "b"]);
}

#[test]
fn answer_lines_empty_answer_has_no_lines() {
    assert!(answer_lines("").is_empty());
}

// =============================================================
// confidence
// =============================================================

#[test]
fn confidence_label_and_class_use_value_verbatim() {
    assert_eq!(confidence_label("high").as_deref(), Some("Confidence: high"));
    assert_eq!(confidence_class("high"), "confidence high");
    assert_eq!(confidence_class("very-high"), "confidence very-high");
}

#[test]
fn confidence_class_without_value_is_base_class() {
    assert_eq!(confidence_class(""), "confidence");
}

#[test]
fn absent_confidence_has_no_label() {
    let resp: AskResponse = serde_json::from_str(r#"{"answer": "ok"}"#).unwrap();
    assert_eq!(confidence_label(resp.confidence()), None);
    assert_eq!(confidence_class(resp.confidence()), "confidence");
}

#[test]
fn empty_confidence_has_no_label() {
    let resp: AskResponse = serde_json::from_str(r#"{"answer": "ok", "confidence": ""}"#).unwrap();
    assert_eq!(confidence_label(resp.confidence()), None);
}

// =============================================================
// citations
// =============================================================

#[test]
fn citation_header_joins_doc_and_section() {
    assert_eq!(citation_header(&citation(None, None)), "HR-01 - 3.2");
}

#[test]
fn quoted_snippet_wraps_in_double_quotes() {
    assert_eq!(quoted_snippet("20 days annually"), "\"20 days annually\"");
}

#[test]
fn citation_page_formats_when_present() {
    assert_eq!(citation_page(&citation(None, Some(4))).as_deref(), Some("p. 4"));
    assert_eq!(citation_page(&citation(None, None)), None);
}

#[test]
fn citation_link_allows_http_and_https() {
    assert_eq!(
        citation_link(&citation(Some("https://docs.example.com/HR-01"), None)),
        Some("https://docs.example.com/HR-01")
    );
    assert_eq!(
        citation_link(&citation(Some(" HTTP://intranet/hr "), None)),
        Some("HTTP://intranet/hr")
    );
}

#[test]
fn citation_link_rejects_other_schemes() {
    assert_eq!(citation_link(&citation(Some("javascript:alert(1)"), None)), None);
    assert_eq!(citation_link(&citation(Some("data://text/html,hi"), None)), None);
    assert_eq!(citation_link(&citation(Some("/docs/HR-01"), None)), None);
    assert_eq!(citation_link(&citation(None, None)), None);
}
