use super::*;
use crate::net::types::Citation;

fn citation(doc_id: &str, section: &str, snippet: &str) -> Citation {
    Citation {
        doc_id: doc_id.to_owned(),
        section: section.to_owned(),
        snippet: snippet.to_owned(),
        page: None,
        url: None,
    }
}

fn response_with(citations: Option<Vec<Citation>>) -> AskResponse {
    AskResponse { answer: "ok".to_owned(), citations, ..AskResponse::default() }
}

#[test]
fn no_response_has_no_blocks() {
    assert!(citation_blocks(None).is_empty());
}

#[test]
fn absent_or_empty_citations_have_no_blocks() {
    assert!(citation_blocks(Some(&response_with(None))).is_empty());
    assert!(citation_blocks(Some(&response_with(Some(Vec::new())))).is_empty());
}

#[test]
fn blocks_match_input_order_and_count() {
    let resp = response_with(Some(vec![
        citation("HR-01", "3.2", "20 days annually"),
        citation("HR-07", "1.1", "Sick leave"),
        citation("IT-02", "4", "Laptops"),
    ]));
    let headers: Vec<String> = citation_blocks(Some(&resp)).into_iter().map(|b| b.header).collect();
    assert_eq!(headers, ["HR-01 - 3.2", "HR-07 - 1.1", "IT-02 - 4"]);
}

#[test]
fn pto_citation_renders_header_and_quoted_snippet() {
    let resp = response_with(Some(vec![citation("HR-01", "3.2", "20 days annually")]));
    let blocks = citation_blocks(Some(&resp));
    assert_eq!(
        blocks,
        [CitationBlock {
            header: "HR-01 - 3.2".to_owned(),
            snippet: "\"20 days annually\"".to_owned(),
            page: None,
            link: None,
        }]
    );
}

#[test]
fn unsafe_citation_url_is_dropped() {
    let mut c = citation("HR-01", "3.2", "x");
    c.url = Some("javascript:alert(1)".to_owned());
    c.page = Some(12);
    let blocks = citation_blocks(Some(&response_with(Some(vec![c]))));
    assert_eq!(blocks[0].link, None);
    assert_eq!(blocks[0].page.as_deref(), Some("p. 12"));
}
