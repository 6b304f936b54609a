//! Supporting citation list.

use leptos::prelude::*;

use crate::net::types::AskResponse;
use crate::util::answer_format::{citation_header, citation_link, citation_page, quoted_snippet};

#[cfg(test)]
#[path = "citations_test.rs"]
mod citations_test;

pub const SOURCES_HEADING: &str = "📚 Sources";

/// Display-ready text for one citation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitationBlock {
    pub header: String,
    pub snippet: String,
    pub page: Option<String>,
    pub link: Option<String>,
}

/// One block per citation, in response order.
pub fn citation_blocks(response: Option<&AskResponse>) -> Vec<CitationBlock> {
    response
        .map(|resp| resp.citations())
        .unwrap_or_default()
        .iter()
        .map(|citation| CitationBlock {
            header: citation_header(citation),
            snippet: quoted_snippet(&citation.snippet),
            page: citation_page(citation),
            link: citation_link(citation).map(str::to_owned),
        })
        .collect()
}

/// Sources header plus citation blocks; renders nothing without citations.
#[component]
pub fn CitationList(response: Memo<Option<AskResponse>>) -> impl IntoView {
    move || {
        let blocks = response.with(|resp| citation_blocks(resp.as_ref()));
        if blocks.is_empty() {
            return ().into_any();
        }
        view! {
            <h4>{SOURCES_HEADING}</h4>
            {blocks.into_iter().map(|block| view! { <CitationCard block=block/> }).collect::<Vec<_>>()}
        }
        .into_any()
    }
}

#[component]
fn CitationCard(block: CitationBlock) -> impl IntoView {
    let CitationBlock { header, snippet, page, link } = block;
    view! {
        <div class="citation">
            <div class="citation-header">{header}</div>
            <div class="citation-snippet">{snippet}</div>
            {page.map(|page| view! { <div class="citation-page">{page}</div> })}
            {link.map(|href| {
                view! {
                    <a class="citation-link" href=href target="_blank" rel="noopener noreferrer">
                        "View source"
                    </a>
                }
            })}
        </div>
    }
}
