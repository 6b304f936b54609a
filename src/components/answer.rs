//! Answer body with line breaks.

use leptos::prelude::*;

use crate::net::types::AskResponse;
use crate::util::answer_format::answer_lines;

/// Answer text, one text node per line separated by `<br>`.
#[component]
pub fn AnswerText(response: Memo<Option<AskResponse>>) -> impl IntoView {
    move || {
        let lines = response.with(|resp| resp.as_ref().map(|r| answer_lines(&r.answer)).unwrap_or_default());
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| ((index > 0).then(|| view! { <br/> }), line))
            .collect::<Vec<_>>()
    }
}
