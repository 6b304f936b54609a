//! Optional disclaimer note appended to the result region.

use leptos::prelude::*;

use crate::net::types::AskResponse;

#[cfg(test)]
#[path = "disclaimer_test.rs"]
mod disclaimer_test;

pub const DISCLAIMER_LABEL: &str = "⚠️ Note:";

pub fn disclaimer_text(response: Option<&AskResponse>) -> Option<String> {
    response.and_then(|resp| resp.disclaimer()).map(str::to_owned)
}

/// Note block for the current response. Replaced, not accumulated, when the
/// next response arrives.
#[component]
pub fn DisclaimerNote(response: Memo<Option<AskResponse>>) -> impl IntoView {
    move || {
        response.with(|resp| disclaimer_text(resp.as_ref())).map(|text| {
            view! {
                <div class="disclaimer">
                    <p>
                        <strong>{DISCLAIMER_LABEL}</strong>
                        " "
                        {text}
                    </p>
                </div>
            }
        })
    }
}
