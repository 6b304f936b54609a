//! Clickable follow-up suggestions.

use leptos::prelude::*;

use crate::net::types::AskResponse;
use crate::state::assistant::AssistantState;

#[cfg(test)]
#[path = "follow_ups_test.rs"]
mod follow_ups_test;

pub const FOLLOW_UP_HEADING: &str = "💡 You might also ask:";

pub fn follow_up_entries(response: Option<&AskResponse>) -> Vec<String> {
    response.map(|resp| resp.follow_ups().to_vec()).unwrap_or_default()
}

/// Suggestion list. Clicking an entry copies it into the question and asks
/// the client to submit it.
#[component]
pub fn FollowUpList(response: Memo<Option<AskResponse>>, state: RwSignal<AssistantState>) -> impl IntoView {
    move || {
        let entries = response.with(|resp| follow_up_entries(resp.as_ref()));
        if entries.is_empty() {
            return ().into_any();
        }
        view! {
            <h4>{FOLLOW_UP_HEADING}</h4>
            {entries
                .into_iter()
                .enumerate()
                .map(|(index, text)| {
                    view! {
                        <div
                            class="follow-up-suggestion"
                            on:click=move |_| state.update(|s| {
                                s.choose_follow_up(index);
                            })
                        >
                            {text}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        }
        .into_any()
    }
}
