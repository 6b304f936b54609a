//! Browser client: attaches to the page and routes events through state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `launch` runs once per page load. It locates the page elements, mounts
//! the result components into their regions, and keeps the event listeners
//! alive for the page lifetime in a thread-local slot. Everything runs on the
//! browser event loop; the `/ask` call and the clipboard write are the only
//! suspension points.
//!
//! Effects mirror `AssistantState` onto elements the page owns (visibility
//! classes, button state, confidence, error text, question field, copy
//! label). Handlers only ever write state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::answer::AnswerText;
use crate::components::citations::CitationList;
use crate::components::disclaimer::DisclaimerNote;
use crate::components::follow_ups::FollowUpList;
use crate::config::ClientConfig;
use crate::error::{ClientError, ErrorKind};
use crate::net::api;
use crate::state::assistant::AssistantState;
use crate::util::answer_format::{confidence_class, confidence_label};
use crate::util::clipboard;
use crate::util::dom::{self, Elements, Listener};

/// Copy button label while the confirmation is showing.
const COPIED_LABEL: &str = "Copied!";

thread_local! {
    static CLIENT: RefCell<Option<AssistantClient>> = const { RefCell::new(None) };
}

/// Attach the client once the document has been parsed.
pub fn launch() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        report("start", &ClientError::NoDocument);
        return;
    };

    if document.ready_state() != "loading" {
        attach_and_store(&document);
        return;
    }

    let ready_document = document.clone();
    let on_ready = Closure::once_into_js(move || attach_and_store(&ready_document));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("failed to wait for DOMContentLoaded: {e:?}");
    }
}

/// Log a failure at a level chosen by its kind. Nothing here reaches the page.
fn report(action: &str, err: &ClientError) {
    match err.kind() {
        ErrorKind::Setup => log::error!("policy assistant failed to start: {err}"),
        kind if kind.is_diagnostic() => log::error!("{action} failed: {err}"),
        _ => log::debug!("{action} rejected: {err}"),
    }
}

fn attach_and_store(document: &web_sys::Document) {
    match AssistantClient::attach(document) {
        Ok(client) => {
            log::info!("policy assistant attached");
            CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
        }
        Err(err) => report("start", &err),
    }
}

/// A client attached to the page.
///
/// Holds the reactive owner and the registered listeners; both must outlive
/// every event the page can still fire, so the client is never dropped.
pub struct AssistantClient {
    _owner: Owner,
    _listeners: Vec<Listener>,
}

impl AssistantClient {
    /// Locate the page elements and wire state, components, and events.
    ///
    /// # Errors
    ///
    /// Returns a setup error if a required element is missing or mistyped,
    /// or if a listener cannot be registered. Nothing is wired in that case.
    pub fn attach(document: &web_sys::Document) -> Result<Self, ClientError> {
        let elements = Rc::new(Elements::locate(document)?);
        let _ = any_spawner::Executor::init_wasm_bindgen();

        let owner = Owner::new();
        let listeners = owner.with(|| {
            let assistant = Assistant {
                state: RwSignal::new(AssistantState::default()),
                elements,
                config: Rc::new(ClientConfig::default()),
            };
            log::debug!("backend: {}", assistant.config.api_url);
            assistant.mount_regions();
            assistant.bind_effects();
            assistant.bind_events()
        })?;

        Ok(Self { _owner: owner, _listeners: listeners })
    }
}

/// Handle shared by every listener and effect of one attached client.
#[derive(Clone)]
struct Assistant {
    state: RwSignal<AssistantState>,
    elements: Rc<Elements>,
    config: Rc<ClientConfig>,
}

impl Assistant {
    fn mount_regions(&self) {
        let state = self.state;
        let response = Memo::new(move |_| state.with(|s| s.response.clone()));
        let els = &self.elements;

        for region in [&els.answer, &els.citations, &els.follow_up] {
            region.set_text_content(None);
        }

        leptos::mount::mount_to(els.answer.clone(), move || view! { <AnswerText response=response/> }).forget();
        leptos::mount::mount_to(els.citations.clone(), move || view! { <CitationList response=response/> }).forget();
        leptos::mount::mount_to(els.follow_up.clone(), move || {
            view! { <FollowUpList response=response state=state/> }
        })
        .forget();
        leptos::mount::mount_to(els.result.clone(), move || view! { <DisclaimerNote response=response/> }).forget();
    }

    fn bind_effects(&self) {
        let state = self.state;

        let els = Rc::clone(&self.elements);
        Effect::new(move || {
            state.with(|s| {
                dom::set_hidden(&els.loading, !s.loading_visible);
                dom::set_hidden(&els.result, !s.result_visible);
                dom::set_hidden(&els.error, !s.error_visible);
                els.ask_button.set_disabled(!s.submit_enabled);
                els.error_message.set_text_content(Some(&s.error_message));
            });
        });

        let els = Rc::clone(&self.elements);
        Effect::new(move || {
            let confidence = state.with(|s| s.response.as_ref().map(|r| r.confidence().to_owned()));
            if let Some(confidence) = confidence {
                els.confidence.set_text_content(confidence_label(&confidence).as_deref());
                els.confidence.set_class_name(&confidence_class(&confidence));
            }
        });

        // Programmatic question changes (follow-up picks, clear).
        let els = Rc::clone(&self.elements);
        Effect::new(move || {
            state.with(|s| {
                if els.question_input.value() != s.question {
                    els.question_input.set_value(&s.question);
                }
            });
        });

        let els = Rc::clone(&self.elements);
        let idle_label = els.copy_button.text_content().unwrap_or_default();
        Effect::new(move || {
            let label = if state.with(|s| s.copy_confirmed) { COPIED_LABEL } else { idle_label.as_str() };
            els.copy_button.set_text_content(Some(label));
        });

        let follow_up_seq = Memo::new(move |_| state.with(|s| s.follow_up_seq));
        let this = self.clone();
        Effect::new(move || {
            if follow_up_seq.get() > 0 {
                this.submit();
            }
        });
    }

    fn bind_events(&self) -> Result<Vec<Listener>, ClientError> {
        let els = &self.elements;
        let mut listeners = Vec::with_capacity(5);

        let this = self.clone();
        listeners.push(dom::listen(&els.ask_button, "click", move |_| {
            this.sync_question();
            this.submit();
        })?);

        let this = self.clone();
        listeners.push(dom::listen(&els.question_input, "keypress", move |ev| {
            // Enter follows the ask button's disabled state.
            if dom::is_enter_key(&ev) && this.state.with_untracked(|s| s.submit_enabled) {
                this.sync_question();
                this.submit();
            }
        })?);

        let this = self.clone();
        listeners.push(dom::listen(&els.question_input, "input", move |_| this.sync_question())?);

        let this = self.clone();
        listeners.push(dom::listen(&els.clear_button, "click", move |_| this.clear())?);

        let this = self.clone();
        listeners.push(dom::listen(&els.copy_button, "click", move |_| this.copy())?);

        Ok(listeners)
    }

    fn sync_question(&self) {
        let value = self.elements.question_input.value();
        self.state.update(|s| s.question = value);
    }

    fn submit(&self) {
        let Some(begun) = self.state.try_update(AssistantState::begin_ask) else {
            return;
        };
        let pending = match begun {
            Ok(pending) => pending,
            Err(err) => {
                report("ask", &err);
                return;
            }
        };

        let state = self.state;
        let config = Rc::clone(&self.config);
        leptos::task::spawn_local(async move {
            let outcome = api::ask(&config, &pending.request).await;
            if let Err(err) = &outcome {
                report(&format!("ask #{}", pending.seq), err);
            }
            let applied = state
                .try_update(|s| s.finish_ask(pending.seq, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("discarded response for superseded ask #{}", pending.seq);
            }
        });
    }

    fn clear(&self) {
        self.state.update(AssistantState::clear);
        let _ = self.elements.question_input.focus();
    }

    fn copy(&self) {
        let text = match self.state.try_update(AssistantState::begin_copy) {
            Some(Ok(text)) => text,
            Some(Err(err)) => {
                report("copy", &err);
                return;
            }
            None => return,
        };

        let state = self.state;
        let feedback = self.config.copy_feedback;
        leptos::task::spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    let Some(token) = state.try_update(AssistantState::copy_succeeded) else {
                        return;
                    };
                    gloo_timers::future::sleep(feedback).await;
                    state.update(|s| s.expire_copy_feedback(token));
                }
                Err(err) => {
                    report("copy", &err);
                    state.update(|s| s.copy_failed(&err));
                }
            }
        });
    }
}
