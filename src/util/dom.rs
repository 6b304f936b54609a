//! Lookup and event wiring for the page markup the client attaches to.
//!
//! The markup is owned by the page, not by this crate. Every element is
//! located by a stable id once at startup; a missing or mistyped element
//! aborts attachment instead of failing later inside a handler.

#[cfg(feature = "csr")]
use crate::error::ClientError;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

pub const QUESTION_INPUT_ID: &str = "questionInput";
pub const ASK_BUTTON_ID: &str = "askBtn";
pub const CLEAR_BUTTON_ID: &str = "clearBtn";
pub const COPY_BUTTON_ID: &str = "copyBtn";
pub const LOADING_ID: &str = "loading";
pub const RESULT_ID: &str = "result";
pub const ERROR_ID: &str = "error";
pub const ANSWER_ID: &str = "answer";
pub const CITATIONS_ID: &str = "citations";
pub const FOLLOW_UP_ID: &str = "followUp";
pub const CONFIDENCE_ID: &str = "confidence";
pub const ERROR_MESSAGE_ID: &str = "errorMessage";

/// Class toggled to show or hide a region.
pub const HIDDEN_CLASS: &str = "hidden";

/// Every id the page must provide.
pub const REQUIRED_IDS: [&str; 12] = [
    QUESTION_INPUT_ID,
    ASK_BUTTON_ID,
    CLEAR_BUTTON_ID,
    COPY_BUTTON_ID,
    LOADING_ID,
    RESULT_ID,
    ERROR_ID,
    ANSWER_ID,
    CITATIONS_ID,
    FOLLOW_UP_ID,
    CONFIDENCE_ID,
    ERROR_MESSAGE_ID,
];

/// First required id for which `present` returns `false`.
pub fn first_missing_id(present: impl Fn(&str) -> bool) -> Option<&'static str> {
    REQUIRED_IDS.into_iter().find(|id| !present(id))
}

/// Handles to the page elements, resolved once at startup.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct Elements {
    pub question_input: web_sys::HtmlInputElement,
    pub ask_button: web_sys::HtmlButtonElement,
    pub clear_button: web_sys::HtmlElement,
    pub copy_button: web_sys::HtmlElement,
    pub loading: web_sys::HtmlElement,
    pub result: web_sys::HtmlElement,
    pub error: web_sys::HtmlElement,
    pub answer: web_sys::HtmlElement,
    pub citations: web_sys::HtmlElement,
    pub follow_up: web_sys::HtmlElement,
    pub confidence: web_sys::HtmlElement,
    pub error_message: web_sys::HtmlElement,
}

#[cfg(feature = "csr")]
impl Elements {
    /// Resolve every required element.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` for the first absent id and
    /// `WrongElementType` when the input or ask button has the wrong tag.
    pub fn locate(document: &web_sys::Document) -> Result<Self, ClientError> {
        if let Some(id) = first_missing_id(|id| document.get_element_by_id(id).is_some()) {
            return Err(ClientError::MissingElement { id });
        }
        Ok(Self {
            question_input: typed(document, QUESTION_INPUT_ID)?,
            ask_button: typed(document, ASK_BUTTON_ID)?,
            clear_button: typed(document, CLEAR_BUTTON_ID)?,
            copy_button: typed(document, COPY_BUTTON_ID)?,
            loading: typed(document, LOADING_ID)?,
            result: typed(document, RESULT_ID)?,
            error: typed(document, ERROR_ID)?,
            answer: typed(document, ANSWER_ID)?,
            citations: typed(document, CITATIONS_ID)?,
            follow_up: typed(document, FOLLOW_UP_ID)?,
            confidence: typed(document, CONFIDENCE_ID)?,
            error_message: typed(document, ERROR_MESSAGE_ID)?,
        })
    }
}

#[cfg(feature = "csr")]
fn typed<T: wasm_bindgen::JsCast>(document: &web_sys::Document, id: &'static str) -> Result<T, ClientError> {
    use wasm_bindgen::JsCast;
    document
        .get_element_by_id(id)
        .ok_or(ClientError::MissingElement { id })?
        .dyn_into::<T>()
        .map_err(|_| ClientError::WrongElementType { id })
}

/// Event listener registered on a page element.
#[cfg(feature = "csr")]
pub type Listener = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>;

/// Register `handler` for `event` on `target`.
///
/// The returned closure must be kept alive for as long as the listener
/// should fire.
///
/// # Errors
///
/// Returns `ClientError::Listener` if the browser rejects the registration.
#[cfg(feature = "csr")]
pub fn listen(
    target: &web_sys::EventTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<Listener, ClientError> {
    use wasm_bindgen::JsCast;

    let closure = Listener::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Listener { event, reason: format!("{e:?}") })?;
    Ok(closure)
}

#[cfg(feature = "csr")]
pub fn set_hidden(element: &web_sys::HtmlElement, hidden: bool) {
    let _ = element.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
}

#[cfg(feature = "csr")]
pub fn is_enter_key(event: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .is_some_and(|ev| ev.key() == "Enter")
}
