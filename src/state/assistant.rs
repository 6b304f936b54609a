//! Question/answer session state and its transitions.
//!
//! DESIGN
//! ======
//! Visibility is three independent flags. Showing loading does not hide the
//! result or error on its own; `begin_ask` hides both before it shows
//! loading. Every transition here is pure so the full request flow is
//! testable without a browser.
//!
//! Overlapping submissions (a follow-up click while a request is pending)
//! are allowed. Each submission takes a new `request_seq`; only the
//! response carrying the latest sequence is applied.

use crate::config::TOP_K;
use crate::error::{ASK_FAILED_MESSAGE, ClientError};
use crate::net::types::{AskRequest, AskResponse};

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

/// A submission that passed validation and is waiting on the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAsk {
    pub seq: u64,
    pub request: AskRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantState {
    /// Current question field text (untrimmed).
    pub question: String,
    pub loading_visible: bool,
    pub result_visible: bool,
    pub error_visible: bool,
    pub submit_enabled: bool,
    pub error_message: String,
    /// Response currently rendered in the result region.
    pub response: Option<AskResponse>,
    /// Sequence of the most recently issued request.
    pub request_seq: u64,
    /// Bumped when a follow-up suggestion is chosen; the browser layer
    /// submits on every change.
    pub follow_up_seq: u64,
    pub copy_confirmed: bool,
    pub copy_feedback_seq: u64,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            question: String::new(),
            loading_visible: false,
            result_visible: false,
            error_visible: false,
            submit_enabled: true,
            error_message: String::new(),
            response: None,
            request_seq: 0,
            follow_up_seq: 0,
            copy_confirmed: false,
            copy_feedback_seq: 0,
        }
    }
}

impl AssistantState {
    pub fn show_loading(&mut self) {
        self.loading_visible = true;
        self.submit_enabled = false;
    }

    pub fn hide_loading(&mut self) {
        self.loading_visible = false;
        self.submit_enabled = true;
    }

    pub fn show_result(&mut self) {
        self.result_visible = true;
    }

    pub fn hide_result(&mut self) {
        self.result_visible = false;
    }

    pub fn show_error(&mut self, message: &str) {
        message.clone_into(&mut self.error_message);
        self.error_visible = true;
    }

    pub fn hide_error(&mut self) {
        self.error_visible = false;
    }

    /// Validate the question and move into the loading state.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::EmptyQuestion` (and shows it) when the trimmed
    /// question is empty. No request is issued in that case.
    pub fn begin_ask(&mut self) -> Result<PendingAsk, ClientError> {
        let question = self.question.trim();
        if question.is_empty() {
            let err = ClientError::EmptyQuestion;
            self.show_error(err.user_message());
            return Err(err);
        }
        let request = AskRequest { question: question.to_owned(), top_k: TOP_K };

        self.hide_error();
        self.hide_result();
        self.response = None;
        self.show_loading();
        self.request_seq += 1;
        Ok(PendingAsk { seq: self.request_seq, request })
    }

    /// Apply the outcome of request `seq`.
    ///
    /// Returns `false` without touching anything when a newer request has
    /// been issued since; its own completion will settle the UI.
    pub fn finish_ask(&mut self, seq: u64, outcome: Result<AskResponse, ClientError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        match outcome {
            Ok(response) => {
                self.response = Some(response);
                self.show_result();
            }
            Err(_) => self.show_error(ASK_FAILED_MESSAGE),
        }
        self.hide_loading();
        true
    }

    /// Put the `index`th follow-up suggestion into the question field and
    /// request a submission. Returns `false` for an out-of-range index.
    pub fn choose_follow_up(&mut self, index: usize) -> bool {
        let Some(suggestion) = self
            .response
            .as_ref()
            .and_then(|resp| resp.follow_ups().get(index))
            .cloned()
        else {
            return false;
        };
        self.question = suggestion;
        self.follow_up_seq += 1;
        true
    }

    /// Reset the question and hide the result and error regions.
    pub fn clear(&mut self) {
        self.question.clear();
        self.hide_result();
        self.hide_error();
        self.response = None;
    }

    /// Plain answer text to put on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NothingToCopy` (and shows it) when no answer is
    /// displayed.
    pub fn begin_copy(&mut self) -> Result<String, ClientError> {
        match self.displayed_answer() {
            Some(answer) => Ok(answer.to_owned()),
            None => {
                let err = ClientError::NothingToCopy;
                self.show_error(err.user_message());
                Err(err)
            }
        }
    }

    /// Switch the copy button to its confirmation label. The returned token
    /// is handed back to `expire_copy_feedback` once the feedback period ends.
    pub fn copy_succeeded(&mut self) -> u64 {
        self.copy_confirmed = true;
        self.copy_feedback_seq += 1;
        self.copy_feedback_seq
    }

    /// Restore the copy button label unless a later copy restarted the timer.
    pub fn expire_copy_feedback(&mut self, token: u64) {
        if token == self.copy_feedback_seq {
            self.copy_confirmed = false;
        }
    }

    pub fn copy_failed(&mut self, err: &ClientError) {
        self.show_error(err.user_message());
    }

    fn displayed_answer(&self) -> Option<&str> {
        self.response
            .as_ref()
            .map(|resp| resp.answer.as_str())
            .filter(|answer| self.result_visible && !answer.is_empty())
    }
}
