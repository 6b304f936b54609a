//! Wire DTOs for the `/ask` endpoint.
//!
//! DESIGN
//! ======
//! Only `answer` is required. Every other response field may be missing or
//! `null`, and either case means "nothing to display" for that section.
//! Fields the UI never shows (`policy_matches`, `metadata`) are ignored.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Body of `POST /ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub top_k: u32,
}

/// A source passage backing an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source document identifier (e.g. `"HR-01"`).
    #[serde(default)]
    pub doc_id: String,
    /// Section label within the document (e.g. `"3.2"`).
    #[serde(default)]
    pub section: String,
    /// Quoted passage text.
    #[serde(default)]
    pub snippet: String,
    /// Page number, when the source format has pages.
    #[serde(default)]
    pub page: Option<u32>,
    /// Link to the source document, when the backend knows one.
    #[serde(default)]
    pub url: Option<String>,
}

/// Parsed body of a successful `/ask` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<Citation>>,
    #[serde(default)]
    pub follow_up_suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub disclaimer: Option<String>,
}

impl AskResponse {
    /// Citations in backend order; empty when absent.
    pub fn citations(&self) -> &[Citation] {
        self.citations.as_deref().unwrap_or_default()
    }

    /// Follow-up suggestions in backend order; empty when absent.
    pub fn follow_ups(&self) -> &[String] {
        self.follow_up_suggestions.as_deref().unwrap_or_default()
    }

    /// Disclaimer text, treating a blank string as absent.
    pub fn disclaimer(&self) -> Option<&str> {
        self.disclaimer.as_deref().filter(|text| !text.trim().is_empty())
    }

    /// Confidence label; empty when the backend omitted it.
    pub fn confidence(&self) -> &str {
        self.confidence.as_deref().unwrap_or_default()
    }
}
