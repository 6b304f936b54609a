//! Client-side state.
//!
//! DESIGN
//! ======
//! One owned `AssistantState` lives in a single `RwSignal`. Handlers and
//! effects go through that signal instead of touching shared globals.

pub mod assistant;
