//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (DOM lookup,
//! clipboard) and pure formatting from the components and handlers.

pub mod answer_format;
pub mod clipboard;
pub mod dom;
