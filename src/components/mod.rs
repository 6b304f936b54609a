//! Leptos components rendered into the page's result regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the surrounding markup. Each component is mounted into one
//! existing region and re-renders from the current response memo. Backend
//! text only ever becomes text nodes.

pub mod answer;
pub mod citations;
pub mod disclaimer;
pub mod follow_ups;
