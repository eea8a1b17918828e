//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, timers) from
//! page and component logic to improve reuse and testability.

pub mod clock;
pub mod reply;
