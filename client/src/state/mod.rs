//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` and provided via
//! context, so components stay thin and the logic stays unit-testable.

pub mod chat;
