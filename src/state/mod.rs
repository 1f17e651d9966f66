//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `messages`) so pages can depend on
//! small focused models provided through Leptos context.

pub mod messages;
pub mod session;
