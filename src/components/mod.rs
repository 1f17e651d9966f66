//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state from context and keep browser-only effects
//! behind the `hydrate` feature.

pub mod guarded;
pub mod nav_bar;
pub mod toasts;
