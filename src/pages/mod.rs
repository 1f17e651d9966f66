//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (reading params, calling the
//! backend, updating the session) and keeps markup minimal.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
