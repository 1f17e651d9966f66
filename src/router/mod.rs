//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` declares what each path requires, `guard` decides whether the
//! current session satisfies it. Both are plain data and functions so they
//! can be tested without a browser.

pub mod guard;
pub mod routes;
