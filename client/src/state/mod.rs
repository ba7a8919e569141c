//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` and `toast` are app-wide and provided as `RwSignal` contexts by
//! `app::App`. `form` is a per-page controller each page keeps in its own
//! signal.

pub mod form;
pub mod session;
pub mod toast;
