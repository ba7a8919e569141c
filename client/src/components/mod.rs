//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome (header, footer, card) and form
//! building blocks. Shared state is read from Leptos context providers; form
//! state is passed in by the owning page.

pub mod alert_banner;
pub mod auth_form_card;
pub mod footer;
pub mod form_field;
pub mod header;
pub mod page_shell;
pub mod social_login_button;
pub mod toaster;
