//! Stand-ins for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the payloads that validated forms hand to the backend, and
//! `mock_api` resolves them in-process after a simulated network delay. No
//! request ever leaves the browser.

pub mod mock_api;
pub mod types;
