//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`localStorage`, timers, the
//! clock) from page and component logic so the latter stays testable natively.

pub mod latency;
pub mod storage;
pub mod year;
