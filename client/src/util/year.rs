//! Current calendar year for the footer copyright line.

/// UTC year of "now". Works in the browser through `time`'s wasm-bindgen clock.
#[must_use]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
