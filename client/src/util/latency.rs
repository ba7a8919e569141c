//! Artificial network latency for mock backend calls.
//!
//! In the browser this is a `gloo-timers` sleep. Elsewhere (SSR, native
//! tests) it resolves immediately; event handlers never run there anyway.

#![allow(clippy::unused_async)]

use std::time::Duration;

/// Wait for `delay` before continuing.
pub async fn simulate(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        if !delay.is_zero() {
            gloo_timers::future::sleep(delay).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
