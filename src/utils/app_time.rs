// src/utils/app_time.rs
// Monotonic clock for UI deadlines. `std::time::Instant` panics on
// wasm32-unknown-unknown, so the browser build goes through `web-time`.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Time left until `deadline`, zero once it has passed.
pub fn remaining(deadline: AppInstant, now: AppInstant) -> Duration {
    deadline.saturating_duration_since(now)
}
