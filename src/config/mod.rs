//! Configuration module for the campaign console.

pub mod campaign;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod timing;

// Re-export commonly used items
pub use campaign::{CAMPAIGN, PlatformDefault};
pub use persistence::{PERSISTENCE, platform_budget_key};
pub use timing::TIMING;
