//! Fixed UI timers

use std::time::Duration;

pub struct TimingConfig {
    /// Simulated latency of the "activate campaign" call
    pub activation_delay: Duration,
    /// How long a toast stays visible
    pub toast_duration: Duration,
}

pub const TIMING: TimingConfig = TimingConfig {
    activation_delay: Duration::from_millis(1500),
    toast_duration: Duration::from_millis(3000),
};
