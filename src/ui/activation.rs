use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::config::TIMING;
use crate::utils::app_time::{AppInstant, remaining};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActivationState {
    #[default]
    Idle,
    /// Waiting on the simulated launch call
    Launching { ready_at: AppInstant },
    /// `launched_at` is `None` when restored without a readable timestamp
    Active { launched_at: Option<DateTime<Utc>> },
}

/// Idle -> Launching -> Active. There is no way back from Active.
#[derive(Debug, Clone)]
pub struct CampaignActivation {
    state: ActivationState,
    delay: Duration,
}

impl Default for CampaignActivation {
    fn default() -> Self {
        Self::new(TIMING.activation_delay)
    }
}

impl CampaignActivation {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: ActivationState::Idle,
            delay,
        }
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Starts launching. Only possible from `Idle`.
    pub fn activate(&mut self, now: AppInstant) -> bool {
        if self.state != ActivationState::Idle {
            return false;
        }
        self.state = ActivationState::Launching {
            ready_at: now + self.delay,
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_activation {
            log::info!("[activation] launching campaign");
        }
        true
    }

    /// Completes a pending launch once its delay has elapsed. Returns the
    /// launch time on the tick that made the campaign active.
    pub fn tick(&mut self, now: AppInstant, wall_clock: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.state {
            ActivationState::Launching { ready_at } if now >= ready_at => {
                self.state = ActivationState::Active {
                    launched_at: Some(wall_clock),
                };

                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_activation {
                    log::info!("[activation] campaign active at {}", wall_clock);
                }
                Some(wall_clock)
            }
            _ => None,
        }
    }

    /// Rehydrates a previously persisted activation.
    pub fn restore(&mut self, launched_at: Option<DateTime<Utc>>) {
        self.state = ActivationState::Active { launched_at };
    }

    pub fn is_launching(&self) -> bool {
        matches!(self.state, ActivationState::Launching { .. })
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ActivationState::Active { .. })
    }

    pub fn launched_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            ActivationState::Active { launched_at } => launched_at,
            _ => None,
        }
    }

    pub fn time_remaining(&self, now: AppInstant) -> Option<Duration> {
        match self.state {
            ActivationState::Launching { ready_at } => Some(remaining(ready_at, now)),
            _ => None,
        }
    }
}
