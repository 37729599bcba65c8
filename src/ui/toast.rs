use std::time::Duration;

use crate::config::TIMING;
use crate::utils::app_time::{AppInstant, remaining};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: AppInstant,
}

/// Shows one transient message at a time.
///
/// The message owns its own deadline, so replacing a toast also replaces the
/// pending auto-hide: an older message can never hide a newer one early.
#[derive(Debug, Clone)]
pub struct ToastController {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new(TIMING.toast_duration)
    }
}

impl ToastController {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: AppInstant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            expires_at: now + self.duration,
        });
    }

    pub fn info(&mut self, message: impl Into<String>, now: AppInstant) {
        self.show(message, ToastKind::Info, now);
    }

    /// Hides the toast once its deadline has passed. Returns true if it was
    /// hidden by this call.
    pub fn tick(&mut self, now: AppInstant) -> bool {
        let expired = self
            .current
            .as_ref()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Time until the visible toast hides, for scheduling a repaint.
    pub fn time_remaining(&self, now: AppInstant) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|toast| remaining(toast.expires_at, now))
    }
}
