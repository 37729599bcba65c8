use eframe::{Frame, egui};
use std::fmt;
use std::time::Duration;

use crate::budget::{AllocationError, BudgetAllocator};
use crate::config::CAMPAIGN;
use crate::domain::{CampaignForm, PlatformBudget, ProgressMetric, default_platforms};
use crate::persistence::{FormStore, StoragePort};
use crate::ui::activation::CampaignActivation;
use crate::ui::navigation::ViewController;
use crate::ui::toast::ToastController;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::{AppInstant, now};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The budget could not be redistributed across platforms
    Allocation(AllocationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Allocation(e) => write!(f, "Budget not redistributed: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AllocationError> for AppError {
    fn from(e: AllocationError) -> Self {
        AppError::Allocation(e)
    }
}

/// The key/value store the console persists through
pub type CampaignStore = FormStore<Box<dyn StoragePort>>;

pub struct CampaignApp {
    pub(super) navigation: ViewController,
    pub(super) form: CampaignForm,
    // Set by text edits, cleared by a save of all form data
    pub(super) form_dirty: bool,
    pub(super) total_budget: f64,
    pub(super) platforms: Vec<PlatformBudget>,
    pub(super) allocator: BudgetAllocator,
    pub(super) progress: Vec<ProgressMetric>,
    pub(super) toasts: ToastController,
    pub(super) activation: CampaignActivation,
    pub(super) store: CampaignStore,
    pub(super) last_error: Option<AppError>,
}

impl CampaignApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: CampaignStore,
        allocator: BudgetAllocator,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self::with_store(store, allocator)
    }

    /// Builds the console with default campaign data, then rehydrates
    /// whatever `store` holds.
    pub fn with_store(store: CampaignStore, allocator: BudgetAllocator) -> Self {
        let mut app = Self {
            navigation: ViewController::default(),
            form: CampaignForm::default(),
            form_dirty: false,
            total_budget: CAMPAIGN.default_total_budget,
            platforms: default_platforms(),
            allocator,
            progress: Vec::new(),
            toasts: ToastController::default(),
            activation: CampaignActivation::default(),
            store,
            last_error: None,
        };

        app.init_progress_bars();
        app.load_saved_data();
        app
    }

    fn init_progress_bars(&mut self) {
        self.progress = CAMPAIGN
            .progress
            .iter()
            .map(|(label, percent)| ProgressMetric::new(*label, *percent))
            .collect();
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn platforms(&self) -> &[PlatformBudget] {
        &self.platforms
    }

    pub fn form(&self) -> &CampaignForm {
        &self.form
    }

    pub fn navigation(&self) -> &ViewController {
        &self.navigation
    }

    pub fn activation(&self) -> &CampaignActivation {
        &self.activation
    }

    pub fn toasts(&self) -> &ToastController {
        &self.toasts
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// The nearest pending deadline (toast hide or launch completion).
    pub(super) fn next_deadline(&self, now: AppInstant) -> Option<Duration> {
        match (
            self.toasts.time_remaining(now),
            self.activation.time_remaining(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl eframe::App for CampaignApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Pick up text that was typed but never committed by losing focus
        if self.form_dirty {
            self.save_all_form_data();
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = now();
        self.tick(now);

        let mut events = self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        events.extend(self.render_central_panel(ctx));
        for event in events {
            self.handle_event(event, now);
        }

        self.render_toast(ctx);

        if let Some(wait) = self.next_deadline(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
