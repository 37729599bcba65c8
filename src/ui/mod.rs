// User interface components
pub mod activation;
pub mod app;
mod app_events;
mod app_storage;
pub mod config;
pub mod navigation;
pub mod styles;
pub mod toast;
pub mod ui_panels;
mod ui_render;
pub mod utils;

// Re-export main app
pub use app::{AppError, CampaignApp, CampaignStore};
pub use config::{UI_CONFIG, UI_TEXT};
pub use ui_panels::CampaignEvent;
