// Core domain types
pub mod form;
pub mod platform;
pub mod progress;
pub mod section;

pub use form::{CampaignForm, FlagField, TextField};
pub use platform::{PlatformBudget, default_platforms};
pub use progress::ProgressMetric;
pub use section::Section;
