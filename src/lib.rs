#![allow(clippy::collapsible_if)]

// Core modules
pub mod budget;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use budget::{AllocationError, BudgetAllocator, ShareBasis, ZeroSharePolicy};
pub use domain::{CampaignForm, PlatformBudget, Section};
pub use persistence::{FormStore, MemoryPort, StorageError, StoragePort};
pub use ui::{CampaignApp, CampaignStore};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding the persisted campaign fields
    #[arg(long, default_value = config::PERSISTENCE.state_file)]
    pub state_file: PathBuf,

    /// Amount each platform's share of the budget is computed from
    #[arg(long, value_enum, default_value_t = ShareBasis::Current)]
    pub share_basis: ShareBasis,

    /// What to do when every platform budget is zero
    #[arg(long, value_enum, default_value_t = ZeroSharePolicy::EqualSplit)]
    pub zero_share_policy: ZeroSharePolicy,
}

impl Cli {
    pub fn allocator(&self) -> BudgetAllocator {
        BudgetAllocator::new(self.share_basis, self.zero_share_policy)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    port: Box<dyn StoragePort>,
    allocator: BudgetAllocator,
) -> Box<dyn eframe::App> {
    let store = FormStore::new(port);
    Box::new(CampaignApp::new(cc, store, allocator))
}
