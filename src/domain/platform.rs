use crate::config::{CAMPAIGN, platform_budget_key};

/// One platform card's share of the campaign budget.
///
/// `baseline` is the budget the entry started with. It never changes when the
/// total is redistributed, so allocations can always be traced back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformBudget {
    pub platform: String,
    pub budget: u64,
    pub baseline: u64,
}

impl PlatformBudget {
    pub fn new(platform: impl Into<String>, budget: u64) -> Self {
        Self {
            platform: platform.into(),
            budget,
            baseline: budget,
        }
    }

    /// Key under which this entry's budget is stored, e.g. `instagramBudget`.
    pub fn storage_key(&self) -> String {
        platform_budget_key(&self.platform)
    }

    pub fn label(&self) -> &str {
        CAMPAIGN.platform_label(&self.platform)
    }
}

/// The platform cards the campaign starts with.
pub fn default_platforms() -> Vec<PlatformBudget> {
    CAMPAIGN
        .platforms
        .iter()
        .map(|p| PlatformBudget::new(p.id, p.budget))
        .collect()
}

/// Sum of current budgets across all entries.
pub fn total_allocated(entries: &[PlatformBudget]) -> u64 {
    entries.iter().map(|e| e.budget).sum()
}
