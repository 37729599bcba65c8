//! Key/value persistence configuration

/// Fixed keys outside the per-field namespace
pub struct StorageKeys {
    pub total_budget: &'static str,
    pub campaign_active: &'static str,
    pub campaign_launch_time: &'static str,
}

pub struct PersistenceConfig {
    /// Every stored key is namespaced under this prefix
    pub prefix: &'static str,
    /// Native builds keep the key space in this JSON file
    pub state_file: &'static str,
    pub keys: StorageKeys,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    prefix: "marketingSystem_",
    state_file: ".campaign_state.json",
    keys: StorageKeys {
        total_budget: "totalBudget",
        campaign_active: "campaignActive",
        campaign_launch_time: "campaignLaunchTime",
    },
};

/// Storage key for a platform's budget.
/// Example: "facebookBudget"
pub fn platform_budget_key(platform: &str) -> String {
    format!("{}Budget", platform)
}
