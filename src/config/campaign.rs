//! Campaign defaults: platforms, budget slider range and overview metrics.

/// A platform card shown in the budget section.
pub struct PlatformDefault {
    /// Identifier used for storage keys (`<id>Budget`)
    pub id: &'static str,
    pub label: &'static str,
    pub budget: u64,
}

/// Configuration for the total budget slider
pub struct BudgetSliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// The Master Campaign Configuration
pub struct CampaignConfig {
    pub platforms: &'static [PlatformDefault],
    // Historical total of the default platform budgets. Only used when the
    // entries carry no baseline to derive a reference total from.
    pub legacy_reference_total: f64,
    pub default_total_budget: f64,
    pub slider: BudgetSliderConfig,
    /// Platforms offered as quick links in the audience section
    pub social_platforms: &'static [&'static str],
    /// Overview progress bars: (label, percent)
    pub progress: &'static [(&'static str, f32)],
}

pub const CAMPAIGN: CampaignConfig = CampaignConfig {
    platforms: &[
        PlatformDefault {
            id: "facebook",
            label: "Facebook",
            budget: 1200,
        },
        PlatformDefault {
            id: "instagram",
            label: "Instagram",
            budget: 850,
        },
        PlatformDefault {
            id: "linkedin",
            label: "LinkedIn",
            budget: 600,
        },
        PlatformDefault {
            id: "twitter",
            label: "Twitter",
            budget: 400,
        },
    ],
    legacy_reference_total: 3050.0,
    default_total_budget: 3050.0,

    slider: BudgetSliderConfig {
        min: 500.0,
        max: 20_000.0,
        step: 50.0,
    },

    social_platforms: &["facebook", "instagram", "linkedin", "twitter", "tiktok"],

    progress: &[
        ("Campaign setup", 75.0),
        ("Audience definition", 60.0),
        ("Content calendar", 40.0),
        ("Compliance review", 90.0),
    ],
};

impl CampaignConfig {
    /// Display label for a platform id, falling back to the id itself.
    pub fn platform_label<'a>(&self, id: &'a str) -> &'a str {
        self.platforms
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.label)
            .unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_platform_budgets_sum_to_reference_total() {
        let sum: u64 = CAMPAIGN.platforms.iter().map(|p| p.budget).sum();
        assert_eq!(sum as f64, CAMPAIGN.legacy_reference_total);
    }

    #[test]
    fn default_total_sits_inside_slider_range() {
        assert!(CAMPAIGN.default_total_budget >= CAMPAIGN.slider.min);
        assert!(CAMPAIGN.default_total_budget <= CAMPAIGN.slider.max);
    }

    #[test]
    fn unknown_platform_label_falls_back_to_id() {
        assert_eq!(CAMPAIGN.platform_label("linkedin"), "LinkedIn");
        assert_eq!(CAMPAIGN.platform_label("tiktok"), "tiktok");
    }
}
