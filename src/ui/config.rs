use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub toast_info: Color32,
    pub toast_error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub platform_card_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(120, 190, 255),
        subsection_heading: Color32::LIGHT_BLUE,
        central_panel: Color32::from_rgb(24, 28, 36),
        side_panel: Color32::from_rgb(16, 18, 24),
        accent: Color32::from_rgb(66, 133, 244),
        success: Color32::from_rgb(52, 168, 83),
        toast_info: Color32::from_rgb(40, 46, 58),
        toast_error: Color32::from_rgb(176, 48, 48),
    },
    side_panel_width: 180.0,
    platform_card_width: 150.0,
};

/// User-facing strings
pub struct UiText {
    pub app_title: &'static str,
    pub nav_heading: &'static str,
    pub total_budget_label: &'static str,
    pub platform_split_heading: &'static str,
    pub overview_heading: &'static str,
    pub social_heading: &'static str,
    pub tracking_heading: &'static str,
    pub launch_button: &'static str,
    pub update_strategy_button: &'static str,
    pub activate_button: &'static str,
    pub activating_button: &'static str,
    pub active_button: &'static str,
    pub settings_saved: &'static str,
    pub strategy_updated: &'static str,
    pub campaign_launched: &'static str,
    pub opening_prefix: &'static str,
    pub opening_suffix: &'static str,
    pub configuring_prefix: &'static str,
    pub configuring_suffix: &'static str,
    pub status_idle: &'static str,
    pub status_launching: &'static str,
    pub status_active: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Campaign Console",
    nav_heading: "Campaign",
    total_budget_label: "Total budget",
    platform_split_heading: "Platform split",
    overview_heading: "Overview",
    social_heading: "Channels",
    tracking_heading: "Tracking",
    launch_button: "Save Campaign Settings",
    update_strategy_button: "Update Strategy",
    activate_button: "Activate Campaign",
    activating_button: "Launching Campaign...",
    active_button: "✔ Campaign Active",
    settings_saved: "Campaign settings saved",
    strategy_updated: "Strategy updated successfully",
    campaign_launched: "Campaign successfully launched!",
    opening_prefix: "Opening ",
    opening_suffix: " campaign settings",
    configuring_prefix: "Configuring ",
    configuring_suffix: " ad settings",
    status_idle: "Not launched",
    status_launching: "Launching",
    status_active: "Active",
};
