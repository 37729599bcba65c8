use eframe::egui::{Context, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Toast text for a platform quick link.
pub fn opening_message(platform: &str) -> String {
    use crate::ui::config::UI_TEXT;
    format!(
        "{}{}{}",
        UI_TEXT.opening_prefix, platform, UI_TEXT.opening_suffix
    )
}

/// Toast text for a platform budget card.
pub fn configuring_message(platform: &str) -> String {
    use crate::ui::config::UI_TEXT;
    format!(
        "{}{}{}",
        UI_TEXT.configuring_prefix, platform, UI_TEXT.configuring_suffix
    )
}
