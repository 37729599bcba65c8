use eframe::egui::{
    Align2, Area, CentralPanel, Context, Frame, Id, Margin, ScrollArea, SidePanel, TopBottomPanel,
    vec2,
};

use crate::domain::platform::total_allocated;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{ConsoleUiExt, activation_status};
use crate::ui::ui_panels::{CampaignEvent, NavigationPanel, Panel, SectionPanel};
use crate::utils::format_currency;
use crate::utils::time_utils::format_launch_time;

use super::app::CampaignApp;

impl CampaignApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) -> Vec<CampaignEvent> {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        SidePanel::left("navigation_panel")
            .exact_width(UI_CONFIG.side_panel_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| NavigationPanel::new(&self.navigation).render(ui))
            .inner
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> Vec<CampaignEvent> {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("section_scroll")
                    .show(ui, |ui| {
                        let mut panel = SectionPanel {
                            section: self.navigation.active(),
                            form: &mut self.form,
                            form_dirty: &mut self.form_dirty,
                            platforms: &self.platforms,
                            total_budget: self.total_budget,
                            activation: &self.activation,
                            progress: &self.progress,
                        };
                        panel.render(ui)
                    })
                    .inner
            })
            .inner
    }

    pub(super) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.stat(
                    UI_TEXT.total_budget_label,
                    &format_currency(self.total_budget),
                    UI_CONFIG.colors.heading,
                );
                ui.separator();
                ui.stat(
                    "Allocated",
                    &format_currency(total_allocated(&self.platforms) as f64),
                    UI_CONFIG.colors.heading,
                );
                ui.separator();

                let (status, color) = activation_status(&self.activation);
                ui.stat("Campaign", status, color);
                if let Some(launched_at) = self.activation.launched_at() {
                    ui.hint(format!("since {}", format_launch_time(launched_at)));
                }
            });
        });
    }

    pub(super) fn render_toast(&self, ctx: &Context) {
        let Some(toast) = self.toasts.visible() else {
            return;
        };

        Area::new(Id::new("toast"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-20.0, -40.0))
            .show(ctx, |ui| ui.toast_frame(toast));
    }
}
