//! Console look and feel as extension methods on `egui::Ui`, so panels say
//! what they show ("a platform card", "the launch button") instead of
//! repeating colours and frames.

use eframe::egui::{Button, Color32, Frame, Margin, Response, RichText, Sense, Ui};

use crate::domain::PlatformBudget;
use crate::ui::activation::CampaignActivation;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::toast::{Toast, ToastKind};
use crate::utils::format_currency;

/// Background for a toast of the given kind.
pub fn toast_fill(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Info => UI_CONFIG.colors.toast_info,
        ToastKind::Error => UI_CONFIG.colors.toast_error,
    }
}

/// Status-bar wording and colour for the current launch state.
pub fn activation_status(activation: &CampaignActivation) -> (&'static str, Color32) {
    if activation.is_active() {
        (UI_TEXT.status_active, UI_CONFIG.colors.success)
    } else if activation.is_launching() {
        (UI_TEXT.status_launching, UI_CONFIG.colors.accent)
    } else {
        (UI_TEXT.status_idle, UI_CONFIG.colors.label)
    }
}

pub trait ConsoleUiExt {
    /// Uppercase heading at the top of a section or the nav.
    fn section_heading(&mut self, text: impl Into<String>);

    /// Caption above a form control or a group of controls.
    fn field_heading(&mut self, text: impl Into<String>);

    /// Small grey helper line.
    fn hint(&mut self, text: impl Into<String>);

    /// "Label: value" with the value in `color`.
    fn stat(&mut self, label: &str, value: &str, color: Color32);

    /// A dollar amount in the headline style.
    fn budget_figure(&mut self, amount: f64);

    /// Clickable card showing one platform's budget against its baseline.
    fn platform_card(&mut self, entry: &PlatformBudget) -> Response;

    /// The toast body, filled by kind.
    fn toast_frame(&mut self, toast: &Toast);

    /// The activation control for the current state. Returns true when the
    /// user asked to activate.
    fn activation_button(&mut self, activation: &CampaignActivation) -> bool;
}

impl ConsoleUiExt for Ui {
    fn section_heading(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).monospace());
    }

    fn field_heading(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn hint(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn stat(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.hint(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn budget_figure(&mut self, amount: f64) {
        self.label(
            RichText::new(format_currency(amount))
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn platform_card(&mut self, entry: &PlatformBudget) -> Response {
        let card = Frame::group(self.style()).show(self, |ui| {
            ui.set_width(UI_CONFIG.platform_card_width);
            ui.vertical(|ui| {
                ui.label(RichText::new(entry.label()).strong());
                ui.label(format_currency(entry.budget as f64));
                ui.hint(format!("started at {}", format_currency(entry.baseline as f64)));
            });
        });
        card.response.interact(Sense::click())
    }

    fn toast_frame(&mut self, toast: &Toast) {
        Frame::popup(self.style())
            .fill(toast_fill(toast.kind))
            .inner_margin(Margin::symmetric(14, 10))
            .show(self, |ui| {
                ui.label(RichText::new(&toast.message).color(Color32::WHITE));
            });
    }

    fn activation_button(&mut self, activation: &CampaignActivation) -> bool {
        if activation.is_launching() {
            self.horizontal(|ui| {
                ui.add_enabled(false, Button::new(UI_TEXT.activating_button));
                ui.spinner();
            });
            false
        } else if activation.is_active() {
            self.add(
                Button::new(RichText::new(UI_TEXT.active_button).color(Color32::WHITE))
                    .fill(UI_CONFIG.colors.success),
            );
            false
        } else {
            self.add(Button::new(UI_TEXT.activate_button).fill(UI_CONFIG.colors.accent))
                .clicked()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    #[test]
    fn error_toasts_stand_out_from_info() {
        assert_eq!(toast_fill(ToastKind::Error), UI_CONFIG.colors.toast_error);
        assert_ne!(toast_fill(ToastKind::Info), toast_fill(ToastKind::Error));
    }

    #[test]
    fn status_follows_launch_state() {
        let start = now();
        let mut activation = CampaignActivation::default();
        assert_eq!(activation_status(&activation).0, UI_TEXT.status_idle);

        activation.activate(start);
        assert_eq!(
            activation_status(&activation),
            (UI_TEXT.status_launching, UI_CONFIG.colors.accent)
        );

        activation.restore(None);
        assert_eq!(
            activation_status(&activation),
            (UI_TEXT.status_active, UI_CONFIG.colors.success)
        );
    }
}
