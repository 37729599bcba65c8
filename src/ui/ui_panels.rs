use eframe::egui::{ComboBox, ProgressBar, Slider, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::CAMPAIGN;
use crate::domain::{CampaignForm, FlagField, PlatformBudget, ProgressMetric, Section, TextField};
use crate::ui::activation::CampaignActivation;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::navigation::ViewController;
use crate::ui::styles::ConsoleUiExt;
use crate::ui::utils::spaced_separator;
use crate::utils::format_currency;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Everything a user can do in the console
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignEvent {
    Navigate(Section),
    /// A form control was committed (select picked, checkbox toggled, text field left)
    FormCommitted,
    BudgetChanged(f64),
    SocialIconClicked(String),
    PlatformCardClicked(String),
    SaveSettings,
    UpdateStrategy,
    ActivateCampaign,
}

/// Side panel listing the sections
pub struct NavigationPanel<'a> {
    navigation: &'a ViewController,
}

impl<'a> NavigationPanel<'a> {
    pub fn new(navigation: &'a ViewController) -> Self {
        Self { navigation }
    }
}

impl<'a> Panel for NavigationPanel<'a> {
    type Event = CampaignEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.add_space(10.0);
        ui.section_heading(UI_TEXT.nav_heading);
        ui.add_space(5.0);

        for section in self.navigation.sections() {
            let is_active = self.navigation.is_active(*section);
            if ui.selectable_label(is_active, section.title()).clicked() && !is_active {
                events.push(CampaignEvent::Navigate(*section));
            }
        }
        events
    }
}

/// Central panel content for the active section
pub struct SectionPanel<'a> {
    pub section: Section,
    pub form: &'a mut CampaignForm,
    pub form_dirty: &'a mut bool,
    pub platforms: &'a [PlatformBudget],
    pub total_budget: f64,
    pub activation: &'a CampaignActivation,
    pub progress: &'a [ProgressMetric],
}

impl<'a> SectionPanel<'a> {
    fn render_text_field(&mut self, ui: &mut Ui, field: TextField) -> bool {
        ui.field_heading(field.label());

        if let Some(options) = field.options() {
            let mut committed = false;
            let current = self.form.text(field).to_string();
            ComboBox::from_id_salt(field.key())
                .selected_text(current.as_str())
                .show_ui(ui, |ui| {
                    for option in options {
                        let value = self.form.text_mut(field);
                        if ui
                            .selectable_value(value, option.to_string(), *option)
                            .clicked()
                        {
                            committed = true;
                        }
                    }
                });
            ui.add_space(6.0);
            return committed;
        }

        let editor = if field.is_multiline() {
            TextEdit::multiline(self.form.text_mut(field)).desired_rows(3)
        } else {
            TextEdit::singleline(self.form.text_mut(field))
        };
        let response = ui.add(editor.desired_width(f32::INFINITY));
        if response.changed() {
            *self.form_dirty = true;
        }
        ui.add_space(6.0);

        // Text commits on blur, like a DOM `change` event
        response.lost_focus() && *self.form_dirty
    }

    fn render_fields(&mut self, ui: &mut Ui, events: &mut Vec<CampaignEvent>) {
        for field in CampaignForm::fields_in(self.section) {
            if self.render_text_field(ui, field) {
                events.push(CampaignEvent::FormCommitted);
            }
        }
    }

    fn render_overview(&self, ui: &mut Ui) {
        ui.field_heading(UI_TEXT.overview_heading);
        for metric in self.progress {
            ui.add(
                ProgressBar::new(metric.fraction())
                    .text(format!("{} ({:.0}%)", metric.label, metric.percent())),
            );
        }
    }

    fn render_social_icons(&self, ui: &mut Ui, events: &mut Vec<CampaignEvent>) {
        ui.field_heading(UI_TEXT.social_heading);
        ui.horizontal_wrapped(|ui| {
            for platform in CAMPAIGN.social_platforms {
                if ui.button(CAMPAIGN.platform_label(platform)).clicked() {
                    events.push(CampaignEvent::SocialIconClicked(platform.to_string()));
                }
            }
        });
    }

    fn render_budget(&self, ui: &mut Ui, events: &mut Vec<CampaignEvent>) {
        let slider = &CAMPAIGN.slider;
        let mut total = self.total_budget;

        ui.horizontal(|ui| {
            ui.field_heading(UI_TEXT.total_budget_label);
            ui.budget_figure(total);
        });
        let response = ui.add(
            Slider::new(&mut total, slider.min..=slider.max)
                .step_by(slider.step)
                .show_value(false),
        );
        if response.changed() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("[budget] slider moved to {}", total);
            }
            events.push(CampaignEvent::BudgetChanged(total));
        }

        spaced_separator(ui);
        ui.field_heading(UI_TEXT.platform_split_heading);
        ui.horizontal_wrapped(|ui| {
            for entry in self.platforms {
                if ui.platform_card(entry).clicked() {
                    events.push(CampaignEvent::PlatformCardClicked(entry.platform.clone()));
                }
            }
        });
    }

    fn render_tracking_flags(&mut self, ui: &mut Ui, events: &mut Vec<CampaignEvent>) {
        ui.field_heading(UI_TEXT.tracking_heading);
        for flag in FlagField::iter() {
            if ui.checkbox(self.form.flag_mut(flag), flag.label()).changed() {
                events.push(CampaignEvent::FormCommitted);
            }
        }
    }

    fn render_launch(&self, ui: &mut Ui, events: &mut Vec<CampaignEvent>) {
        ui.stat(
            "Objective",
            self.form.text(TextField::CampaignObjective),
            UI_CONFIG.colors.heading,
        );
        ui.stat(
            "Budget",
            &format_currency(self.total_budget),
            UI_CONFIG.colors.heading,
        );
        ui.add_space(10.0);

        if ui.button(UI_TEXT.launch_button).clicked() {
            events.push(CampaignEvent::SaveSettings);
        }
        ui.add_space(10.0);

        if ui.activation_button(self.activation) {
            events.push(CampaignEvent::ActivateCampaign);
        }
    }
}

impl<'a> Panel for SectionPanel<'a> {
    type Event = CampaignEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.add_space(10.0);
        ui.section_heading(self.section.title());
        ui.add_space(10.0);

        match self.section {
            Section::Objectives => {
                self.render_fields(ui, &mut events);
                spaced_separator(ui);
                self.render_overview(ui);
            }
            Section::Audience => {
                self.render_fields(ui, &mut events);
                spaced_separator(ui);
                self.render_social_icons(ui, &mut events);
            }
            Section::Content => {
                self.render_fields(ui, &mut events);
                if ui.button(UI_TEXT.update_strategy_button).clicked() {
                    events.push(CampaignEvent::UpdateStrategy);
                }
            }
            Section::Budget => self.render_budget(ui, &mut events),
            Section::Tracking => {
                self.render_fields(ui, &mut events);
                spaced_separator(ui);
                self.render_tracking_flags(ui, &mut events);
            }
            Section::Launch => self.render_launch(ui, &mut events),
        }

        // A single commit per frame is enough to save everything
        events.dedup();
        events
    }
}
