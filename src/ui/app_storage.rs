use strum::IntoEnumIterator;

use super::app::CampaignApp;
use crate::config::PERSISTENCE;
use crate::domain::{FlagField, TextField};
use crate::utils::parse_iso_timestamp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl CampaignApp {
    /// Rehydrates the form, budgets and activation from the store. Missing or
    /// unreadable keys keep their defaults.
    pub fn load_saved_data(&mut self) {
        for field in TextField::iter() {
            if let Some(value) = self.store.load::<String>(field.key()) {
                self.form.set_text(field, value);
            }
        }
        for flag in FlagField::iter() {
            if let Some(value) = self.store.load::<bool>(flag.key()) {
                self.form.set_flag(flag, value);
            }
        }

        // Platform budgets are only meaningful next to the total they were split from
        if let Some(total) = self
            .store
            .load_number(PERSISTENCE.keys.total_budget)
            .filter(|total| *total > 0.0)
        {
            self.total_budget = total;
            for entry in &mut self.platforms {
                if let Some(budget) = self
                    .store
                    .load_number(&entry.storage_key())
                    .filter(|budget| *budget >= 0.0)
                {
                    entry.budget = budget.round() as u64;
                }
            }
        }

        if self.store.load::<bool>(PERSISTENCE.keys.campaign_active) == Some(true) {
            let launched_at = self
                .store
                .load::<String>(PERSISTENCE.keys.campaign_launch_time)
                .and_then(|text| parse_iso_timestamp(&text));
            self.activation.restore(launched_at);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!(
                "Loaded saved data: total {}, campaign active: {}",
                self.total_budget,
                self.activation.is_active()
            );
        }
    }

    /// Writes every text field and checkbox flag as one batch.
    pub fn save_all_form_data(&mut self) {
        let mut batch = self.store.batch();
        for field in TextField::iter() {
            batch.save(field.key(), self.form.text(field));
        }
        for flag in FlagField::iter() {
            batch.save(flag.key(), &self.form.flag(flag));
        }
        batch.commit();
        self.form_dirty = false;
    }
}
