use chrono::Utc;

use super::app::{AppError, CampaignApp};
use crate::config::PERSISTENCE;
use crate::ui::config::UI_TEXT;
use crate::ui::toast::ToastKind;
use crate::ui::ui_panels::CampaignEvent;
use crate::ui::utils::{configuring_message, opening_message};
use crate::utils::app_time::AppInstant;
use crate::utils::to_iso_timestamp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl CampaignApp {
    pub fn handle_event(&mut self, event: CampaignEvent, now: AppInstant) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[ui] {:?}", event);
        }

        match event {
            CampaignEvent::Navigate(section) => {
                self.navigation.activate(section);
            }
            CampaignEvent::FormCommitted => self.save_all_form_data(),
            CampaignEvent::BudgetChanged(total) => self.set_total_budget(total, now),
            CampaignEvent::SocialIconClicked(platform) => {
                self.toasts.info(opening_message(&platform), now);
            }
            CampaignEvent::PlatformCardClicked(platform) => {
                self.toasts.info(configuring_message(&platform), now);
            }
            CampaignEvent::SaveSettings => {
                self.toasts.info(UI_TEXT.settings_saved, now);
                self.save_all_form_data();
            }
            CampaignEvent::UpdateStrategy => {
                self.toasts.info(UI_TEXT.strategy_updated, now);
                self.save_all_form_data();
            }
            CampaignEvent::ActivateCampaign => {
                self.activation.activate(now);
            }
        }
    }

    /// Advances the toast and launch timers.
    pub fn tick(&mut self, now: AppInstant) {
        self.toasts.tick(now);

        if let Some(launched_at) = self.activation.tick(now, Utc::now()) {
            self.toasts.info(UI_TEXT.campaign_launched, now);
            self.store.save(PERSISTENCE.keys.campaign_active, &true);
            self.store.save(
                PERSISTENCE.keys.campaign_launch_time,
                &to_iso_timestamp(launched_at),
            );
        }
    }

    /// Slider handler: sets the total, redistributes it across platforms and
    /// persists the results in one batch.
    pub fn set_total_budget(&mut self, total: f64, now: AppInstant) {
        self.total_budget = total;

        let redistributed = match self.update_platform_budgets(total) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{}", e);
                self.toasts.show(e.to_string(), ToastKind::Error, now);
                self.last_error = Some(e);
                false
            }
        };

        let stored = if total.is_finite() && total > 0.0 {
            total.round() as u64
        } else {
            0
        };

        let mut batch = self.store.batch();
        if redistributed {
            for entry in &self.platforms {
                batch.save(&entry.storage_key(), &entry.budget);
            }
        }
        batch.save(PERSISTENCE.keys.total_budget, &stored);
        batch.commit();
    }

    fn update_platform_budgets(&mut self, total: f64) -> Result<(), AppError> {
        self.allocator.redistribute(total, &mut self.platforms)?;
        self.last_error = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_budget_allocation {
            for entry in &self.platforms {
                log::info!("[budget] {} -> {}", entry.platform, entry.budget);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::budget::{AllocationError, BudgetAllocator, ShareBasis, ZeroSharePolicy};
    use crate::domain::Section;
    use crate::persistence::{FormStore, MemoryPort, StoragePort};
    use crate::utils::app_time::now;
    use crate::utils::parse_iso_timestamp;

    pub(in crate::ui) fn app_with_port(
        port: Rc<RefCell<MemoryPort>>,
        allocator: BudgetAllocator,
    ) -> CampaignApp {
        let port: Box<dyn StoragePort> = Box::new(port);
        CampaignApp::with_store(FormStore::new(port), allocator)
    }

    fn shared_port() -> Rc<RefCell<MemoryPort>> {
        Rc::new(RefCell::new(MemoryPort::new()))
    }

    fn stored(port: &Rc<RefCell<MemoryPort>>, key: &str) -> Option<String> {
        port.borrow()
            .get_raw(&format!("marketingSystem_{}", key))
            .map(str::to_string)
    }

    fn budgets(app: &CampaignApp) -> Vec<u64> {
        app.platforms().iter().map(|p| p.budget).collect()
    }

    #[test]
    fn slider_move_redistributes_and_persists() {
        let port = shared_port();
        let mut app = app_with_port(port.clone(), BudgetAllocator::default());

        app.handle_event(CampaignEvent::BudgetChanged(6100.0), now());

        assert_eq!(budgets(&app), vec![2400, 1700, 1200, 800]);
        assert_eq!(stored(&port, "totalBudget").as_deref(), Some("6100"));
        assert_eq!(stored(&port, "facebookBudget").as_deref(), Some("2400"));
        assert_eq!(stored(&port, "twitterBudget").as_deref(), Some("800"));
    }

    #[test]
    fn slider_move_is_one_storage_write() {
        let port = shared_port();
        let mut app = app_with_port(port.clone(), BudgetAllocator::default());
        let before = port.borrow().write_calls();

        app.handle_event(CampaignEvent::BudgetChanged(5000.0), now());
        assert_eq!(port.borrow().write_calls(), before + 1);

        app.handle_event(CampaignEvent::SaveSettings, now());
        assert_eq!(port.borrow().write_calls(), before + 2);
    }

    #[test]
    fn rejected_redistribution_shows_error_toast() {
        let port = shared_port();
        let allocator = BudgetAllocator::new(ShareBasis::Current, ZeroSharePolicy::Reject);
        let mut app = app_with_port(port.clone(), allocator);
        for entry in &mut app.platforms {
            entry.budget = 0;
        }

        app.set_total_budget(4000.0, now());

        assert_eq!(budgets(&app), vec![0, 0, 0, 0]);
        assert_eq!(
            app.last_error(),
            Some(&AppError::Allocation(AllocationError::ZeroShares))
        );
        assert_eq!(app.toasts().visible().unwrap().kind, ToastKind::Error);
        assert_eq!(stored(&port, "facebookBudget"), None);
        assert_eq!(stored(&port, "totalBudget").as_deref(), Some("4000"));
    }

    #[test]
    fn navigation_event_switches_section() {
        let mut app = app_with_port(shared_port(), BudgetAllocator::default());
        app.handle_event(CampaignEvent::Navigate(Section::Launch), now());
        assert_eq!(app.navigation().active(), Section::Launch);
    }

    #[test]
    fn clicks_show_platform_toasts() {
        let start = now();
        let mut app = app_with_port(shared_port(), BudgetAllocator::default());

        app.handle_event(CampaignEvent::SocialIconClicked("instagram".into()), start);
        assert_eq!(
            app.toasts().visible().unwrap().message,
            "Opening instagram campaign settings"
        );

        app.handle_event(CampaignEvent::PlatformCardClicked("linkedin".into()), start);
        assert_eq!(
            app.toasts().visible().unwrap().message,
            "Configuring linkedin ad settings"
        );
    }

    #[test]
    fn save_settings_writes_every_form_field() {
        let port = shared_port();
        let mut app = app_with_port(port.clone(), BudgetAllocator::default());

        app.handle_event(CampaignEvent::SaveSettings, now());

        assert_eq!(
            app.toasts().visible().unwrap().message,
            "Campaign settings saved"
        );
        assert_eq!(port.borrow().len(), 12);
        assert_eq!(
            stored(&port, "campaignObjective").as_deref(),
            Some("\"Brand Awareness\"")
        );
        assert_eq!(stored(&port, "gaEnabled").as_deref(), Some("false"));
    }

    #[test]
    fn activation_persists_flag_and_launch_time() {
        let start = now();
        let port = shared_port();
        let mut app = app_with_port(port.clone(), BudgetAllocator::default());

        app.handle_event(CampaignEvent::ActivateCampaign, start);
        app.tick(start + Duration::from_millis(1000));
        assert!(app.activation().is_launching());
        assert_eq!(stored(&port, "campaignActive"), None);

        app.tick(start + Duration::from_millis(1500));
        assert!(app.activation().is_active());
        assert_eq!(stored(&port, "campaignActive").as_deref(), Some("true"));
        assert_eq!(
            app.toasts().visible().unwrap().message,
            "Campaign successfully launched!"
        );

        let raw_time = stored(&port, "campaignLaunchTime").unwrap();
        let launch_time: String = serde_json::from_str(&raw_time).unwrap();
        assert!(launch_time.ends_with('Z'));
        assert!(parse_iso_timestamp(&launch_time).is_some());
    }

    #[test]
    fn next_deadline_tracks_nearest_timer() {
        let start = now();
        let mut app = app_with_port(shared_port(), BudgetAllocator::default());
        assert_eq!(app.next_deadline(start), None);

        app.handle_event(CampaignEvent::ActivateCampaign, start);
        app.handle_event(CampaignEvent::UpdateStrategy, start);
        assert_eq!(app.next_deadline(start), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn unavailable_storage_does_not_break_the_console() {
        let port = Rc::new(RefCell::new(MemoryPort::unavailable()));
        let start = now();
        let mut app = app_with_port(port.clone(), BudgetAllocator::default());

        app.handle_event(CampaignEvent::BudgetChanged(1525.0), start);
        app.handle_event(CampaignEvent::SaveSettings, start);
        app.handle_event(CampaignEvent::ActivateCampaign, start);
        app.tick(start + Duration::from_secs(2));

        assert_eq!(budgets(&app), vec![600, 425, 300, 200]);
        assert!(app.activation().is_active());
        assert!(port.borrow().is_empty());
    }
}
