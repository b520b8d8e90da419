use std::rc::Rc;

use crate::catalog::Catalog;
use crate::config::UiConfig;
use crate::widgets::counter::CounterRegistry;
use crate::widgets::menu::{MenuState, MenuView};
use crate::widgets::navigation::ScrollThrottle;
use crate::widgets::scroll_lock::{LockHolder, ScrollLock};

/// What the purchase modal shows while open.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub key: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub confirm_href: String,
}

/// Page-wide UI state shared by the landing page widgets.
///
/// Every method returns whether something visible changed so the caller
/// knows when to re-render and re-apply the body overflow.
pub struct UiController {
    config: UiConfig,
    catalog: Option<Rc<Catalog>>,
    telegram_handle: String,
    menu: MenuState,
    modal: Option<ModalContent>,
    scroll_lock: ScrollLock,
    nav_throttle: ScrollThrottle,
    active_section: Option<String>,
    counters: CounterRegistry,
}

impl UiController {
    pub fn new(config: UiConfig, catalog: Option<Rc<Catalog>>, telegram_handle: &str) -> Self {
        let nav_throttle = ScrollThrottle::new(config.scroll_throttle_ms);
        Self {
            config,
            catalog,
            telegram_handle: telegram_handle.to_string(),
            menu: MenuState::default(),
            modal: None,
            scroll_lock: ScrollLock::default(),
            nav_throttle,
            active_section: None,
            counters: CounterRegistry::default(),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn catalog(&self) -> Option<&Rc<Catalog>> {
        self.catalog.as_ref()
    }

    pub fn menu_view(&self) -> MenuView {
        self.menu.view()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn modal(&self) -> Option<&ModalContent> {
        self.modal.as_ref()
    }

    pub fn body_overflow(&self) -> &'static str {
        self.scroll_lock.body_overflow()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn toggle_menu(&mut self) -> bool {
        if self.menu.toggle() {
            self.scroll_lock.acquire(LockHolder::Menu);
        } else {
            self.scroll_lock.release(LockHolder::Menu);
        }
        true
    }

    pub fn close_menu(&mut self) -> bool {
        self.menu.is_open() && self.toggle_menu()
    }

    pub fn click_anywhere(&mut self, inside_panel: bool, inside_toggle: bool) -> bool {
        if self.menu.should_close_on_click(inside_panel, inside_toggle) {
            self.toggle_menu()
        } else {
            false
        }
    }

    /// An in-page link was activated. The menu closes only when the link's
    /// target section exists; a dangling link leaves everything as is.
    pub fn begin_navigation(&mut self, target_exists: bool) -> bool {
        target_exists && self.close_menu()
    }

    /// Escape closes whichever overlays are open.
    pub fn escape(&mut self) -> bool {
        let menu = self.close_menu();
        let modal = self.close_purchase();
        menu || modal
    }

    /// Open the purchase modal for `key`. Unknown keys leave everything as is.
    pub fn open_purchase(&mut self, key: &str) -> bool {
        let Some(catalog) = self.catalog.as_ref() else {
            return false;
        };
        let Some(product) = catalog.lookup(key) else {
            log::debug!("No product for purchase key {:?}", key);
            return false;
        };
        self.modal = Some(ModalContent {
            key: product.key.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            confirm_href: catalog.deep_link(&self.telegram_handle, product),
        });
        self.scroll_lock.acquire(LockHolder::Modal);
        true
    }

    pub fn close_purchase(&mut self) -> bool {
        if self.modal.take().is_none() {
            return false;
        }
        self.scroll_lock.release(LockHolder::Modal);
        true
    }

    /// Record a scroll at `now_ms`. Returns `true` when the throttle lets an
    /// active-section update through.
    pub fn scroll_tick(&mut self, now_ms: f64) -> bool {
        self.nav_throttle.allow(now_ms)
    }

    /// Highlight `section`. A scroll position outside every section keeps
    /// the previous highlight.
    pub fn set_active_section(&mut self, section: Option<&str>) -> bool {
        let Some(section) = section else {
            return false;
        };
        if self.active_section.as_deref() == Some(section) {
            return false;
        }
        self.active_section = Some(section.to_string());
        true
    }

    /// True the first time the counter `id` enters the viewport.
    pub fn claim_counter(&mut self, id: &str) -> bool {
        self.counters.claim(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiProfile;

    fn controller() -> UiController {
        let catalog = Catalog::embedded().map(Rc::new).ok();
        UiController::new(UiProfile::Desktop.config(), catalog, "Four04unkown")
    }

    #[test]
    fn sms_spy_purchase_fills_the_modal() {
        let mut ui = controller();
        assert!(ui.open_purchase("sms-spy"));
        let modal = ui.modal().unwrap();
        assert_eq!(modal.title, "SMS Spy Service");
        assert_eq!(
            modal.description,
            "Monitor all incoming and outgoing text messages on target device with complete SMS tracking and timestamp."
        );
        assert_eq!(modal.price, "100 KSH");
        assert!(modal
            .confirm_href
            .contains("I%20want%20to%20purchase%20SMS%20Spy%20Service%20for%20100%20KSH."));
        assert_eq!(ui.body_overflow(), "hidden");
    }

    #[test]
    fn unknown_product_is_a_no_op() {
        let mut ui = controller();
        assert!(!ui.open_purchase("webcam"));
        assert!(ui.modal().is_none());
        assert_eq!(ui.body_overflow(), "");
    }

    #[test]
    fn missing_catalog_disables_purchases() {
        let mut ui = UiController::new(UiProfile::Desktop.config(), None, "x");
        assert!(!ui.open_purchase("sms-spy"));
    }

    #[test]
    fn escape_hides_the_modal_and_restores_scrolling() {
        let mut ui = controller();
        ui.open_purchase("gallery-spy");
        assert!(ui.escape());
        assert!(ui.modal().is_none());
        assert_eq!(ui.body_overflow(), "");
        assert!(!ui.escape());
    }

    #[test]
    fn closing_the_modal_keeps_an_open_menu_locked() {
        let mut ui = controller();
        ui.toggle_menu();
        ui.open_purchase("phone-spy");
        assert!(ui.close_purchase());
        assert_eq!(ui.body_overflow(), "hidden");
        assert!(ui.close_menu());
        assert_eq!(ui.body_overflow(), "");
        assert!(!ui.close_menu());
    }

    #[test]
    fn two_toggles_return_to_the_start() {
        let mut ui = controller();
        let view = ui.menu_view();
        let overflow = ui.body_overflow();
        ui.toggle_menu();
        assert_eq!(ui.body_overflow(), "hidden");
        ui.toggle_menu();
        assert_eq!(ui.menu_view(), view);
        assert_eq!(ui.body_overflow(), overflow);
    }

    #[test]
    fn outside_click_closes_the_menu() {
        let mut ui = controller();
        assert!(!ui.click_anywhere(false, false));
        ui.toggle_menu();
        assert!(!ui.click_anywhere(false, true));
        assert!(ui.click_anywhere(false, false));
        assert!(!ui.is_menu_open());
    }

    #[test]
    fn navigating_to_a_section_closes_the_menu_first() {
        let mut ui = controller();
        ui.toggle_menu();
        assert_eq!(ui.body_overflow(), "hidden");
        assert!(ui.begin_navigation(true));
        assert!(!ui.is_menu_open());
        assert_eq!(ui.menu_view(), MenuState::default().view());
        assert_eq!(ui.body_overflow(), "");
    }

    #[test]
    fn navigating_to_a_missing_section_changes_nothing() {
        let mut ui = controller();
        ui.toggle_menu();
        let view = ui.menu_view();
        assert!(!ui.begin_navigation(false));
        assert!(ui.is_menu_open());
        assert_eq!(ui.menu_view(), view);
        assert_eq!(ui.body_overflow(), "hidden");
    }

    #[test]
    fn navigating_with_the_menu_closed_is_quiet() {
        let mut ui = controller();
        assert!(!ui.begin_navigation(true));
        assert_eq!(ui.body_overflow(), "");
    }

    #[test]
    fn active_section_changes_are_reported_once() {
        let mut ui = controller();
        assert!(ui.set_active_section(Some("bots")));
        assert!(!ui.set_active_section(Some("bots")));
        assert_eq!(ui.active_section(), Some("bots"));
        assert!(ui.set_active_section(Some("apps")));
    }

    #[test]
    fn scrolling_past_every_section_keeps_the_last_highlight() {
        use crate::widgets::navigation::{active_section, SectionBounds};

        let mut ui = controller();
        let sections = [SectionBounds {
            id: "home".to_string(),
            top: 0.0,
            height: 500.0,
        }];
        assert!(ui.set_active_section(active_section(200.0, &sections)));
        assert_eq!(ui.active_section(), Some("home"));
        assert_eq!(active_section(2000.0, &sections), None);
        assert!(!ui.set_active_section(active_section(2000.0, &sections)));
        assert_eq!(ui.active_section(), Some("home"));
    }
}
