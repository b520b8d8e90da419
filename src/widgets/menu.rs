/// Attributes the menu toggle and mobile panel render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub active: bool,
    pub aria_expanded: &'static str,
    pub aria_hidden: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            active: self.open,
            aria_expanded: if self.open { "true" } else { "false" },
            aria_hidden: if self.open { "false" } else { "true" },
        }
    }

    /// A click landed somewhere on the page while the menu may be open.
    pub fn should_close_on_click(&self, inside_panel: bool, inside_toggle: bool) -> bool {
        self.open && !inside_panel && !inside_toggle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_the_view() {
        let mut menu = MenuState::default();
        let before = menu.view();
        assert!(menu.toggle());
        assert_eq!(
            menu.view(),
            MenuView {
                active: true,
                aria_expanded: "true",
                aria_hidden: "false",
            }
        );
        assert!(!menu.toggle());
        assert_eq!(menu.view(), before);
    }

    #[test]
    fn only_outside_clicks_close_an_open_menu() {
        let mut menu = MenuState::default();
        assert!(!menu.should_close_on_click(false, false));
        menu.toggle();
        assert!(menu.should_close_on_click(false, false));
        assert!(!menu.should_close_on_click(true, false));
        assert!(!menu.should_close_on_click(false, true));
    }
}
