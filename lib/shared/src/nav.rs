/// Scroll offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Story", path: "/story" },
    NavItem { label: "Menu", path: "/menu" },
    NavItem { label: "Experience", path: "/experience" },
    NavItem { label: "Visit", path: "/visit" },
];

/// Footer "Quick Links" column. Labels differ slightly from the navbar.
pub const FOOTER_LINKS: [NavItem; 4] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Our Story", path: "/story" },
    NavItem { label: "Menu", path: "/menu" },
    NavItem { label: "Visit Us", path: "/visit" },
];

impl NavItem {
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// UI state owned by the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub scroll_y: f64,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, y: f64) {
        self.scroll_y = y;
        self.scrolled = y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Runs before the next paint after a route change: the new page starts
    /// at the top with the mobile menu closed.
    pub fn on_route_change(&mut self) {
        self.close_menu();
        self.on_scroll(0.0);
    }

    /// Value for `document.body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        if self.menu_open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut nav = NavState::default();
        assert!(!nav.menu_open);

        nav.toggle_menu();
        assert!(nav.menu_open);
        assert_eq!(nav.body_overflow(), "hidden");

        nav.toggle_menu();
        assert_eq!(nav, NavState::default());
        assert_eq!(nav.body_overflow(), "");
    }

    #[test]
    fn scrolled_flips_around_threshold() {
        let mut nav = NavState::default();
        nav.on_scroll(SCROLL_THRESHOLD);
        assert!(!nav.scrolled);

        nav.on_scroll(51.0);
        assert!(nav.scrolled);

        nav.on_scroll(10.0);
        assert!(!nav.scrolled);
        assert_eq!(nav.scroll_y, 10.0);
    }

    #[test]
    fn route_change_resets_scroll_and_closes_menu() {
        let mut nav = NavState::default();
        nav.on_scroll(800.0);
        nav.toggle_menu();

        nav.on_route_change();
        assert_eq!(nav.scroll_y, 0.0);
        assert!(!nav.scrolled);
        assert!(!nav.menu_open);
    }

    #[test]
    fn active_item_matches_exact_path() {
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|i| i.is_active("/menu"))
            .map(|i| i.label)
            .collect();
        assert_eq!(active, ["Menu"]);
        assert!(!NAV_ITEMS[0].is_active("/story"));
        assert!(NAV_ITEMS[0].is_active("/"));
    }
}
