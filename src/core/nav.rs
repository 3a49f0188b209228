//! Navigation bar state
//!
//! The mobile menu is a two-state machine. Active link highlighting is a plain
//! string comparison against the current location path.

/// Mobile menu state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Flip between open and closed
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Close the menu. Activating a link inside the open menu does this.
    pub fn close(self) -> Self {
        MenuState::Closed
    }
}

/// Whether `href` is the page currently shown
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// Classes for a desktop navigation link
pub fn link_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 text-sm font-medium transition-colors rounded-md font-sans text-primary bg-secondary"
    } else {
        "px-4 py-2 text-sm font-medium transition-colors rounded-md font-sans text-muted-foreground hover:text-foreground hover:bg-secondary/50"
    }
}

/// Classes for a link inside the mobile menu
pub fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "px-4 py-3 text-sm font-medium transition-colors rounded-md font-sans text-primary bg-secondary"
    } else {
        "px-4 py-3 text-sm font-medium transition-colors rounded-md font-sans text-muted-foreground hover:text-foreground hover:bg-secondary/50"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let menu = MenuState::default();
        let opened = menu.toggle();
        assert!(opened.is_open());
        assert_eq!(opened.toggle(), menu);
    }

    #[test]
    fn test_close_from_any_state() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }

    #[test]
    fn test_is_active_is_exact() {
        assert!(is_active("/about", "/about"));
        assert!(!is_active("/about/", "/about"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn test_active_class_differs() {
        assert_ne!(link_class(true), link_class(false));
        assert!(link_class(true).contains("text-primary"));
        assert!(mobile_link_class(false).contains("text-muted-foreground"));
    }
}
