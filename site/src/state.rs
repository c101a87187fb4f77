//! Page UI state.
//!
//! The whole interactive state of the page is one small `Copy` record.
//! Transitions never mutate in place: each returns the next record, and the
//! app stores the result in a single signal.

use crate::types::{SectionId, Theme};

/// Snapshot of the page's interactive state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Current visual mode
    pub theme: Theme,
    /// Section highlighted in the navigation
    pub active_section: SectionId,
    /// Mobile menu expanded (narrow viewports only)
    pub menu_open: bool,
}

impl UiState {
    /// Initial state with a given theme and highlighted section; menu closed.
    pub fn new(theme: Theme, active_section: SectionId) -> Self {
        Self {
            theme,
            active_section,
            menu_open: false,
        }
    }

    /// Theme button pressed.
    #[must_use]
    pub fn toggle_theme(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    /// Hamburger button pressed.
    #[must_use]
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// A navigation item was chosen. Always closes the menu.
    ///
    /// The highlight is left to the scroll tracker, which moves it once the
    /// smooth scroll actually reaches the section.
    #[must_use]
    pub fn navigate(self, _target: SectionId) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    /// Result of a scroll probe. `None` (probe outside every section) keeps
    /// the current highlight.
    #[must_use]
    pub fn scrolled_to(self, located: Option<SectionId>) -> Self {
        Self {
            active_section: located.unwrap_or(self.active_section),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_state() {
        let state = UiState::default();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.menu_open);
    }

    #[test]
    fn double_theme_toggle_is_identity() {
        let state = UiState::new(Theme::Light, SectionId::About).toggle_menu();
        assert_eq!(state.toggle_theme().toggle_theme(), state);
        assert_eq!(state.toggle_theme().theme, Theme::Dark);
    }

    #[test]
    fn theme_toggle_leaves_the_rest_alone() {
        let state = UiState::default().toggle_menu().scrolled_to(Some(SectionId::Projects));
        let toggled = state.toggle_theme();
        assert_eq!(toggled.menu_open, state.menu_open);
        assert_eq!(toggled.active_section, state.active_section);
    }

    #[test]
    fn navigation_always_closes_the_menu() {
        for target in SectionId::ALL {
            let open = UiState::default().toggle_menu();
            assert!(open.menu_open);
            assert!(!open.navigate(target).menu_open);
            assert!(!UiState::default().navigate(target).menu_open);
        }
    }

    #[test]
    fn menu_toggle_flips() {
        let state = UiState::default();
        assert!(state.toggle_menu().menu_open);
        assert!(!state.toggle_menu().toggle_menu().menu_open);
    }

    #[test]
    fn scroll_miss_keeps_previous_section() {
        let state = UiState::default().scrolled_to(Some(SectionId::Contact));
        assert_eq!(state.active_section, SectionId::Contact);
        assert_eq!(state.scrolled_to(None).active_section, SectionId::Contact);
    }
}
