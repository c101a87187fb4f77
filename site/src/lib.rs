//! # portfolio-site
//!
//! A single-page personal portfolio built with [Leptos](https://leptos.dev/).
//!
//! The page is a header with section navigation, a hero, an about section, a
//! projects gallery and a contact section, with a light/dark theme toggle and
//! scroll-based highlighting of the section currently in view.
//!
//! ## Features
//!
//! - **One state record** - theme, active section and menu flag live in a
//!   single [`state::UiState`] value with pure transitions
//! - **Scoped scroll listener** - [`browser::ScrollTracker`] detaches on drop
//! - **Same components, two targets** - mounted in the browser (CSR) or
//!   prerendered to static HTML with [`render_page`]
//! - **Content files** - override the built-in content from TOML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_site::{render_page, state::UiState, types::SiteContent};
//!
//! let html = render_page(&SiteContent::default(), UiState::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - sections, theme and content records
//! - [`content`] - built-in content, content files and validation
//! - [`state`] - the UI state machine
//! - [`scroll`] - scroll probe to active section mapping
//! - [`browser`] - DOM measurement, smooth scrolling, scroll listener
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod components;
pub mod content;
pub mod scroll;
pub mod state;
pub mod styles;
pub mod types;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use state::UiState;
use types::SiteContent;

pub use content::{ContentError, ContentFormat, FormatError};

/// Render the complete page as a static HTML document.
///
/// The page is rendered in the `initial` state (theme, highlighted section).
/// No scripts are attached, so the output is the page as it first paints;
/// the CSR build takes over interactivity.
///
/// # Example
///
/// ```rust
/// use portfolio_site::{render_page, state::UiState, types::{SectionId, SiteContent, Theme}};
///
/// let html = render_page(
///     &SiteContent::default(),
///     UiState::new(Theme::Light, SectionId::Projects),
/// );
/// assert!(html.contains("portfolio theme-light"));
/// ```
pub fn render_page(content: &SiteContent, initial: UiState) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <PageDocument content=content.clone() initial=initial /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{SectionId, Theme};

    #[test]
    fn renders_complete_document() {
        let html = render_page(&SiteContent::default(), UiState::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Yashraj Sherke | Portfolio"));
    }

    #[test]
    fn initial_state_controls_theme_class() {
        let dark = render_page(&SiteContent::default(), UiState::default());
        assert!(dark.contains("portfolio theme-dark"));

        let light = render_page(
            &SiteContent::default(),
            UiState::new(Theme::Light, SectionId::Home),
        );
        assert!(light.contains("portfolio theme-light"));
        assert!(!light.contains("portfolio theme-dark"));
    }
}
