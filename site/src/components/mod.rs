//! Leptos UI components for the portfolio page.
//!
//! Each region is a `#[component]` function. The same components render on
//! the server (prerendered HTML) and in the browser (CSR), so anything that
//! touches the DOM lives in event handlers or effects.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (prerender only)
//! └── PortfolioApp (owns the UiState signal + scroll listener)
//!     ├── Header (name, NavItem x4, theme toggle, menu toggle, mobile nav)
//!     └── main
//!         ├── Hero      #home
//!         ├── About     #about
//!         ├── Projects  #projects (ProjectCard per project)
//!         └── Contact   #contact  (ContactCard per link)
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_site::components::PortfolioApp;
//! use portfolio_site::types::SiteContent;
//!
//! leptos::mount::mount_to_body(|| view! { <PortfolioApp content=SiteContent::default() /> });
//! ```

mod app;
mod document;
mod header;
mod icons;
mod sections;

pub use app::PortfolioApp;
pub use document::PageDocument;
pub use header::Header;
pub use icons::*;
pub use sections::{About, Contact, Footer, Hero, Projects};

use crate::browser::scroll_to_section;
use crate::state::UiState;
use crate::types::SectionId;
use leptos::prelude::*;

/// Click handler shared by nav items and the hero button: close the menu,
/// then smooth-scroll to the target.
pub(crate) fn navigate_to(ui: RwSignal<UiState>, section: SectionId) {
    ui.update(|state| *state = state.navigate(section));
    scroll_to_section(section);
}
