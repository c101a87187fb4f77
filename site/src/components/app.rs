//! Page root: owns the UI state signal and the scroll listener.

use super::{About, Contact, Footer, Header, Hero, Projects};
use crate::browser::{ScrollTracker, sync_active_section};
use crate::state::UiState;
use crate::types::SiteContent;
use leptos::prelude::*;

/// The whole portfolio page.
///
/// Holds the single [`UiState`] signal every region reads from. The scroll
/// listener is attached once the page is mounted in a browser and removed
/// when the page is torn down; server rendering never attaches it.
#[component]
pub fn PortfolioApp(
    content: SiteContent,
    /// State the page starts in (dark theme, home highlighted by default)
    #[prop(optional)]
    initial: UiState,
) -> impl IntoView {
    let ui = RwSignal::new(initial);

    Effect::new(move || {
        // A reload can land mid-page; highlight whatever is under the probe now.
        sync_active_section(ui);
        let tracker = ScrollTracker::attach(ui);
        on_cleanup(move || drop(tracker));
    });

    let SiteContent {
        profile,
        about,
        skills,
        projects,
        contacts,
        footer,
    } = content;
    let root_class = move || format!("portfolio {}", ui.get().theme.css_class());

    view! {
        <div class=root_class>
            <Header name=profile.name.clone() ui=ui />
            <main>
                <Hero profile=profile.clone() ui=ui />
                <About profile=profile paragraphs=about skills=skills />
                <Projects projects=projects />
                <Contact contacts=contacts />
            </main>
            <Footer text=footer />
        </div>
    }
}
