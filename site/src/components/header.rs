//! Fixed header: owner name, section navigation, theme and menu toggles.

use super::{ICON_MENU, ICON_MOON, ICON_SUN, ICON_X, Icon, navigate_to};
use crate::state::UiState;
use crate::types::SectionId;
use leptos::prelude::*;

fn nav_class(section: SectionId, active: bool) -> String {
    let anchor = section.anchor();
    if active {
        format!("nav-link nav-{anchor} active")
    } else {
        format!("nav-link nav-{anchor}")
    }
}

/// One navigation button; shared by the desktop row and the mobile list.
#[component]
fn NavItem(section: SectionId, ui: RwSignal<UiState>) -> impl IntoView {
    view! {
        <button
            class=move || nav_class(section, ui.get().active_section == section)
            on:click=move |_| navigate_to(ui, section)
        >
            {section.label()}
        </button>
    }
}

#[component]
pub fn Header(
    /// Name shown on the left of the bar
    name: String,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let theme_icon = move || {
        if ui.get().theme.is_dark() {
            view! { <Icon path=ICON_SUN /> }.into_any()
        } else {
            view! { <Icon path=ICON_MOON /> }.into_any()
        }
    };
    let menu_icon = move || {
        if ui.get().menu_open {
            view! { <Icon path=ICON_X /> }.into_any()
        } else {
            view! { <Icon path=ICON_MENU /> }.into_any()
        }
    };

    view! {
        <header class="site-header">
            <div class="container header-bar">
                <div class="header-name">{name}</div>

                <nav class="nav-desktop">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! { <NavItem section=section ui=ui /> })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="header-controls">
                    <button
                        class="icon-button theme-toggle"
                        data-role="theme-toggle"
                        title="Toggle light/dark mode"
                        on:click=move |_| ui.update(|state| *state = state.toggle_theme())
                    >
                        {theme_icon}
                    </button>
                    <button
                        class="icon-button menu-toggle"
                        data-role="menu-toggle"
                        title="Toggle navigation menu"
                        aria-expanded=move || ui.get().menu_open.to_string()
                        on:click=move |_| ui.update(|state| *state = state.toggle_menu())
                    >
                        {menu_icon}
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().menu_open>
                <nav class="nav-mobile">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! { <NavItem section=section ui=ui /> })
                        .collect::<Vec<_>>()}
                </nav>
            </Show>
        </header>
    }
}
