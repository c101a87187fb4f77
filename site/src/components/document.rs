//! Root document component - the complete HTML page for prerendering.

use super::PortfolioApp;
use crate::state::UiState;
use crate::styles::SITE_CSS;
use crate::types::SiteContent;
use leptos::prelude::*;

/// The complete HTML document: head with inline CSS, body with the page.
#[component]
pub fn PageDocument(content: SiteContent, initial: UiState) -> impl IntoView {
    let title = format!("{} | Portfolio", content.profile.name);
    let description = content.profile.tagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <PortfolioApp content=content initial=initial />
            </body>
        </html>
    }
}
