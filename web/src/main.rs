// Portfolio page - Leptos 0.8 CSR entry point, bundled by trunk.

use leptos::prelude::*;
use portfolio_site::components::PortfolioApp;
use portfolio_site::styles::SITE_CSS;
use portfolio_site::types::SiteContent;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{SITE_CSS}</style>
        <PortfolioApp content=SiteContent::default() />
    }
}
