//! CSS for the portfolio page.
//!
//! The stylesheet is plain CSS embedded as a string so the same rules serve
//! the prerendered page (inlined into `<head>`) and the CSR app.
//!
//! # Theming
//!
//! Colors are CSS custom properties declared twice, once under
//! `.theme-dark` and once under `.theme-light`. The page root carries exactly
//! one of those classes, so flipping the theme swaps every color at once and
//! never touches layout.
//!
//! ```rust
//! use portfolio_site::styles::SITE_CSS;
//!
//! let my_css = ".project-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.contains(".theme-light"));
//! ```

/// Height of the fixed header, shared by the header rule and `scroll-margin-top`.
pub const HEADER_HEIGHT_PX: u32 = 64;

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    -webkit-font-smoothing: antialiased;
}

.theme-dark {
    --bg: #0f172a;
    --bg-alt: rgba(30, 41, 59, 0.5);
    --bg-header: rgba(15, 23, 42, 0.95);
    --surface: #1e293b;
    --surface-raised: #334155;
    --surface-hover: #475569;
    --border: #334155;
    --border-raised: #475569;
    --text: #f1f5f9;
    --text-body: #cbd5e1;
    --text-muted: #94a3b8;
    --accent: #2dd4bf;
    --accent-strong: #0d9488;
    --accent-hover: #14b8a6;
    --accent-soft: rgba(45, 212, 191, 0.1);
    --accent-shadow: 0 10px 15px -3px rgba(13, 148, 136, 0.25);
    --toggle-icon: #facc15;
}

.theme-light {
    --bg: #ffffff;
    --bg-alt: #f9fafb;
    --bg-header: rgba(255, 255, 255, 0.95);
    --surface: #ffffff;
    --surface-raised: #ffffff;
    --surface-hover: #eff6ff;
    --border: #e5e7eb;
    --border-raised: transparent;
    --text: #111827;
    --text-body: #374151;
    --text-muted: #4b5563;
    --accent: #2563eb;
    --accent-strong: #2563eb;
    --accent-hover: #1d4ed8;
    --accent-soft: rgba(37, 99, 235, 0.08);
    --accent-shadow: none;
    --toggle-icon: #374151;
}

.portfolio {
    min-height: 100vh;
    background: var(--bg);
    color: var(--text-body);
    transition: background-color 300ms, color 300ms;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}

/* ---------- Header ---------- */

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: var(--bg-header);
    border-bottom: 1px solid var(--border);
    backdrop-filter: blur(4px);
}

.header-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 64px;
}

.header-name {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text);
}

.nav-desktop {
    display: none;
    gap: 2rem;
}

.nav-link {
    background: none;
    border: 0;
    padding: 0;
    font: inherit;
    cursor: pointer;
    color: var(--text-body);
    transition: color 200ms;
}

.nav-link:hover,
.nav-link.active {
    color: var(--accent);
}

.nav-link.active {
    font-weight: 500;
}

.header-controls {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.icon-button {
    display: inline-flex;
    padding: 0.5rem;
    border: 0;
    border-radius: 0.5rem;
    cursor: pointer;
    background: var(--surface);
    color: var(--text);
    transition: background-color 200ms;
}

.icon-button:hover {
    background: var(--surface-raised);
}

.theme-toggle {
    color: var(--toggle-icon);
}

.nav-mobile {
    border-bottom: 1px solid var(--border);
    background: var(--bg);
    padding: 0.5rem 1rem;
}

.nav-mobile .nav-link {
    display: block;
    width: 100%;
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
}

.nav-mobile .nav-link.active,
.nav-mobile .nav-link:hover {
    background: var(--accent-soft);
}

@media (min-width: 768px) {
    .nav-desktop {
        display: flex;
    }
    .menu-toggle,
    .nav-mobile {
        display: none;
    }
}

/* ---------- Sections ---------- */

.page-section {
    padding: 4rem 1rem;
    scroll-margin-top: 64px;
}

.page-section.alt {
    background: var(--bg-alt);
}

.section-header {
    text-align: center;
    margin-bottom: 3rem;
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 1rem;
    color: var(--text);
}

.section-description {
    font-size: 1.125rem;
    max-width: 42rem;
    margin: 0 auto;
}

.accent {
    color: var(--accent);
}

.btn-primary {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border: 0;
    border-radius: 0.5rem;
    font: inherit;
    font-weight: 500;
    text-decoration: none;
    cursor: pointer;
    color: #ffffff;
    background: var(--accent-strong);
    box-shadow: var(--accent-shadow);
    transition: transform 200ms, background-color 200ms;
}

.btn-primary:hover {
    background: var(--accent-hover);
    transform: scale(1.05);
}

.btn-icon {
    flex-shrink: 0;
    margin-left: 0.25rem;
}

.btn-small {
    padding: 0.5rem 1rem;
}

/* Hero */

.hero {
    padding-top: 6rem;
    text-align: center;
}

.hero-avatar-icon {
    display: inline-flex;
    padding: 1rem;
    border-radius: 9999px;
    margin-bottom: 1.5rem;
    background: var(--surface);
    color: var(--accent);
}

.hero-title {
    font-size: 3rem;
    font-weight: 700;
    margin: 0 0 1.5rem;
    color: var(--text);
}

.hero-tagline {
    font-size: 1.375rem;
    max-width: 48rem;
    margin: 0 auto 2rem;
}

/* About */

.about-grid {
    display: grid;
    gap: 3rem;
    align-items: center;
}

.about-avatar {
    display: flex;
    justify-content: center;
}

.avatar-frame {
    position: relative;
}

.avatar-img {
    width: 16rem;
    height: 16rem;
    object-fit: cover;
    border-radius: 9999px;
    box-shadow: 0 0 0 4px var(--border);
}

.avatar-ring {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    border: 2px solid var(--accent-soft);
}

.about-text p {
    font-size: 1.125rem;
    margin: 0 0 1.5rem;
}

.skills-title {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--text);
    margin: 0 0 1rem;
}

.skills-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1rem;
}

.skill-chip {
    padding: 0.75rem;
    border-radius: 0.5rem;
    text-align: center;
    font-size: 0.875rem;
    font-weight: 500;
    background: var(--surface-raised);
    border: 1px solid var(--border-raised);
    transition: transform 200ms;
}

.skill-chip:hover {
    transform: scale(1.05);
}

.skill-chip svg {
    display: block;
    margin: 0 auto 0.5rem;
    color: var(--accent);
}

@media (min-width: 640px) {
    .skills-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }
}

@media (min-width: 768px) {
    .about-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
    .about-avatar {
        justify-content: flex-start;
    }
}

/* Projects */

.projects-grid {
    display: grid;
    gap: 2rem;
}

.project-card {
    border-radius: 0.5rem;
    overflow: hidden;
    background: var(--surface);
    border: 1px solid var(--border);
    transition: transform 300ms;
}

.project-card:hover {
    transform: scale(1.05);
}

.project-image {
    display: block;
    width: 100%;
    height: 12rem;
    object-fit: cover;
}

.project-body {
    padding: 1.5rem;
}

.project-title {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.75rem;
    color: var(--text);
}

.project-description {
    font-size: 0.875rem;
    margin: 0 0 1rem;
}

@media (min-width: 768px) {
    .projects-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

@media (min-width: 1024px) {
    .projects-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }
}

/* Contact */

.contact-list {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    justify-content: center;
    align-items: center;
    max-width: 56rem;
    margin: 0 auto;
}

.contact-card {
    display: flex;
    align-items: center;
    gap: 1rem;
    width: 100%;
    padding: 1.5rem;
    border-radius: 0.5rem;
    text-decoration: none;
    color: var(--text-body);
    background: var(--surface-raised);
    border: 1px solid var(--border-raised);
    transition: transform 200ms, color 200ms;
}

.contact-card:hover {
    color: var(--accent);
    transform: scale(1.05);
}

.contact-label {
    font-weight: 600;
}

.contact-caption {
    font-size: 0.875rem;
    opacity: 0.8;
}

@media (min-width: 768px) {
    .contact-list {
        flex-direction: row;
    }
    .contact-card {
        width: auto;
    }
}

/* Footer */

.site-footer {
    padding: 2rem 1rem;
    text-align: center;
    border-top: 1px solid var(--border);
    color: var(--text-muted);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_height_matches_scroll_margin() {
        let height = format!("height: {HEADER_HEIGHT_PX}px;");
        let margin = format!("scroll-margin-top: {HEADER_HEIGHT_PX}px;");
        assert!(SITE_CSS.contains(&height));
        assert!(SITE_CSS.contains(&margin));
    }

    #[test]
    fn both_themes_declare_the_same_variables() {
        fn vars(block: &str) -> Vec<&str> {
            block
                .lines()
                .filter_map(|line| line.trim().strip_prefix("--"))
                .filter_map(|line| line.split(':').next())
                .collect()
        }
        let dark = SITE_CSS.split(".theme-dark {").nth(1).and_then(|s| s.split('}').next());
        let light = SITE_CSS.split(".theme-light {").nth(1).and_then(|s| s.split('}').next());
        let (dark, light) = (dark.expect("dark block"), light.expect("light block"));
        assert_eq!(vars(dark), vars(light));
    }
}
