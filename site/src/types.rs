//! Portfolio data types.
//!
//! These types describe the page: which sections exist, which visual theme
//! is active and the static content shown in each region. They are:
//!
//! - **Serializable** - content can be loaded from TOML or JSON via serde
//! - **Clone-friendly** - components take owned copies of their content
//! - **Default-able** - partial content files fall back to the built-in page
//!
//! # Example
//!
//! ```rust
//! use portfolio_site::types::{Project, SiteContent};
//!
//! let content = SiteContent {
//!     projects: vec![Project {
//!         title: "Weather Forcast".into(),
//!         description: "Current weather and forecasts.".into(),
//!         image_url: "https://example.com/weather.jpeg".into(),
//!         link: "https://example.com/weather/".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.projects.len(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four page regions that can be scrolled to.
///
/// The declaration order is the document order, which is also the order the
/// scroll probe tests sections in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero region at the top of the page
    #[default]
    Home,
    /// About me + skills
    About,
    /// Project gallery
    Projects,
    /// Contact cards
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element (also the nav item key).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Capitalized label shown in the navigation.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown section '{s}' (expected home, about, projects or contact)"))
    }
}

/// Visual mode of the page. Only colors change between themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Slate background, teal accents
    #[default]
    Dark,
    /// White background, blue accents
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class put on the page root; every themed rule in the stylesheet hangs off it.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    /// True for the dark theme; the header shows the sun icon then.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// A card in the projects gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card heading
    pub title: String,
    /// One or two sentences under the heading
    pub description: String,
    /// Cover image, fetched by the browser
    pub image_url: String,
    /// Outbound "View Project" link (`#` when there is nothing to show yet)
    pub link: String,
}

/// Kind of contact card; selects the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    GitHub,
    LinkedIn,
}

/// A card in the contact section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Bold first line ("Email", "GitHub", ...)
    pub label: String,
    /// Dimmed second line
    pub caption: String,
    pub href: String,
}

impl ContactLink {
    /// Web profiles open in a new browsing context; `mailto:` hands off to the mail client.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

/// Identity of the site owner, used by the header, hero and footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name shown in the header bar
    pub name: String,
    /// Highlighted name in the hero greeting
    pub short_name: String,
    /// Hero paragraph
    pub tagline: String,
    /// Profile picture in the about section
    pub avatar_url: String,
}

/// Everything the page displays.
///
/// `SiteContent::default()` is the built-in page (see [`crate::content`]);
/// deserialized files only need to name the fields they override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub profile: Profile,
    /// Paragraphs of the about section, in order
    pub about: Vec<String>,
    /// Skill grid labels
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contacts: Vec<ContactLink>,
    /// Footer copyright line
    pub footer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_is_document_order() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "about", "projects", "contact"]);
    }

    #[test]
    fn section_parses_case_insensitively() {
        assert_eq!("Projects".parse::<SectionId>(), Ok(SectionId::Projects));
        assert_eq!(" contact ".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("blog".parse::<SectionId>().is_err());
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn theme_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
    }

    #[test]
    fn mailto_stays_in_the_current_tab() {
        let email = ContactLink {
            kind: ContactKind::Email,
            label: "Email".into(),
            caption: "me@example.com".into(),
            href: "mailto:me@example.com".into(),
        };
        assert!(!email.opens_new_tab());

        let github = ContactLink {
            kind: ContactKind::GitHub,
            href: "https://github.com/someone".into(),
            ..email
        };
        assert!(github.opens_new_tab());
    }
}
