//! Built-in page content and content files.
//!
//! The page ships with its own content (`SiteContent::default()`). A TOML or
//! JSON file can override any part of it; missing fields keep the built-in
//! values.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{ContactKind, ContactLink, Profile, Project, SiteContent};

/// Errors raised while loading, validating or exporting content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("failed to serialize content as {format}: {source}")]
    Serialize {
        format: ContentFormat,
        #[source]
        source: FormatError,
    },
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Encoder/decoder failure from the underlying serde format crate.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// On-disk encodings understood by [`SiteContent::load_from_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    /// Picks the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ContentFormat::Json,
            _ => ContentFormat::Toml,
        }
    }
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ContentFormat::Toml => "toml",
            ContentFormat::Json => "json",
        })
    }
}

const AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/145894334?v=4";

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Yashraj Sherke".into(),
            short_name: "Yashraj".into(),
            tagline: "A Frontend Web Developer passionate about building beautiful, functional websites that create amazing user experiences.".into(),
            avatar_url: AVATAR_URL.into(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            about: vec![
                "I'm a passionate frontend developer currently learning modern web technologies. I enjoy creating clean, responsive websites and am constantly exploring new frameworks and tools to improve my skills.".into(),
                "My goal is to build user-friendly applications that solve real-world problems while providing exceptional user experiences.".into(),
            ],
            skills: ["HTML5", "CSS3", "JavaScript", "React", "Tailwind CSS", "Git & GitHub"]
                .into_iter()
                .map(String::from)
                .collect(),
            projects: vec![
                Project {
                    title: "BitBuds".into(),
                    description: "A Kids coading platform in easy way.".into(),
                    image_url: "https://images.pexels.com/photos/3184298/pexels-photo-3184298.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                    link: "#".into(),
                },
                Project {
                    title: "Weather Forcast".into(),
                    description: "A responsive weather app that provides current weather and forecasts using a weather API.".into(),
                    image_url: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                    link: "https://yashraj-sherke.github.io/Whether-Forcast/".into(),
                },
                Project {
                    title: "Portfolio Website".into(),
                    description: "This very portfolio website showcasing my skills and projects with modern design.".into(),
                    image_url: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                    link: "https://yashraj-sherke.netlify.app/".into(),
                },
            ],
            contacts: vec![
                ContactLink {
                    kind: ContactKind::Email,
                    label: "Email".into(),
                    caption: "yashrajsherke49@example.com".into(),
                    href: "mailto:yashrajsherke49@example.com".into(),
                },
                ContactLink {
                    kind: ContactKind::GitHub,
                    label: "GitHub".into(),
                    caption: "View my code".into(),
                    href: "https://github.com/Yashraj-sherke".into(),
                },
                ContactLink {
                    kind: ContactKind::LinkedIn,
                    label: "LinkedIn".into(),
                    caption: "Let's connect".into(),
                    href: "https://www.linkedin.com/in/yashraj-sherke-35b8ab25b/".into(),
                },
            ],
            footer: "© 2025 Yashraj Sherke. Built with Rust and Leptos.".into(),
        }
    }
}

impl SiteContent {
    /// Load content from a TOML or JSON file (chosen by extension) and validate it.
    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let format = ContentFormat::from_path(path);
        debug!(path = %path.display(), ?format, "loading site content");

        let content = Self::parse(&raw, format).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        content.validate()?;
        Ok(content)
    }

    /// Parse content from a string without validating it.
    pub fn parse(raw: &str, format: ContentFormat) -> Result<Self, FormatError> {
        Ok(match format {
            ContentFormat::Toml => toml::from_str(raw)?,
            ContentFormat::Json => serde_json::from_str(raw)?,
        })
    }

    /// Serialize content for export.
    pub fn to_string_as(&self, format: ContentFormat) -> Result<String, ContentError> {
        let encoded = match format {
            ContentFormat::Toml => toml::to_string_pretty(self).map_err(FormatError::from),
            ContentFormat::Json => serde_json::to_string_pretty(self).map_err(FormatError::from),
        };
        encoded.map_err(|source| ContentError::Serialize { format, source })
    }

    /// Check that the content can render a usable page.
    ///
    /// Empty skill or project lists are allowed (the grids just render empty),
    /// but every record that is present must be complete.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile.name is empty".into()));
        }
        if self.skills.is_empty() {
            warn!("content has no skills; the skill grid will be empty");
        }
        for (idx, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ContentError::Invalid(format!("projects[{idx}].title is empty")));
            }
            check_link(&project.link, &format!("projects[{idx}].link"))?;
        }
        for (idx, contact) in self.contacts.iter().enumerate() {
            check_link(&contact.href, &format!("contacts[{idx}].href"))?;
        }
        Ok(())
    }
}

fn check_link(link: &str, field: &str) -> Result<(), ContentError> {
    let link = link.trim();
    if link.is_empty() {
        return Err(ContentError::Invalid(format!("{field} is empty")));
    }
    let allowed = link.starts_with('#')
        || ["http://", "https://", "mailto:"]
            .iter()
            .any(|scheme| link.starts_with(scheme));
    if !allowed {
        return Err(ContentError::Invalid(format!(
            "{field} has unsupported scheme: {link}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_content_is_valid() {
        let content = SiteContent::default();
        content.validate().expect("built-in content validates");
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.len(), 6);
        assert_eq!(content.contacts[1].href, "https://github.com/Yashraj-sherke");
    }

    #[test]
    fn partial_toml_keeps_builtin_values() {
        let raw = r#"
skills = ["Rust", "Leptos"]

[profile]
name = "Someone Else"
"#;
        let content = SiteContent::parse(raw, ContentFormat::Toml).expect("parses");
        assert_eq!(content.profile.name, "Someone Else");
        assert_eq!(content.profile.short_name, "Yashraj");
        assert_eq!(content.skills, vec!["Rust".to_string(), "Leptos".to_string()]);
        assert_eq!(content.projects, SiteContent::default().projects);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ContentFormat::from_path(Path::new("site.json")), ContentFormat::Json);
        assert_eq!(ContentFormat::from_path(Path::new("site.JSON")), ContentFormat::Json);
        assert_eq!(ContentFormat::from_path(Path::new("site.toml")), ContentFormat::Toml);
        assert_eq!(ContentFormat::from_path(Path::new("site")), ContentFormat::Toml);
    }

    #[test]
    fn exported_toml_loads_back() {
        let exported = SiteContent::default()
            .to_string_as(ContentFormat::Toml)
            .expect("serializes");
        let mut file = NamedTempFile::with_suffix(".toml").expect("temp file");
        file.write_all(exported.as_bytes()).expect("write");

        let loaded = SiteContent::load_from_path(file.path()).expect("loads");
        assert_eq!(loaded, SiteContent::default());
    }

    #[test]
    fn rejects_javascript_links() {
        let mut content = SiteContent::default();
        content.projects[0].link = "javascript:alert(1)".into();
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("projects[0].link"));
    }

    #[test]
    fn rejects_blank_owner() {
        let mut content = SiteContent::default();
        content.profile.name = "  ".into();
        assert!(matches!(content.validate(), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SiteContent::load_from_path(Path::new("/nonexistent/portfolio.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = NamedTempFile::with_suffix(".json").expect("temp file");
        file.write_all(b"{ not json").expect("write");
        let err = SiteContent::load_from_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Parse {
                source: FormatError::Json(_),
                ..
            }
        ));
        let cause = std::error::Error::source(&err).expect("parse error keeps its cause");
        assert!(cause.downcast_ref::<FormatError>().is_some());
    }

    #[test]
    fn malformed_toml_keeps_decoder_error() {
        let err = SiteContent::parse("profile = [", ContentFormat::Toml).unwrap_err();
        assert!(matches!(err, FormatError::TomlDe(_)));
    }

    #[test]
    fn serialize_failure_names_the_format() {
        let source = FormatError::from(serde_json::from_str::<u8>("x").unwrap_err());
        let err = ContentError::Serialize {
            format: ContentFormat::Json,
            source,
        };
        assert!(err.to_string().starts_with("failed to serialize content as json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
