//! # portfolio
//!
//! Offline companion to the browser build: prerenders the page to a static
//! HTML file and exports or validates content files.
//!
//! ## Usage
//!
//! ```bash
//! # Static page with the built-in content
//! portfolio render --out dist/index.html
//!
//! # Start a custom content file, edit it, check it, render it
//! portfolio content --format toml > site.toml
//! portfolio check site.toml
//! portfolio render --content site.toml --theme light --out dist/index.html
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use portfolio_site::render_page;
use portfolio_site::state::UiState;
use portfolio_site::types::{SectionId, SiteContent, Theme};
use portfolio_site::ContentFormat;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Prerender the portfolio page and manage its content")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to a static HTML document
    Render {
        /// Content file (TOML or JSON); built-in content when omitted
        #[arg(long)]
        content: Option<PathBuf>,
        /// Initial theme
        #[arg(long, default_value_t = Theme::Dark)]
        theme: Theme,
        /// Section highlighted in the navigation
        #[arg(long, default_value_t = SectionId::Home)]
        section: SectionId,
        /// Output file; stdout when omitted
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print the built-in content as a starting point for a content file
    Content {
        #[arg(long, value_enum, default_value_t = FormatArg::Toml)]
        format: FormatArg,
    },
    /// Load and validate a content file
    Check {
        /// Content file (TOML or JSON)
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Toml,
    Json,
}

impl From<FormatArg> for ContentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Toml => ContentFormat::Toml,
            FormatArg::Json => ContentFormat::Json,
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => SiteContent::load_from_path(path)
            .with_context(|| format!("loading content from {}", path.display())),
        None => {
            debug!("using built-in content");
            Ok(SiteContent::default())
        }
    }
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("writing to stdout")?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Render {
            content,
            theme,
            section,
            out,
        } => {
            let content = load_content(content.as_deref())?;
            info!(%theme, %section, projects = content.projects.len(), "rendering page");
            let html = render_page(&content, UiState::new(theme, section));
            write_output(out.as_deref(), &html)
        }
        Command::Content { format } => {
            let text = SiteContent::default()
                .to_string_as(format.into())
                .context("serializing built-in content")?;
            write_output(None, &text)
        }
        Command::Check { path } => {
            let content = load_content(Some(&path))?;
            println!(
                "{}: ok ({} skills, {} projects, {} contacts)",
                path.display(),
                content.skills.len(),
                content.projects.len(),
                content.contacts.len()
            );
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
