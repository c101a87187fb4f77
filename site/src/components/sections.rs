//! Content regions: hero, about, projects, contact and footer.
//!
//! These are pure presentation. Colors come from the theme class on the page
//! root, so none of them read the theme themselves.

use super::{
    ICON_CODE, ICON_EXTERNAL_LINK, ICON_GITHUB, ICON_LINKEDIN, ICON_MAIL, ICON_MESSAGE_SQUARE,
    ICON_USER, Icon, navigate_to,
};
use crate::state::UiState;
use crate::types::{ContactKind, ContactLink, Profile, Project, SectionId};
use leptos::prelude::*;

/// Centered section title + subtitle.
#[component]
fn SectionHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-description">{description}</p>
        </div>
    }
}

#[component]
pub fn Hero(profile: Profile, ui: RwSignal<UiState>) -> impl IntoView {
    view! {
        <section id=SectionId::Home.anchor() class="page-section hero">
            <div class="container">
                <div class="hero-avatar-icon">
                    <Icon path=ICON_USER size="48" />
                </div>
                <h1 class="hero-title">
                    "Hi, I'm " <span class="accent">{profile.short_name}</span>
                </h1>
                <p class="hero-tagline">{profile.tagline}</p>
                <button
                    class="btn-primary"
                    data-role="contact-cta"
                    on:click=move |_| navigate_to(ui, SectionId::Contact)
                >
                    "Contact Me"
                    <Icon path=ICON_MESSAGE_SQUARE class="btn-icon" />
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn About(
    profile: Profile,
    /// Paragraphs next to the avatar
    paragraphs: Vec<String>,
    skills: Vec<String>,
) -> impl IntoView {
    let alt = format!("{} - Profile", profile.name);

    view! {
        <section id=SectionId::About.anchor() class="page-section alt">
            <div class="container">
                <SectionHeader
                    title="About Me"
                    description="Learn more about my journey, skills, and passion for web development."
                />
                <div class="about-grid">
                    <div class="about-avatar">
                        <div class="avatar-frame">
                            <img class="avatar-img" src=profile.avatar_url alt=alt />
                            <div class="avatar-ring"></div>
                        </div>
                    </div>
                    <div class="about-text">
                        {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
                        <h3 class="skills-title">"Skills & Technologies"</h3>
                        <div class="skills-grid">
                            {skills
                                .into_iter()
                                .map(|skill| {
                                    view! {
                                        <div class="skill-chip">
                                            <Icon path=ICON_CODE />
                                            <span>{skill}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        image_url,
        link,
    } = project;

    view! {
        <div class="project-card">
            <img class="project-image" src=image_url alt=title.clone() />
            <div class="project-body">
                <h3 class="project-title">{title}</h3>
                <p class="project-description">{description}</p>
                <a
                    class="btn-primary btn-small"
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View Project"
                    <Icon path=ICON_EXTERNAL_LINK size="16" />
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.anchor() class="page-section">
            <div class="container">
                <SectionHeader
                    title="My Projects"
                    description="Here are some of the projects I've worked on to showcase my skills."
                />
                <div class="projects-grid">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

fn contact_icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => ICON_MAIL,
        ContactKind::GitHub => ICON_GITHUB,
        ContactKind::LinkedIn => ICON_LINKEDIN,
    }
}

#[component]
fn ContactCard(link: ContactLink) -> impl IntoView {
    let new_tab = link.opens_new_tab();
    let ContactLink {
        kind,
        label,
        caption,
        href,
    } = link;

    view! {
        <a
            class="contact-card"
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
        >
            <Icon path=contact_icon(kind) size="24" />
            <div>
                <div class="contact-label">{label}</div>
                <div class="contact-caption">{caption}</div>
            </div>
        </a>
    }
}

#[component]
pub fn Contact(contacts: Vec<ContactLink>) -> impl IntoView {
    view! {
        <section id=SectionId::Contact.anchor() class="page-section alt">
            <div class="container">
                <SectionHeader
                    title="Get In Touch"
                    description="I'd love to hear from you! Whether you have a project in mind or just want to connect."
                />
                <div class="contact-list">
                    {contacts
                        .into_iter()
                        .map(|link| view! { <ContactCard link=link /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(text: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{text}</p>
            </div>
        </footer>
    }
}
