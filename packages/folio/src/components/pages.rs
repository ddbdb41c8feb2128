use dioxus::prelude::*;

use super::{ProjectCard, Reveal, SiteState, Terminal};
use crate::{config::SiteConfig, Section};

#[component]
pub fn Home() -> Element {
    let state = use_context::<SiteState>();
    let config = use_context::<SiteConfig>();

    rsx! {
        div { class: "hero",
            div { class: "hero-text",
                p { class: "hero-greeting", "Hi, I'm" }
                h1 { class: "hero-name", "{config.owner}" }
                p { class: "hero-role", "{config.role}" }
                div { class: "hero-actions",
                    a {
                        class: "btn btn-primary",
                        href: "#projects",
                        onclick: move |evt| {
                            evt.prevent_default();
                            state.navigate(Section::Projects.id());
                        },
                        "View projects"
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "#about",
                        onclick: move |evt| {
                            evt.prevent_default();
                            state.navigate(Section::About.id());
                        },
                        "About me"
                    }
                }
            }
            Terminal {}
        }
    }
}

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        h2 { class: "section-title", "About Me" }
        div { class: "about-content",
            div { class: "about-text",
                for paragraph in config.about.iter() {
                    p { "{paragraph}" }
                }
            }
            div { class: "about-details",
                for detail in config.details.iter() {
                    Reveal { key: "{detail.label}", class: "detail-item",
                        i { class: "{detail.icon}" }
                        div {
                            span { class: "detail-label", "{detail.label}" }
                            span { class: "detail-value", "{detail.value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let state = use_context::<SiteState>();

    rsx! {
        h2 { class: "section-title", "Projects" }
        div { id: "projects-grid", class: "projects-grid",
            for project in state.catalog.projects().iter().copied() {
                ProjectCard { key: "{project.title}", project }
            }
        }
    }
}

#[component]
pub fn Certifications() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        h2 { class: "section-title", "Certifications" }
        if config.certifications.is_empty() {
            p { class: "empty-state", "Certifications are on their way." }
        }
        div { class: "certs-grid",
            for cert in config.certifications.iter() {
                Reveal { key: "{cert.name}", class: "cert-card",
                    div { class: "cert-icon", i { class: "{cert.icon}" } }
                    h3 { class: "cert-name", "{cert.name}" }
                    p { class: "cert-issuer", "{cert.issuer}" }
                    if let Some(url) = &cert.url {
                        a {
                            class: "cert-link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Verify"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        footer { class: "footer",
            p { "© {config.owner}" }
            a {
                class: "footer-link",
                href: "{config.github}",
                target: "_blank",
                rel: "noopener noreferrer",
                i { class: "fab fa-github" }
                " GitHub"
            }
        }
    }
}
