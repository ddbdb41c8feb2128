use dioxus::prelude::*;

use crate::{
    catalog::{format_count, readme_lines, Project},
    fade::FADE_CLASS,
    host::Platform,
};

/// A project card. Public projects open their repository when clicked; private ones only show
/// a badge.
///
/// Cards are rendered with the fade class already set, so they animate in with the projects
/// section instead of waiting on a visibility event.
#[component]
pub fn ProjectCard(project: Project) -> Element {
    let platform = use_context::<Platform>();

    let stars = format_count(project.stars);
    let forks = format_count(project.forks);

    rsx! {
        div {
            class: "project-card {FADE_CLASS}",
            onclick: move |_| {
                if !project.is_private {
                    platform.page.open_external(project.url);
                }
            },
            div { class: "project-header",
                div { class: "project-icon",
                    i { class: project.icon }
                }
                h3 { class: "project-title", "{project.title}" }
                if project.is_private {
                    span { class: "private-badge", "Private" }
                }
            }
            if let Some(readme) = project.readme {
                div { class: "project-readme", Readme { text: readme } }
            }
            p { class: "project-description", "{project.description}" }
            div { class: "project-meta",
                div { class: "project-stats",
                    span { class: "project-stat",
                        i { class: "fas fa-star" }
                        " {stars}"
                    }
                    span { class: "project-stat",
                        i { class: "fas fa-code-branch" }
                        " {forks}"
                    }
                    span { class: "project-stat",
                        i { class: "fas fa-circle" }
                        " {project.language}"
                    }
                    if project.is_private {
                        span { class: "project-stat",
                            i { class: "fas fa-lock" }
                            " Private"
                        }
                    }
                }
                if !project.is_private {
                    a {
                        class: "project-link",
                        href: project.url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: move |evt| evt.stop_propagation(),
                        i { class: "fab fa-github" }
                        " View"
                    }
                }
            }
        }
    }
}

#[component]
fn Readme(text: &'static str) -> Element {
    rsx! {
        for (index, line) in readme_lines(text).into_iter().enumerate() {
            if index > 0 {
                br {}
            }
            for span in line {
                if span.bold {
                    strong { "{span.text}" }
                } else {
                    "{span.text}"
                }
            }
        }
    }
}
