use dioxus::prelude::*;

use super::SiteState;
use crate::{config::SiteConfig, Section};

#[component]
pub fn Navbar() -> Element {
    let state = use_context::<SiteState>();
    let config = use_context::<SiteConfig>();

    let scrolled = state.scroll.read().is_scrolled();
    let menu_open = state.router.read().menu().is_open();
    let icon = state.theme.read().current().toggle_icon();

    rsx! {
        nav {
            id: "navbar",
            class: if scrolled { "navbar scrolled" } else { "navbar" },
            // clicks inside the bar must not count as clicks outside the menu
            onclick: move |evt| evt.stop_propagation(),
            div { class: "nav-container",
                a {
                    class: "nav-brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        state.navigate(Section::Home.id());
                    },
                    span { class: "brand-prompt", "~/" }
                    "{config.owner}"
                }
                ul {
                    id: "nav-menu",
                    class: if menu_open { "nav-menu active" } else { "nav-menu" },
                    for section in config.sections.iter() {
                        NavLink {
                            key: "{section.id}",
                            page: section.id,
                            label: section.label.clone(),
                        }
                    }
                }
                div { class: "nav-actions",
                    button {
                        id: "theme-toggle",
                        class: "theme-toggle",
                        aria_label: "Toggle theme",
                        onclick: move |_| state.toggle_theme(),
                        i { class: icon }
                    }
                    button {
                        id: "nav-toggle",
                        class: if menu_open { "nav-toggle active" } else { "nav-toggle" },
                        aria_label: "Toggle navigation",
                        onclick: move |_| state.toggle_menu(),
                        span { class: "bar" }
                        span { class: "bar" }
                        span { class: "bar" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavLink(page: Section, label: String) -> Element {
    let state = use_context::<SiteState>();
    let active = state.router.read().is_link_active(page);

    rsx! {
        li { class: "nav-item",
            a {
                class: if active { "nav-link active" } else { "nav-link" },
                href: "#{page}",
                "data-page": "{page}",
                onclick: move |evt| {
                    evt.prevent_default();
                    state.navigate(page.id());
                },
                "{label}"
            }
        }
    }
}
