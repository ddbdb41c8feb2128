use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc;
use futures_util::StreamExt;

use super::{About, Certifications, Footer, Home, Navbar, Projects, SiteState};
use crate::{
    catalog::ProjectCatalog,
    config::SiteConfig,
    host::{HostEvent, Platform},
    site::Site,
    Section,
};

/// The whole page.
#[component]
pub fn App(
    platform: Platform,
    config: SiteConfig,
    #[props(default)] catalog: ProjectCatalog,
) -> Element {
    let state = use_hook(|| SiteState::new(Site::assemble(&config, catalog, &platform)));

    use_context_provider(|| state);
    use_context_provider(|| platform.clone());
    use_context_provider(|| config.clone());

    use_hook(|| {
        let (tx, mut rx) = mpsc::unbounded::<HostEvent>();

        platform.history.updater(Rc::new({
            let tx = tx.clone();
            move || _ = tx.unbounded_send(HostEvent::HashChanged)
        }));
        platform
            .page
            .listen(Rc::new(move |event| _ = tx.unbounded_send(event)));

        spawn(async move {
            while let Some(event) = rx.next().await {
                state.handle(event);
            }
        })
    });

    let title = state.router.read().title().to_string();

    rsx! {
        document::Title { "{title}" }
        div {
            class: "app",
            onclick: move |_| state.close_menu(),
            Navbar {}
            main { class: "main-content",
                for page in config.sections.iter().map(|section| section.id) {
                    Panel { key: "{page}", page }
                }
            }
            Footer {}
        }
    }
}

/// One section of the page, shown only while the router marks it active.
#[component]
pub fn Panel(page: Section) -> Element {
    let state = use_context::<SiteState>();
    let class = match state.router.read().is_panel_active(page) {
        true => "page-section active",
        false => "page-section",
    };

    rsx! {
        section { id: page.id(), class: "{class}",
            {match page {
                Section::Home => rsx! { Home {} },
                Section::About => rsx! { About {} },
                Section::Projects => rsx! { Projects {} },
                Section::Certifications => rsx! { Certifications {} },
            }}
        }
    }
}
