//! The components that render the page.
//!
//! [`App`] assembles a [`Site`](crate::site::Site), splits it into signals and provides them to
//! the rest of the tree as a [`SiteState`] context. Host signals (fragment changes, scrolling,
//! Escape) are queued on a channel and drained by a single task, so they are handled one at a
//! time in arrival order.

use dioxus::prelude::*;

use crate::{
    catalog::ProjectCatalog,
    host::HostEvent,
    router::{ScrollStyle, SectionRouter},
    site::Site,
    theme::ThemeStore,
    typer::CommandTyper,
};

mod app;
mod navbar;
mod pages;
mod project_card;
mod reveal;
mod terminal;

pub use app::*;
pub use navbar::*;
pub use pages::*;
pub use project_card::*;
pub use reveal::*;
pub use terminal::*;

/// Shared, reactive site state.
#[derive(Clone, Copy)]
pub struct SiteState {
    pub router: Signal<SectionRouter>,
    pub scroll: Signal<ScrollStyle>,
    pub theme: Signal<ThemeStore>,
    pub typer: Signal<CommandTyper>,
    pub catalog: ProjectCatalog,
}

impl SiteState {
    /// Move an assembled site into signals owned by the current scope.
    pub fn new(site: Site) -> Self {
        let Site {
            router,
            scroll,
            theme,
            catalog,
            typer,
        } = site;

        Self {
            router: Signal::new(router),
            scroll: Signal::new(scroll),
            theme: Signal::new(theme),
            typer: Signal::new(typer),
            catalog,
        }
    }

    pub fn navigate(mut self, target: &str) {
        self.router.write().navigate_to(target);
    }

    pub fn toggle_menu(mut self) {
        self.router.write().toggle_menu();
    }

    /// Close the mobile menu if it is open.
    pub fn close_menu(mut self) {
        if self.router.peek().menu().is_open() {
            self.router.write().close_menu();
        }
    }

    pub fn toggle_theme(mut self) {
        self.theme.write().toggle();
    }

    pub fn handle(mut self, event: HostEvent) {
        match event {
            HostEvent::HashChanged => self.router.write().sync_with_history(),
            HostEvent::Scrolled(offset) => {
                let mut scroll = *self.scroll.peek();
                if scroll.update(offset).is_some() {
                    self.scroll.set(scroll);
                }
            }
            HostEvent::Escape => self.close_menu(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        config::SiteConfig,
        history::{HashHistory, MemoryHashHistory},
        host::{MemoryPage, Platform},
        storage::MemoryStorage,
        theme::Theme,
        Section,
    };

    #[derive(Clone)]
    struct Slot {
        history: Rc<MemoryHashHistory>,
        state: Rc<RefCell<Option<SiteState>>>,
    }

    fn root(slot: Slot) -> Element {
        use_hook(|| {
            let platform = Platform::memory(
                slot.history.clone(),
                Rc::new(MemoryStorage::default()),
                Rc::new(MemoryPage::default()),
            );
            let site = Site::assemble(&SiteConfig::default(), ProjectCatalog::default(), &platform);
            *slot.state.borrow_mut() = Some(SiteState::new(site));
        });

        rsx! {}
    }

    fn mount() -> (VirtualDom, Slot, SiteState) {
        let slot = Slot {
            history: Rc::new(MemoryHashHistory::default()),
            state: Rc::default(),
        };
        let mut dom = VirtualDom::new_with_props(root, slot.clone());
        dom.rebuild_in_place();
        let state = slot
            .state
            .borrow()
            .expect("the state is built on the first render");
        (dom, slot, state)
    }

    #[test]
    fn escape_closes_an_open_menu() {
        let (dom, _, state) = mount();

        dom.in_runtime(|| {
            state.toggle_menu();
            assert!(state.router.peek().menu().is_open());

            state.handle(HostEvent::Escape);
            assert!(!state.router.peek().menu().is_open());

            // a second Escape has nothing to close
            state.handle(HostEvent::Escape);
            assert!(!state.router.peek().menu().is_open());
        });
    }

    #[test]
    fn scrolling_crosses_the_threshold_both_ways() {
        let (dom, _, state) = mount();

        dom.in_runtime(|| {
            state.handle(HostEvent::Scrolled(50.0));
            assert!(!state.scroll.peek().is_scrolled());

            state.handle(HostEvent::Scrolled(51.0));
            assert!(state.scroll.peek().is_scrolled());

            state.handle(HostEvent::Scrolled(0.0));
            assert!(!state.scroll.peek().is_scrolled());
        });
    }

    #[test]
    fn hash_changes_follow_the_history() {
        let (dom, slot, state) = mount();

        slot.history.edit_fragment("certifications");
        dom.in_runtime(|| {
            state.handle(HostEvent::HashChanged);
            assert_eq!(
                state.router.peek().current_section(),
                Section::Certifications
            );
        });
        assert_eq!(slot.history.fragment(), "certifications");
    }

    #[test]
    fn theme_toggles_through_the_state() {
        let (dom, _, state) = mount();

        dom.in_runtime(|| {
            state.toggle_theme();
            assert_eq!(state.theme.peek().current(), Theme::Light);
        });
    }
}
