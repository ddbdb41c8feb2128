//! Section navigation.
//!
//! [`SectionRouter`] is the single source of truth for which section is on screen. Three surfaces
//! mirror it: the visible section panel, the active nav control, and the URL fragment. The panels
//! and controls are rendered from the router's markers, the fragment is written through the
//! injected [`HashHistory`].

use std::rc::Rc;

use tracing::{debug, warn};

use crate::{history::HashHistory, Section, SectionSet, SectionTarget, TitleMap};

mod menu;
mod scroll;

pub use menu::*;
pub use scroll::*;

/// What the router currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    /// Always a known section. Starts at [`Section::Home`].
    pub current: Section,
    /// The panel marked active, if its element exists.
    pub active_panel: Option<Section>,
    /// The nav control marked active, if its element exists.
    pub active_link: Option<Section>,
}

pub struct SectionRouter {
    history: Rc<dyn HashHistory>,
    panels: SectionSet,
    links: SectionSet,
    titles: TitleMap,
    state: RouterState,
    menu: MobileMenu,
    title: String,
}

impl SectionRouter {
    /// Create a router over the given panels and nav controls.
    ///
    /// Nothing is marked active until the first navigation; call [`SectionRouter::start`] once the
    /// markup exists.
    pub fn new(
        history: Rc<dyn HashHistory>,
        panels: SectionSet,
        links: SectionSet,
        titles: TitleMap,
    ) -> Self {
        let title = titles.default_title().to_string();
        Self {
            history,
            panels,
            links,
            titles,
            state: RouterState::default(),
            menu: MobileMenu::default(),
            title,
        }
    }

    /// Navigate to whatever the URL fragment names, or home when it is empty.
    pub fn start(&mut self) {
        self.sync_with_history();
    }

    /// Follow a fragment change made outside the router. An empty fragment means home.
    pub fn sync_with_history(&mut self) {
        let target = SectionTarget::from_fragment(&self.history.fragment());
        self.show(target);
    }

    /// Show the section named by the raw identifier `target`.
    ///
    /// Unknown targets leave the panels and nav controls alone but are still written to the URL
    /// fragment. A known section whose panel is missing hides every panel. Either way the mobile
    /// menu is closed and the page scrolls back to the top.
    ///
    /// `target` is an identifier, not a fragment: `"#about"` and `""` name no section.
    pub fn navigate_to(&mut self, target: &str) {
        self.show(SectionTarget::parse(target));
    }

    fn show(&mut self, target: SectionTarget) {
        match &target {
            SectionTarget::Known(section) => self.activate(*section),
            SectionTarget::Unrecognized(raw) => {
                debug!("no section named {raw:?}, keeping {}", self.state.current)
            }
        }

        self.title = self.titles.get(&target).to_string();
        self.history.push_fragment(target.as_str());
        self.menu.close();
        self.history.scroll_to_top();
    }

    fn activate(&mut self, section: Section) {
        // everything is cleared before anything is marked, so two panels are never active at once
        self.state.active_panel = None;
        self.state.active_link = None;

        if self.panels.contains(section) {
            self.state.active_panel = Some(section);
            self.state.current = section;
        } else {
            warn!("section {section} has no panel to show");
        }

        if self.links.contains(section) {
            self.state.active_link = Some(section);
        }

        debug!("navigated to {section}");
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    pub fn current_section(&self) -> Section {
        self.state.current
    }

    pub fn is_panel_active(&self, section: Section) -> bool {
        self.state.active_panel == Some(section)
    }

    pub fn is_link_active(&self, section: Section) -> bool {
        self.state.active_link == Some(section)
    }

    /// The document title for the last navigation.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn menu(&self) -> MobileMenu {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Close the menu in response to Escape or a click outside the nav bar.
    pub fn close_menu(&mut self) {
        self.menu.close();
    }
}
