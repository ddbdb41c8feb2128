use crate::{
    catalog::ProjectCatalog,
    config::SiteConfig,
    host::Platform,
    router::{ScrollStyle, SectionRouter},
    theme::ThemeStore,
    typer::CommandTyper,
};

/// Everything the page runs on, created once at startup and kept for the life of the tab.
pub struct Site {
    pub router: SectionRouter,
    pub scroll: ScrollStyle,
    pub theme: ThemeStore,
    pub catalog: ProjectCatalog,
    pub typer: CommandTyper,
}

impl Site {
    /// Build every part of the site against `platform`.
    ///
    /// The router resolves its first section from the URL fragment, the theme store applies the
    /// persisted theme, and the nav bar styling starts from the current scroll offset.
    pub fn assemble(config: &SiteConfig, catalog: ProjectCatalog, platform: &Platform) -> Self {
        let sections = config.section_set();
        let mut router = SectionRouter::new(
            platform.history.clone(),
            sections,
            sections,
            config.titles(),
        );
        router.start();

        let mut scroll = ScrollStyle::new(config.navbar.scroll_threshold);
        scroll.update(platform.page.scroll_offset());

        let theme = ThemeStore::load(platform.storage.clone(), platform.theme.clone());

        tracing::info!(
            section = %router.current_section(),
            theme = %theme.current(),
            projects = catalog.len(),
            "site assembled"
        );

        Self {
            router,
            scroll,
            theme,
            catalog,
            typer: CommandTyper::new(&config.terminal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        history::{HashHistory, MemoryHashHistory},
        host::MemoryPage,
        storage::MemoryStorage,
        theme::{Theme, THEME_KEY},
        Section,
    };
    use std::rc::Rc;

    #[test]
    fn assembles_from_the_platform() {
        let page = Rc::new(MemoryPage::scrolled_to(300.0));
        let platform = Platform::memory(
            Rc::new(MemoryHashHistory::with_initial_fragment("#certifications")),
            Rc::new(MemoryStorage::default().with_entry(THEME_KEY, "light")),
            page.clone(),
        );

        let mut site = Site::assemble(&SiteConfig::default(), ProjectCatalog::default(), &platform);

        assert_eq!(site.router.current_section(), Section::Certifications);
        assert!(site.scroll.is_scrolled());
        assert_eq!(site.theme.current(), Theme::Light);
        assert_eq!(page.applied_theme(), Some(Theme::Light));
        assert_eq!(site.catalog.len(), 1);
        assert!(site.typer.tick().is_some());
    }

    #[test]
    fn unconfigured_sections_are_missing() {
        let mut config = SiteConfig::default();
        config.sections.retain(|section| section.id != Section::About);

        let history = Rc::new(MemoryHashHistory::default());
        let platform = Platform::memory(
            history.clone(),
            Rc::new(MemoryStorage::default()),
            Rc::new(MemoryPage::default()),
        );
        let mut site = Site::assemble(&config, ProjectCatalog::default(), &platform);

        site.router.navigate_to("about");
        assert_eq!(site.router.state().active_panel, None);
        assert_eq!(site.router.current_section(), Section::Home);
        assert_eq!(history.fragment(), "about");
    }
}
