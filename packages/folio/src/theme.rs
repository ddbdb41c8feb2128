//! The light/dark theme preference.

use std::{fmt::Display, rc::Rc, str::FromStr};

use crate::storage::PreferenceStorage;

/// The storage key the preference is kept under.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The class put on `<body>`.
    pub const fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-mode",
            Theme::Light => "light-mode",
        }
    }

    /// Rewrite a `class` attribute for this theme, keeping every class that is not a theme
    /// class.
    pub fn body_classes(self, existing: &str) -> String {
        let themes = [Theme::Dark.body_class(), Theme::Light.body_class()];
        existing
            .split_whitespace()
            .filter(|class| !themes.contains(class))
            .chain([self.body_class()])
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The icon on the toggle button, which shows the theme a click switches to.
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not a theme")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Applies a theme to the page, e.g. by setting `data-theme` on the document root.
pub trait ThemeTarget {
    fn apply_theme(&self, theme: Theme);
}

impl<T: ThemeTarget + ?Sized> ThemeTarget for Rc<T> {
    fn apply_theme(&self, theme: Theme) {
        (**self).apply_theme(theme)
    }
}

/// Holds the active theme, persists every change and applies it to the page.
pub struct ThemeStore {
    storage: Rc<dyn PreferenceStorage>,
    target: Rc<dyn ThemeTarget>,
    current: Theme,
}

impl ThemeStore {
    /// Read the persisted preference and apply it. A missing or unreadable entry means dark.
    pub fn load(storage: Rc<dyn PreferenceStorage>, target: Rc<dyn ThemeTarget>) -> Self {
        let current = match storage.get(THEME_KEY) {
            Some(stored) => stored.parse().unwrap_or_else(|err: UnknownTheme| {
                tracing::warn!("ignoring stored theme: {err}");
                Theme::default()
            }),
            None => Theme::default(),
        };

        let mut store = Self {
            storage,
            target,
            current,
        };
        store.set(current);
        store
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Apply and persist `theme`. A failed write is logged; the theme still changes.
    pub fn set(&mut self, theme: Theme) {
        self.target.apply_theme(theme);
        if let Err(err) = self.storage.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("theme preference was not saved: {err}");
        }
        self.current = theme;
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTarget(RefCell<Vec<Theme>>);

    impl ThemeTarget for RecordingTarget {
        fn apply_theme(&self, theme: Theme) {
            self.0.borrow_mut().push(theme);
        }
    }

    #[test]
    fn defaults_to_dark() {
        let storage = Rc::new(MemoryStorage::default());
        let target = Rc::new(RecordingTarget::default());
        let store = ThemeStore::load(storage.clone(), target.clone());

        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(*target.0.borrow(), vec![Theme::Dark]);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn light_survives_a_reload() {
        let storage = Rc::new(MemoryStorage::default());
        let target = Rc::new(RecordingTarget::default());

        let mut store = ThemeStore::load(storage.clone(), target.clone());
        store.set(Theme::Light);
        drop(store);

        let store = ThemeStore::load(storage.clone(), target.clone());
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(store.current().toggle_icon(), "fas fa-moon");
        assert_eq!(store.current().body_class(), "light-mode");
        assert_eq!(target.0.borrow().last(), Some(&Theme::Light));
    }

    #[test]
    fn toggle_flips_and_persists() {
        let storage = Rc::new(MemoryStorage::default().with_entry(THEME_KEY, "light"));
        let mut store = ThemeStore::load(storage.clone(), Rc::new(RecordingTarget::default()));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.current().toggle_icon(), "fas fa-sun");
    }

    #[test]
    fn body_classes_swap_only_the_theme() {
        assert_eq!(Theme::Dark.body_classes(""), "dark-mode");
        assert_eq!(Theme::Light.body_classes("dark-mode loaded"), "loaded light-mode");
        assert_eq!(Theme::Dark.body_classes("loaded  light-mode"), "loaded dark-mode");
        assert_eq!(Theme::Dark.body_classes("dark-mode"), "dark-mode");
    }

    #[test]
    fn garbage_reads_as_dark() {
        let storage = Rc::new(MemoryStorage::default().with_entry(THEME_KEY, "sepia"));
        let store = ThemeStore::load(storage, Rc::new(RecordingTarget::default()));
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn failed_writes_still_switch() {
        let target = Rc::new(RecordingTarget::default());
        let mut store = ThemeStore::load(Rc::new(MemoryStorage::read_only()), target.clone());

        store.toggle();
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(*target.0.borrow(), vec![Theme::Dark, Theme::Light]);
    }
}
