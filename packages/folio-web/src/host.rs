//! Browser implementations of the folio host traits.

use std::{cell::RefCell, rc::Rc, time::Duration};

use folio::{
    error::StorageError,
    history::HashHistory,
    host::{HostEvent, PageHost, Platform},
    storage::PreferenceStorage,
    theme::{Theme, ThemeTarget},
};
use futures_util::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{
    ErrorEvent, Event, EventTarget, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
};

/// Added to `<body>` once the page has finished loading.
const LOADED_CLASS: &str = "loaded";

type Listener = Closure<dyn FnMut(Event)>;

/// Build a [`Platform`] on top of the current window.
pub fn platform() -> Platform {
    let window = web_sys::window()
        .expect("should be run in a context with a `Window` object (the site cannot run in a web worker)");
    let page = Rc::new(WebPage::new(window.clone()));
    page.watch_errors();
    page.watch_load();

    Platform {
        history: Rc::new(WebHashHistory::new(window.clone())),
        storage: Rc::new(LocalStorage::new(window)),
        theme: page.clone(),
        page,
    }
}

fn listen(target: &EventTarget, event: &str, listener: Listener, keep: &RefCell<Vec<Listener>>) {
    match target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
        Ok(()) => keep.borrow_mut().push(listener),
        Err(err) => tracing::error!("failed to listen for {event}: {err:?}"),
    }
}

/// A [`HashHistory`] over `window.location.hash`.
pub struct WebHashHistory {
    window: Window,
    listeners: RefCell<Vec<Listener>>,
}

impl WebHashHistory {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listeners: Default::default(),
        }
    }
}

impl HashHistory for WebHashHistory {
    fn fragment(&self) -> String {
        let hash = self.window.location().hash().unwrap_or_default();
        match hash.strip_prefix('#') {
            Some(fragment) => fragment.to_string(),
            None => hash,
        }
    }

    fn push_fragment(&self, fragment: &str) {
        if self.fragment() == fragment {
            return;
        }
        if let Err(err) = self.window.location().set_hash(fragment) {
            tracing::error!("failed to set the url fragment: {err:?}");
        }
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        let listener = Closure::new(move |_: Event| callback());
        listen(&self.window, "hashchange", listener, &self.listeners);
    }
}

/// The page itself: scrolling, keys, timers, new tabs, and the theme attributes.
pub struct WebPage {
    window: Window,
    listeners: RefCell<Vec<Listener>>,
}

impl WebPage {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listeners: Default::default(),
        }
    }

    /// Log uncaught script errors.
    pub fn watch_errors(&self) {
        let on_error = Closure::new(|event: Event| match event.dyn_ref::<ErrorEvent>() {
            Some(event) => tracing::error!("portfolio error: {}", event.message()),
            None => tracing::error!("portfolio error: {:?}", event.type_()),
        });
        listen(&self.window, "error", on_error, &self.listeners);
    }

    /// Mark the body as loaded and log how long the page took, once `load` has fired.
    ///
    /// The wasm bundle usually starts after `load`, in which case this runs immediately.
    pub fn watch_load(&self) {
        let window = self.window.clone();
        let loaded = move || {
            if let Some(body) = window.document().and_then(|document| document.body()) {
                body.set_class_name(&add_class(&body.class_name(), LOADED_CLASS));
            }
            if let Some(performance) = window.performance() {
                tracing::info!("{}", load_message(performance.now()));
            }
        };

        let complete = self
            .window
            .document()
            .is_some_and(|document| document.ready_state() == "complete");
        if complete {
            loaded();
        } else {
            let on_load = Closure::new(move |_: Event| loaded());
            listen(&self.window, "load", on_load, &self.listeners);
        }
    }
}

fn add_class(existing: &str, class: &str) -> String {
    if existing.split_whitespace().any(|c| c == class) {
        return existing.to_string();
    }
    match existing.trim() {
        "" => class.to_string(),
        existing => format!("{existing} {class}"),
    }
}

fn load_message(elapsed_ms: f64) -> String {
    format!("portfolio loaded in {}ms", elapsed_ms.round() as u64)
}

impl PageHost for WebPage {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn open_external(&self, url: &str) {
        if let Err(err) = self.window.open_with_url_and_target(url, "_blank") {
            tracing::error!("failed to open {url}: {err:?}");
        }
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }

    fn listen(&self, sink: Rc<dyn Fn(HostEvent)>) {
        let window = self.window.clone();
        let on_scroll = {
            let sink = sink.clone();
            Closure::new(move |_: Event| {
                sink(HostEvent::Scrolled(window.scroll_y().unwrap_or_default()))
            })
        };
        listen(&self.window, "scroll", on_scroll, &self.listeners);

        let on_key = Closure::new(move |event: Event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|event| event.key() == "Escape");
            if escape {
                sink(HostEvent::Escape);
            }
        });
        match self.window.document() {
            Some(document) => listen(&document, "keydown", on_key, &self.listeners),
            None => tracing::warn!("no document to listen for keys on"),
        }
    }
}

impl ThemeTarget for WebPage {
    fn apply_theme(&self, theme: Theme) {
        let Some(document) = self.window.document() else {
            return;
        };

        if let Some(root) = document.document_element() {
            if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                tracing::warn!("failed to set data-theme: {err:?}");
            }
        }
        if let Some(body) = document.body() {
            body.set_class_name(&theme.body_classes(&body.class_name()));
        }
    }
}

/// A [`PreferenceStorage`] over `window.localStorage`.
pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        self.window.local_storage().ok().flatten()
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_class_is_added_once() {
        assert_eq!(add_class("", LOADED_CLASS), "loaded");
        assert_eq!(add_class("dark-mode", LOADED_CLASS), "dark-mode loaded");
        assert_eq!(add_class("dark-mode loaded", LOADED_CLASS), "dark-mode loaded");
    }

    #[test]
    fn theme_changes_keep_the_loaded_class() {
        let body = add_class(&Theme::Dark.body_classes(""), LOADED_CLASS);
        assert_eq!(Theme::Light.body_classes(&body), "loaded light-mode");
    }

    #[test]
    fn load_time_is_whole_milliseconds() {
        assert_eq!(load_message(412.6), "portfolio loaded in 413ms");
        assert_eq!(load_message(0.0), "portfolio loaded in 0ms");
    }
}
