//! The page the site runs in.
//!
//! Everything the components need from the browser beyond the URL fragment and storage goes
//! through [`PageHost`]. [`Platform`] bundles one implementation of each host trait so the whole
//! set can be handed to the app at once.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use futures_util::future::{self, FutureExt, LocalBoxFuture};

use crate::{
    history::{HashHistory, MemoryHashHistory},
    storage::{MemoryStorage, PreferenceStorage},
    theme::{Theme, ThemeTarget},
};

/// A signal from the page that the site reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// The URL fragment changed outside the router.
    HashChanged,
    /// The page scrolled; carries the new vertical offset.
    Scrolled(f64),
    /// The Escape key was pressed anywhere on the page.
    Escape,
}

pub trait PageHost {
    /// The current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Open `url` in a new tab.
    fn open_external(&self, url: &str);

    /// Resolve after `duration`.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;

    /// Deliver scroll and key signals to `sink` from now on.
    #[allow(unused_variables)]
    fn listen(&self, sink: Rc<dyn Fn(HostEvent)>) {}
}

/// A [`PageHost`] for tests.
///
/// Timers never fire, so anything driven by [`PageHost::sleep`] stays at its first frame.
#[derive(Default)]
pub struct MemoryPage {
    offset: Cell<f64>,
    opened: RefCell<Vec<String>>,
    theme: Cell<Option<Theme>>,
    sink: RefCell<Option<Rc<dyn Fn(HostEvent)>>>,
}

impl MemoryPage {
    pub fn scrolled_to(offset: f64) -> Self {
        let page = Self::default();
        page.offset.set(offset);
        page
    }

    /// Scroll the page and notify the listener.
    pub fn scroll_to(&self, offset: f64) {
        self.offset.set(offset);
        self.emit(HostEvent::Scrolled(offset));
    }

    pub fn press_escape(&self) {
        self.emit(HostEvent::Escape);
    }

    /// Every URL passed to [`PageHost::open_external`], in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    /// The theme most recently applied to the page.
    pub fn applied_theme(&self) -> Option<Theme> {
        self.theme.get()
    }

    fn emit(&self, event: HostEvent) {
        let sink = self.sink.borrow().clone();
        if let Some(sink) = sink {
            sink(event);
        }
    }
}

impl PageHost for MemoryPage {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn open_external(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }

    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        future::pending().boxed_local()
    }

    fn listen(&self, sink: Rc<dyn Fn(HostEvent)>) {
        *self.sink.borrow_mut() = Some(sink);
    }
}

impl ThemeTarget for MemoryPage {
    fn apply_theme(&self, theme: Theme) {
        self.theme.set(Some(theme));
    }
}

/// One implementation of every host trait.
#[derive(Clone)]
pub struct Platform {
    pub history: Rc<dyn HashHistory>,
    pub storage: Rc<dyn PreferenceStorage>,
    pub page: Rc<dyn PageHost>,
    pub theme: Rc<dyn ThemeTarget>,
}

impl Platform {
    /// A platform backed entirely by memory.
    pub fn memory(
        history: Rc<MemoryHashHistory>,
        storage: Rc<MemoryStorage>,
        page: Rc<MemoryPage>,
    ) -> Self {
        Self {
            history,
            storage,
            theme: page.clone(),
            page,
        }
    }
}

// Two platforms are the same when they share every backend.
impl PartialEq for Platform {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.history, &other.history)
            && Rc::ptr_eq(&self.storage, &other.storage)
            && Rc::ptr_eq(&self.page, &other.page)
            && Rc::ptr_eq(&self.theme, &other.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_page_forwards_events() {
        let page = MemoryPage::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        page.listen(Rc::new({
            let seen = seen.clone();
            move |event| seen.borrow_mut().push(event)
        }));

        page.scroll_to(120.0);
        page.press_escape();

        assert_eq!(page.scroll_offset(), 120.0);
        assert_eq!(
            *seen.borrow(),
            vec![HostEvent::Scrolled(120.0), HostEvent::Escape]
        );
    }

    #[test]
    fn platforms_compare_by_identity() {
        let history = Rc::new(MemoryHashHistory::default());
        let storage = Rc::new(MemoryStorage::default());
        let page = Rc::new(MemoryPage::default());

        let a = Platform::memory(history.clone(), storage.clone(), page.clone());
        let b = Platform::memory(history, storage, page);
        let c = Platform::memory(
            Rc::new(MemoryHashHistory::default()),
            Rc::new(MemoryStorage::default()),
            Rc::new(MemoryPage::default()),
        );

        assert!(a == b);
        assert!(a != c);
    }
}
