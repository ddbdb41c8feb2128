//! URL fragment integration.
//!
//! The router keeps the fragment after `#` equal to the current section so the page stays
//! shareable and bookmarkable. It reaches the fragment through a [`HashHistory`], which the
//! browser binary implements on top of `window.location` and tests implement with
//! [`MemoryHashHistory`].

use std::{cell::RefCell, rc::Rc};

/// An integration with a URL fragment and the scroll position of the page it belongs to.
pub trait HashHistory {
    /// Get the current fragment, without the leading `#`.
    ///
    /// ```rust
    /// # use folio::history::{HashHistory, MemoryHashHistory};
    /// let history = MemoryHashHistory::with_initial_fragment("#about");
    /// assert_eq!(history.fragment(), "about");
    /// ```
    #[must_use]
    fn fragment(&self) -> String;

    /// Write a new fragment.
    ///
    /// Writing the fragment that is already current must not create a new history entry.
    fn push_fragment(&self, fragment: &str);

    /// Scroll the page back to the top.
    fn scroll_to_top(&self) {}

    /// Provide the [`HashHistory`] with an update callback.
    ///
    /// Implementations that can observe fragment changes made outside the router (the back and
    /// forward buttons, a hand-edited address bar, an external link) call `callback` after each
    /// one.
    #[allow(unused_variables)]
    fn updater(&self, callback: Rc<dyn Fn()>) {}
}

impl<H: HashHistory + ?Sized> HashHistory for Rc<H> {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn push_fragment(&self, fragment: &str) {
        (**self).push_fragment(fragment)
    }

    fn scroll_to_top(&self) {
        (**self).scroll_to_top()
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        (**self).updater(callback)
    }
}

#[derive(Default)]
struct MemoryHashState {
    current: String,
    history: Vec<String>,
    future: Vec<String>,
    scrolled_to_top: usize,
    updater: Option<Rc<dyn Fn()>>,
}

/// A [`HashHistory`] that stores every fragment in memory.
///
/// Moving back and forward notifies the updater, the way a browser fires `hashchange`. Writes
/// through [`HashHistory::push_fragment`] do not, since they originate from the router itself.
#[derive(Default)]
pub struct MemoryHashHistory {
    state: RefCell<MemoryHashState>,
}

impl MemoryHashHistory {
    /// Create a [`MemoryHashHistory`] starting at `fragment`. A leading `#` is ignored.
    pub fn with_initial_fragment(fragment: impl AsRef<str>) -> Self {
        let fragment = fragment.as_ref();
        Self {
            state: MemoryHashState {
                current: fragment.strip_prefix('#').unwrap_or(fragment).to_string(),
                ..Default::default()
            }
            .into(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    /// Step back one entry, like the browser back button.
    pub fn go_back(&self) {
        let updater = {
            let mut write = self.state.borrow_mut();
            let Some(last) = write.history.pop() else {
                return;
            };
            let old = std::mem::replace(&mut write.current, last);
            write.future.push(old);
            write.updater.clone()
        };

        if let Some(updater) = updater {
            updater();
        }
    }

    /// Step forward one entry, like the browser forward button.
    pub fn go_forward(&self) {
        let updater = {
            let mut write = self.state.borrow_mut();
            let Some(next) = write.future.pop() else {
                return;
            };
            let old = std::mem::replace(&mut write.current, next);
            write.history.push(old);
            write.updater.clone()
        };

        if let Some(updater) = updater {
            updater();
        }
    }

    /// Replace the fragment from outside the router, like editing the address bar.
    pub fn edit_fragment(&self, fragment: &str) {
        self.push_fragment(fragment);
        let updater = self.state.borrow().updater.clone();
        if let Some(updater) = updater {
            updater();
        }
    }

    /// How many times the page was scrolled back to the top.
    pub fn scrolled_to_top(&self) -> usize {
        self.state.borrow().scrolled_to_top
    }
}

impl HashHistory for MemoryHashHistory {
    fn fragment(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn push_fragment(&self, fragment: &str) {
        let mut write = self.state.borrow_mut();
        // assigning the same hash does not add an entry in browsers either
        if write.current == fragment {
            return;
        }
        let old = std::mem::replace(&mut write.current, fragment.to_string());
        write.history.push(old);
        write.future.clear();
    }

    fn scroll_to_top(&self) {
        self.state.borrow_mut().scrolled_to_top += 1;
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        self.state.borrow_mut().updater = Some(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn initial_fragment_drops_hash() {
        let history = MemoryHashHistory::with_initial_fragment("#projects");
        assert_eq!(history.fragment(), "projects");
        assert!(!history.can_go_back());

        assert_eq!(MemoryHashHistory::default().fragment(), "");
    }

    #[test]
    fn back_and_forward() {
        let history = MemoryHashHistory::default();
        history.push_fragment("about");
        history.push_fragment("projects");
        assert!(history.can_go_back());

        history.go_back();
        assert_eq!(history.fragment(), "about");
        assert!(history.can_go_forward());

        history.go_forward();
        assert_eq!(history.fragment(), "projects");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn same_fragment_is_not_pushed_twice() {
        let history = MemoryHashHistory::default();
        history.push_fragment("about");
        history.push_fragment("about");
        history.go_back();
        assert_eq!(history.fragment(), "");
        assert!(!history.can_go_back());
    }

    #[test]
    fn outside_changes_notify_the_updater() {
        let history = MemoryHashHistory::default();
        let calls = Rc::new(Cell::new(0));
        history.updater(Rc::new({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        }));

        history.push_fragment("about");
        assert_eq!(calls.get(), 0);

        history.go_back();
        history.go_forward();
        history.edit_fragment("certifications");
        assert_eq!(calls.get(), 3);

        // nothing to go forward to
        history.go_forward();
        assert_eq!(calls.get(), 3);
    }
}
