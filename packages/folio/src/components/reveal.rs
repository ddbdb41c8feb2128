use dioxus::prelude::*;

use crate::fade::FadeIn;

/// A handle to an element's one-shot fade-in state.
#[derive(Clone, Copy)]
pub struct UseFadeIn {
    fade: Signal<FadeIn>,
}

impl UseFadeIn {
    /// The fade class to add to the element, empty until it has been seen.
    pub fn class(&self) -> &'static str {
        self.fade.read().class()
    }

    /// Feed an `onvisible` event. Only the first intersecting event writes.
    pub fn observe(mut self, event: Event<VisibleData>) {
        let intersecting = event.data().is_intersecting().unwrap_or(false);
        let mut fade = *self.fade.peek();
        if fade.observe(intersecting) {
            self.fade.set(fade);
        }
    }
}

pub fn use_fade_in() -> UseFadeIn {
    UseFadeIn {
        fade: use_signal(FadeIn::default),
    }
}

/// A block that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(class: String, children: Element) -> Element {
    let fade = use_fade_in();
    let class = format!("{class} {}", fade.class());

    rsx! {
        div {
            class: "{class.trim_end()}",
            onvisible: move |event| fade.observe(event),
            {children}
        }
    }
}
