use dioxus::prelude::*;

use super::SiteState;
use crate::{config::SiteConfig, host::Platform};

/// The decorative terminal in the hero. Types the configured commands for as long as the page
/// is open.
#[component]
pub fn Terminal() -> Element {
    let state = use_context::<SiteState>();
    let platform = use_context::<Platform>();
    let config = use_context::<SiteConfig>();
    let mut typed = use_signal(String::new);

    use_future(move || {
        let page = platform.page.clone();
        let start = config.terminal.start_delay();
        let mut typer = state.typer;
        async move {
            page.sleep(start).await;
            loop {
                let Some(frame) = typer.write().tick() else {
                    tracing::debug!("no terminal commands configured");
                    break;
                };
                typed.set(frame.text);
                page.sleep(frame.delay).await;
            }
        }
    });

    rsx! {
        div { class: "terminal",
            div { class: "terminal-header",
                span { class: "terminal-dot red" }
                span { class: "terminal-dot yellow" }
                span { class: "terminal-dot green" }
                span { class: "terminal-title", "bash" }
            }
            div { class: "terminal-body",
                span { class: "prompt", "$ " }
                span { class: "typing", "{typed}" }
                span { class: "cursor", "▋" }
            }
        }
    }
}
