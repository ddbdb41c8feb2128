//! Run with:
//!
//! ```sh
//! dx serve --platform web
//! ```

use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;
use folio::prelude::*;

mod host;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    let platform = use_hook(host::platform);
    let config = use_hook(|| {
        let config = SiteConfig::embedded();
        info!("welcome to the portfolio of {} ({})", config.owner, config.role);
        info!("source: {}", config.github);
        config
    });

    rsx! {
        document::Stylesheet { href: FONT_AWESOME }
        document::Stylesheet { href: MAIN_CSS }
        App { platform, config }
    }
}
