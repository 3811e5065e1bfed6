use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::logging;
use ui::{i18n, Dashboard, THEME_CSS};

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global language code; AppNavbar updates it, views subscribe to it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Pulseboard" }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        AppNavbar {}
        main { Dashboard {} }
    }
}
