use dioxus::prelude::*;

use ui::views::{provide_locale_resolver, LocalizedGridDemo};

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), same file the desktop build embeds.

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // One resolver (and cache) for the whole session.
    provide_locale_resolver();

    rsx! {
        document::Title { "LocaleGrid" }
        document::Style { "{MAIN_CSS_INLINE}" }

        main { class: "app",
            LocalizedGridDemo {}
        }
    }
}
