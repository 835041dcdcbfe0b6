use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{platform, sample};
use crate::grid::DataGrid;
use crate::locale::{AppResolver, EmbeddedLocales, LocaleTag, ResolverConfig};

use super::controller::{ViewController, ViewState};

/// Install the session-wide resolver (and its cache) for every
/// `LocalizedGridDemo` below this component. Call once from the app root.
pub fn provide_locale_resolver() -> Rc<AppResolver> {
    use_context_provider(|| Rc::new(AppResolver::new(EmbeddedLocales, ResolverConfig::default())))
}

#[component]
pub fn LocalizedGridDemo() -> Element {
    let resolver = use_context::<Rc<AppResolver>>();
    let tag: LocaleTag = use_hook(platform::preferred_language);
    let mut state = use_signal(|| ViewState::Loading);

    // Resolution runs once per mount; re-renders never restart it.
    use_hook(|| {
        let tag = tag.clone();
        spawn(async move {
            ViewController::mount(&*resolver, &tag, |next| state.set(next.clone())).await;
        });
    });

    let detected = tag.to_string();

    match state() {
        ViewState::Loading => rsx! {
            div { class: "grid-demo__loading", role: "progressbar", "aria-busy": "true",
                span { class: "grid-demo__spinner" }
                span { class: "grid-demo__loading-label", {crate::t!("grid-demo-loading")} }
            }
        },
        ViewState::Error(message) => rsx! {
            section { class: "page grid-demo",
                h1 { {crate::t!("grid-demo-title")} }
                div { class: "grid-demo__error", role: "alert",
                    p { {crate::t!("grid-demo-error")} }
                    p { class: "grid-demo__error-detail", "{message}" }
                }
            }
        },
        ViewState::Ready(bundle) => rsx! {
            section { class: "page grid-demo",
                h1 { {crate::t!("grid-demo-title")} }
                p { class: "grid-demo__intro",
                    {crate::t!("grid-demo-description", lang = detected.as_str())}
                }
                div { class: "grid-demo__frame",
                    DataGrid {
                        columns: sample::columns(),
                        rows: sample::rows(),
                        locale_text: bundle,
                        pagination: sample::initial_pagination(),
                        page_size_options: sample::PAGE_SIZE_OPTIONS.to_vec(),
                    }
                }
            }
        },
    }
}
