//! Site Header Component
//!
//! Fixed header with the brand, the in-page navigation and the search icon.
//! Fragment links scroll smoothly below the header; the language switcher
//! link is left to its default behavior.

use contactpage_core::LinkDisposition;
use dioxus::prelude::*;

use crate::bridge;
use crate::components::SearchPrompt;
use crate::content::SITE_NAME;
use crate::context::{use_navigator, use_page_config, use_search};

/// Fixed site header
#[component]
pub fn SiteHeader() -> Element {
    let navigator = use_navigator();
    let search = use_search();
    let config = use_page_config();
    let mut show_search = use_signal(|| false);

    let links = navigator.read().links().to_vec();
    let has_search = search.read().is_some();

    let on_link_click = move |href: String, e: MouseEvent| {
        let navigator = navigator.read().clone();
        let disposition = navigator.classify(&href);
        if disposition.prevents_default() {
            e.prevent_default();
        }
        let LinkDisposition::Intercept { target_id } = disposition else {
            return;
        };

        let header_selector = config.read().selectors.header.clone();
        spawn(async move {
            let layout = match bridge::measure_layout(&target_id, &header_selector).await {
                Ok(layout) => layout,
                Err(e) => {
                    tracing::warn!("Failed to measure layout for #{}: {}", target_id, e);
                    return;
                }
            };
            if let Some(request) = navigator.resolve(&target_id, &layout) {
                if let Err(e) = bridge::scroll_window(request).await {
                    tracing::warn!("Failed to scroll to #{}: {}", target_id, e);
                }
            }
        });
    };

    rsx! {
        header { class: "header",
            div { class: "header-inner",
                a { class: "brand", href: "#inicio",
                    onclick: move |e| on_link_click("#inicio".to_string(), e),
                    "{SITE_NAME}"
                }

                nav { class: "nav",
                    for link in links {
                        a {
                            key: "{link.href}",
                            href: "{link.href}",
                            class: if link.href == config.read().reserved_fragment { "nav-link lang-switch" } else { "nav-link" },
                            onclick: {
                                let href = link.href.clone();
                                move |e| on_link_click(href.clone(), e)
                            },
                            "{link.label}"
                        }
                    }
                }

                if has_search {
                    button {
                        class: "icon-search",
                        r#type: "button",
                        "aria-label": "Buscar",
                        onclick: move |_| show_search.set(true),
                        "\u{1F50D}"
                    }
                }
            }
        }

        SearchPrompt {
            show: show_search(),
            on_close: move |_| show_search.set(false),
        }
    }
}
