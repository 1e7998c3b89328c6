//! Country Selector Component
//!
//! Radio-group of country options. Markers are rendered from the selector
//! model; Enter and space go through the same click path as the pointer.

use std::collections::HashMap;
use std::rc::Rc;

use contactpage_core::FocusRequest;
use dioxus::prelude::*;

use crate::content::country_flag;
use crate::context::{use_countries, use_page_config};

/// Country picker section
#[component]
pub fn CountryPicker() -> Element {
    let mut countries = use_countries();
    let config = use_page_config();
    let mut mounted: Signal<HashMap<String, Rc<MountedData>>> = use_signal(HashMap::new);

    let option_class = config
        .read()
        .selectors
        .country_option
        .trim_start_matches('.')
        .to_string();

    let focus_option = move |focus: FocusRequest| {
        let handle = mounted.read().get(&focus.option_id).cloned();
        if let Some(handle) = handle {
            spawn(async move {
                if let Err(e) = handle.set_focus(true).await {
                    tracing::debug!("Could not focus {}: {:?}", focus.option_id, e);
                }
            });
        }
    };

    let mut select = move |id: String| match countries.write().click(&id) {
        Ok(focus) => focus_option(focus),
        Err(e) => tracing::warn!("Ignoring click: {}", e),
    };

    let options: Vec<_> = countries
        .read()
        .iter()
        .map(|(option, markers)| (option.clone(), markers))
        .collect();

    rsx! {
        div {
            class: "country-selector",
            role: "radiogroup",
            "aria-label": "País",

            for (option, markers) in options {
                div {
                    key: "{option.id}",
                    id: "{option.id}",
                    class: "{markers.class(&option_class)}",
                    role: "radio",
                    "aria-checked": markers.aria_checked(),
                    tabindex: "{markers.tabindex}",
                    onmounted: {
                        let id = option.id.clone();
                        move |e: MountedEvent| {
                            mounted.write().insert(id.clone(), e.data());
                        }
                    },
                    onclick: {
                        let id = option.id.clone();
                        move |_| select(id.clone())
                    },
                    onkeydown: {
                        let id = option.id.clone();
                        move |e: KeyboardEvent| {
                            // Enter and space go through the selector's click path.
                            let key = e.key().to_string();
                            let outcome = match countries.write().key_down(&id, &key) {
                                Ok(outcome) => outcome,
                                Err(err) => {
                                    tracing::warn!("Ignoring key press: {}", err);
                                    return;
                                }
                            };
                            if outcome.prevent_default {
                                e.prevent_default();
                            }
                            if let Some(focus) = outcome.focus {
                                focus_option(focus);
                            }
                        }
                    },
                    span { class: "country-flag", "{country_flag(&option.id)}" }
                    span { class: "country-name", "{option.label}" }
                }
            }
        }
    }
}
