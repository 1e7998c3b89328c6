//! Service Cards Component
//!
//! Grid of service cards that fade in as they scroll into view. Each card's
//! inline style comes from the reveal animator.

use dioxus::prelude::*;

use crate::content::SERVICES;
use crate::context::{use_page_config, use_reveal};

/// Services grid
#[component]
pub fn ServiceCards() -> Element {
    let reveal = use_reveal();
    let config = use_page_config();

    let card_class = config
        .read()
        .selectors
        .cards
        .trim_start_matches('.')
        .to_string();

    let cards: Vec<_> = SERVICES
        .iter()
        .map(|service| {
            let style = reveal
                .read()
                .style(service.id)
                .map(|style| style.to_css())
                .unwrap_or_default();
            (*service, style)
        })
        .collect();

    rsx! {
        div { class: "servicios-grid",
            for (service, style) in cards {
                article {
                    key: "{service.id}",
                    id: "{service.id}",
                    class: "{card_class}",
                    style: "{style}",
                    div { class: "servicio-icon", "{service.icon}" }
                    h3 { class: "servicio-title", "{service.title}" }
                    p { class: "servicio-text", "{service.description}" }
                }
            }
        }
    }
}
