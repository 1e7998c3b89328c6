use contactpage_core::{initialize, Interactions};
use dioxus::prelude::*;

use crate::bridge::ScriptObserver;
use crate::content::page_root;
use crate::context::{get_page_config, provide_interactions};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Wires the interactions once, provides them and the config to every
/// component, and forwards intersection batches to the reveal animator.
#[component]
pub fn App() -> Element {
    let config = use_signal(get_page_config);
    use_context_provider(|| config);

    let wired = use_hook(|| {
        let mut observer = ScriptObserver::default();
        initialize(&page_root(), &config.peek(), &mut observer)
            .map(|interactions| (interactions, observer))
            .map_err(|e| e.to_string())
    });

    let (interactions, observer) = match wired {
        Ok(wired) => wired,
        Err(e) => {
            tracing::error!("Failed to initialize page interactions: {}", e);
            return rsx! {
                style { {GLOBAL_STYLES} }
                main { class: "init-error", "No se pudo cargar la página: {e}" }
            };
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        InteractivePage { interactions, observer }
    }
}

/// Page with live interactions.
#[component]
fn InteractivePage(interactions: Interactions, observer: ScriptObserver) -> Element {
    let mut reveal = provide_interactions(interactions);

    // Install the page-side observer once the cards are rendered.
    use_effect(move || {
        let observer = observer.clone();
        spawn(async move {
            let mut feed = match observer.start() {
                Ok(Some(feed)) => feed,
                Ok(None) => return,
                Err(e) => {
                    tracing::error!("Failed to start intersection observer: {}", e);
                    return;
                }
            };
            loop {
                match feed.next_batch().await {
                    Ok(batch) => {
                        reveal.write().apply(batch);
                    }
                    Err(e) => {
                        tracing::warn!("Stopped revealing cards: {}", e);
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        Home {}
    }
}
