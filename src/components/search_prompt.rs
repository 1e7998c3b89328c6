//! Search Prompt Component
//!
//! In-page stand-in for a text prompt. The answer (or the cancellation) is
//! handed to the placeholder search, which logs it and tells the visitor
//! search is not available yet.

use dioxus::prelude::*;

use crate::context::use_search;
use crate::dialogs::DesktopNotifier;

/// Modal asking what the visitor is looking for.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SearchPrompt {
///         show: show_search(),
///         on_close: move |_| show_search.set(false),
///     }
/// }
/// ```
#[component]
pub fn SearchPrompt(
    /// Whether to show the prompt
    show: bool,
    /// Called once the prompt is answered or cancelled
    on_close: EventHandler<()>,
) -> Element {
    let search = use_search();
    let mut term = use_signal(String::new);

    let Some(search) = search.read().clone() else {
        return rsx! {};
    };
    if !show {
        return rsx! {};
    }

    let prompt = search.prompt_message().to_string();

    let mut finish = move |answer: Option<String>| {
        search.submit(answer, &DesktopNotifier);
        term.set(String::new());
        on_close.call(());
    };
    let mut finish_for_keydown = finish.clone();
    let mut finish_for_overlay = finish.clone();
    let mut finish_for_accept = finish.clone();

    let on_keydown = move |e: KeyboardEvent| match e.key() {
        Key::Enter => {
            e.prevent_default();
            finish_for_keydown(Some(term()));
        }
        Key::Escape => finish_for_keydown(None),
        _ => {}
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| finish_for_overlay(None),

            div {
                class: "search-prompt",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                label { class: "search-prompt__label", r#for: "search-term", "{prompt}" }

                input {
                    id: "search-term",
                    class: "search-prompt__input",
                    r#type: "text",
                    value: "{term}",
                    oninput: move |e| term.set(e.value()),
                    onkeydown: on_keydown,
                    autofocus: true,
                }

                div { class: "modal-actions",
                    button {
                        class: "btn-primary",
                        r#type: "button",
                        onclick: move |_| finish_for_accept(Some(term())),
                        "Aceptar"
                    }
                    button {
                        class: "btn-ghost",
                        r#type: "button",
                        onclick: move |_| finish(None),
                        "Cancelar"
                    }
                }
            }
        }
    }
}
