//! Interaction context for the contact page.
//!
//! Provides the page config and each wired behavior to the components via
//! use_context. Every behavior sits in its own signal, so an event on one
//! only re-renders the components that read it.
//!
//! ## Usage
//!
//! ```ignore
//! // In the page root
//! provide_interactions(interactions);
//!
//! // In child components
//! let navigator = use_navigator();
//! let links = navigator.read().links().to_vec();
//! ```

use contactpage_core::{
    ContactForm, CountrySelector, Interactions, PageConfig, RevealAnimator, SearchTrigger,
    SmoothScroll,
};
use dioxus::prelude::*;

/// Get the page configuration loaded at startup.
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the page configuration from context.
pub fn use_page_config() -> Signal<PageConfig> {
    use_context::<Signal<PageConfig>>()
}

/// Give each behavior its own signal and provide them all.
///
/// Returns the reveal signal, which the page root feeds with observer
/// batches.
pub fn provide_interactions(interactions: Interactions) -> Signal<RevealAnimator> {
    let Interactions {
        contact,
        countries,
        navigator,
        search,
        reveal,
    } = interactions;

    use_context_provider(|| Signal::new(contact));
    use_context_provider(|| Signal::new(countries));
    use_context_provider(|| Signal::new(navigator));
    use_context_provider(|| Signal::new(search));
    use_context_provider(|| Signal::new(reveal))
}

/// Contact form handler, absent when the page has no form.
pub fn use_contact_form() -> Signal<Option<ContactForm>> {
    use_context::<Signal<Option<ContactForm>>>()
}

pub fn use_countries() -> Signal<CountrySelector> {
    use_context::<Signal<CountrySelector>>()
}

pub fn use_navigator() -> Signal<SmoothScroll> {
    use_context::<Signal<SmoothScroll>>()
}

/// Search trigger, absent when the page has no search button.
pub fn use_search() -> Signal<Option<SearchTrigger>> {
    use_context::<Signal<Option<SearchTrigger>>>()
}

pub fn use_reveal() -> Signal<RevealAnimator> {
    use_context::<Signal<RevealAnimator>>()
}
