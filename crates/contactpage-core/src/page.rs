//! Page structure and one-shot initialization.

use serde::{Deserialize, Serialize};

use crate::capability::ViewportObserver;
use crate::config::PageConfig;
use crate::contact::ContactForm;
use crate::country::{CountryOption, CountrySelector};
use crate::error::PageResult;
use crate::reveal::RevealAnimator;
use crate::scroll::{NavLink, SmoothScroll};
use crate::search::SearchTrigger;

/// Elements the host page provides, as present when it finished loading.
///
/// Optional elements that are absent simply get no behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRoot {
    /// Whether the page has a contact form
    #[serde(default)]
    pub contact_form: bool,
    #[serde(default)]
    pub country_options: Vec<CountryOption>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    /// Whether the page has a search trigger
    #[serde(default)]
    pub search_button: bool,
    /// Element ids of the cards to reveal on scroll
    #[serde(default)]
    pub cards: Vec<String>,
}

/// The five behaviors wired to a page.
///
/// They share nothing: each field is driven only by its own events.
#[derive(Debug, Clone, PartialEq)]
pub struct Interactions {
    pub contact: Option<ContactForm>,
    pub countries: CountrySelector,
    pub navigator: SmoothScroll,
    pub search: Option<SearchTrigger>,
    pub reveal: RevealAnimator,
}

/// Wire every behavior to the page.
///
/// Called once by the host after the page structure exists. Cards start
/// hidden and are registered with `observer`. Only fragment links are
/// wired for smooth scrolling.
pub fn initialize(
    page: &PageRoot,
    config: &PageConfig,
    observer: &mut impl ViewportObserver,
) -> PageResult<Interactions> {
    config.validate()?;

    let contact = page
        .contact_form
        .then(|| ContactForm::new(&config.messages));
    let search = page
        .search_button
        .then(|| SearchTrigger::new(&config.messages));

    let countries = CountrySelector::new(page.country_options.clone());

    let fragment_links = page
        .nav_links
        .iter()
        .filter(|link| link.is_fragment())
        .cloned()
        .collect();
    let navigator = SmoothScroll::new(fragment_links, config.reserved_fragment.clone());

    let reveal = RevealAnimator::new(page.cards.iter().cloned(), &config.reveal)?;
    reveal.register(observer);

    tracing::info!(
        contact_form = contact.is_some(),
        countries = countries.options().len(),
        nav_links = navigator.links().len(),
        search = search.is_some(),
        cards = page.cards.len(),
        "Page interactions initialized"
    );

    Ok(Interactions {
        contact,
        countries,
        navigator,
        search,
        reveal,
    })
}
