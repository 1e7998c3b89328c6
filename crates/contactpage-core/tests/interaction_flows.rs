//! End-to-end flows through `initialize` with fake host capabilities.
//!
//! Each test wires a full page and drives one behavior the way the desktop
//! shell does, checking what the visitor would see.

use std::cell::RefCell;
use std::collections::VecDeque;

use contactpage_core::{
    initialize, CardVisibility, ContactFields, CountryOption, IntersectionEntry, Interactions,
    LayoutSnapshot, LinkAction, NavLink, Notice, Notifier, ObserverOptions, PageConfig,
    PageRoot, Prompter, Rect, ScrollBehavior, ScrollRequest, SearchOutcome, SubmitOutcome,
    ViewportObserver,
};

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
struct FakeDialogs {
    notices: RefCell<Vec<(Notice, String)>>,
    answers: RefCell<VecDeque<Option<String>>>,
    prompts: RefCell<Vec<String>>,
}

impl FakeDialogs {
    fn answering(answers: &[Option<&str>]) -> Self {
        let dialogs = Self::default();
        dialogs
            .answers
            .borrow_mut()
            .extend(answers.iter().map(|a| a.map(str::to_string)));
        dialogs
    }

    fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|(_, m)| m.clone()).collect()
    }
}

impl Notifier for FakeDialogs {
    fn notify(&self, kind: Notice, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_string()));
    }
}

impl Prompter for FakeDialogs {
    fn prompt_text(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().flatten()
    }
}

/// Observer backed by fixed card geometry; scrolling produces entry batches.
#[derive(Default)]
struct FakeViewport {
    cards: Vec<(String, Rect)>,
    options: Option<ObserverOptions>,
}

impl FakeViewport {
    fn with_card(mut self, id: &str, rect: Rect) -> Self {
        self.cards.push((id.to_string(), rect));
        self
    }

    /// Entries for a viewport scrolled to `scroll_y`.
    fn scroll_to(&self, scroll_y: f64) -> Vec<IntersectionEntry> {
        let options = self.options.expect("cards registered");
        let viewport = Rect::new(scroll_y, 0.0, 1280.0, 800.0);
        self.cards
            .iter()
            .map(|(id, rect)| options.evaluate(id, *rect, viewport))
            .collect()
    }
}

impl ViewportObserver for FakeViewport {
    fn observe(&mut self, target: &str, options: &ObserverOptions) {
        assert!(
            self.cards.iter().any(|(id, _)| id == target),
            "observed unknown card {target}"
        );
        self.options = Some(*options);
    }
}

fn page() -> PageRoot {
    PageRoot {
        contact_form: true,
        country_options: vec![
            CountryOption::new("pais-es", "España").initially_selected(),
            CountryOption::new("pais-mx", "México"),
            CountryOption::new("pais-co", "Colombia"),
        ],
        nav_links: vec![
            NavLink::new("#servicios", "Servicios"),
            NavLink::new("#paises", "Países"),
            NavLink::new("#contacto", "Contacto"),
            NavLink::new("#lang", "ES"),
        ],
        search_button: true,
        cards: vec!["card-web".to_string(), "card-apps".to_string()],
    }
}

fn viewport() -> FakeViewport {
    FakeViewport::default()
        .with_card("card-web", Rect::new(900.0, 100.0, 300.0, 200.0))
        .with_card("card-apps", Rect::new(1900.0, 100.0, 300.0, 200.0))
}

fn init(observer: &mut FakeViewport) -> Interactions {
    initialize(&page(), &PageConfig::default(), observer).unwrap()
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn filled_form_is_thanked_and_cleared() {
    let mut observer = viewport();
    let interactions = init(&mut observer);
    let dialogs = FakeDialogs::default();
    let form = interactions.contact.as_ref().unwrap();

    let mut fields = ContactFields::new(
        "María López",
        "maria@example.com",
        "+34 600 000 000",
        "Quisiera un presupuesto.",
    );
    let outcome = form.submit(&mut fields, &dialogs);

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert!(outcome.prevents_default());
    assert_eq!(fields, ContactFields::default());
    assert_eq!(
        dialogs.messages(),
        vec!["¡Gracias por contactarnos! Nos pondremos en contacto contigo pronto.".to_string()]
    );
}

#[test]
fn incomplete_form_can_be_corrected() {
    let mut observer = viewport();
    let interactions = init(&mut observer);
    let dialogs = FakeDialogs::default();
    let form = interactions.contact.as_ref().unwrap();

    let mut fields = ContactFields::new("María", "maria@example.com", "", "Hola");
    assert!(matches!(
        form.submit(&mut fields, &dialogs),
        SubmitOutcome::Incomplete { .. }
    ));
    assert_eq!(fields.name, "María");

    fields.phone = "600000000".to_string();
    assert_eq!(form.submit(&mut fields, &dialogs), SubmitOutcome::Sent);

    let notices = dialogs.notices.borrow();
    assert_eq!(notices[0].0, Notice::Error);
    assert_eq!(notices[1].0, Notice::Info);
}

// ============================================================================
// Country selector
// ============================================================================

#[test]
fn keyboard_and_pointer_selection_agree() {
    let mut observer = viewport();
    let mut by_click = init(&mut observer).countries;
    let mut by_key = by_click.clone();

    by_click.click("pais-co").unwrap();
    let outcome = by_key.key_down("pais-co", " ").unwrap();

    assert!(outcome.prevent_default);
    assert_eq!(by_key, by_click);
    assert_eq!(by_key.selected().unwrap().id, "pais-co");
    let tabbable: Vec<_> = by_key
        .iter()
        .filter(|(_, m)| m.tabindex == 0)
        .map(|(o, _)| o.id.clone())
        .collect();
    assert_eq!(tabbable, vec!["pais-co".to_string()]);
}

// ============================================================================
// Smooth scroll
// ============================================================================

#[test]
fn nav_links_scroll_below_header() {
    let mut observer = viewport();
    let navigator = init(&mut observer).navigator;
    let layout = LayoutSnapshot::new(72.0)
        .with_section("servicios", 720.0)
        .with_section("contacto", 2400.0);

    assert_eq!(
        navigator.on_click("#contacto", &layout),
        LinkAction::ScrollTo(ScrollRequest {
            top: 2328.0,
            behavior: ScrollBehavior::Smooth
        })
    );
    assert_eq!(navigator.on_click("#paises", &layout), LinkAction::Suppressed);
    assert_eq!(navigator.on_click("#lang", &layout), LinkAction::PassThrough);
}

#[test]
fn custom_reserved_fragment_is_honored() {
    let config = PageConfig::from_json_str(r##"{ "reserved_fragment": "#idioma" }"##).unwrap();
    let mut observer = viewport();
    let navigator = initialize(&page(), &config, &mut observer).unwrap().navigator;
    let layout = LayoutSnapshot::new(72.0);

    assert_eq!(navigator.on_click("#idioma", &layout), LinkAction::PassThrough);
    assert_eq!(navigator.on_click("#lang", &layout), LinkAction::Suppressed);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn search_prompts_and_reports() {
    let mut observer = viewport();
    let interactions = init(&mut observer);
    let search = interactions.search.as_ref().unwrap();
    let dialogs = FakeDialogs::answering(&[Some("tiendas online"), None]);

    assert_eq!(
        search.activate(&dialogs, &dialogs),
        SearchOutcome::Reported {
            term: "tiendas online".to_string()
        }
    );
    assert_eq!(search.activate(&dialogs, &dialogs), SearchOutcome::Cancelled);

    assert_eq!(dialogs.prompts.borrow().len(), 2);
    assert_eq!(
        dialogs.messages(),
        vec!["Funcionalidad de búsqueda en desarrollo".to_string()]
    );
}

// ============================================================================
// Scroll reveal
// ============================================================================

#[test]
fn cards_reveal_as_they_scroll_in_and_stay_revealed() {
    let mut observer = viewport();
    let mut interactions = init(&mut observer);
    let reveal = &mut interactions.reveal;

    assert_eq!(reveal.style("card-web").unwrap().opacity, 0.0);
    assert_eq!(reveal.style("card-web").unwrap().translate_y_px, 20.0);

    // card-web: 900..1100, adjusted viewport 0..700
    assert!(reveal.apply(observer.scroll_to(0.0)).is_empty());

    // adjusted viewport 300..1000: 100 of 200px visible
    assert_eq!(reveal.apply(observer.scroll_to(300.0)), vec!["card-web"]);
    let style = reveal.style("card-web").unwrap();
    assert_eq!((style.opacity, style.translate_y_px), (1.0, 0.0));
    assert_eq!(style.transition_secs, 0.6);

    // scrolled far past card-web; card-apps (1900..2100) now visible
    let revealed = reveal.apply(observer.scroll_to(1600.0));
    assert_eq!(revealed, vec!["card-apps"]);
    assert_eq!(reveal.visibility("card-web"), Some(CardVisibility::Revealed));

    // back to the top: nothing re-hides
    reveal.apply(observer.scroll_to(0.0));
    assert_eq!(reveal.revealed_count(), 2);
}
