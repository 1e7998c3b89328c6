//! Property-based tests for the contact form and the country selector
//!
//! Uses proptest to check the form's all-or-nothing validation and the
//! selector's single-selection invariant over arbitrary inputs.

use std::cell::RefCell;

use contactpage_core::{
    ContactFields, ContactForm, CountryOption, CountrySelector, LayoutSnapshot, LinkAction,
    Messages, NavLink, Notice, Notifier, SmoothScroll, SubmitOutcome,
};
use proptest::prelude::*;

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<(Notice, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: Notice, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_string()));
    }
}

// ============================================================================
// Strategy Generators
// ============================================================================

/// Values every control reports as non-empty
fn filled_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@.+áéíóúñ]{1,40}( [a-zA-Z0-9]{1,10})?")
        .expect("valid regex")
}

/// A field that is either filled or empty
fn maybe_filled_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), filled_value_strategy()]
}

const OPTION_COUNT: usize = 6;

fn selector() -> CountrySelector {
    CountrySelector::new(
        (0..OPTION_COUNT)
            .map(|i| {
                let option = CountryOption::new(format!("pais-{i}"), format!("País {i}"));
                if i == 0 {
                    option.initially_selected()
                } else {
                    option
                }
            })
            .collect(),
    )
}

/// Interactions with the selector: click, or a key press
#[derive(Debug, Clone)]
enum OptionOp {
    Click(usize),
    Key(usize, &'static str),
}

fn option_ops_strategy() -> impl Strategy<Value = Vec<OptionOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..OPTION_COUNT).prop_map(OptionOp::Click),
            1 => (0..OPTION_COUNT, prop_oneof![Just("Enter"), Just(" "), Just("a"), Just("Tab")])
                .prop_map(|(i, key)| OptionOp::Key(i, key)),
        ],
        1..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any empty field blocks the send and leaves every field untouched
    #[test]
    fn incomplete_form_is_never_cleared(
        name in maybe_filled_strategy(),
        email in maybe_filled_strategy(),
        phone in maybe_filled_strategy(),
        message in maybe_filled_strategy(),
    ) {
        prop_assume!(name.is_empty() || email.is_empty() || phone.is_empty() || message.is_empty());

        let form = ContactForm::new(&Messages::default());
        let notifier = RecordingNotifier::default();
        let mut fields = ContactFields::new(name, email, phone, message);
        let before = fields.clone();

        let outcome = form.submit(&mut fields, &notifier);

        prop_assert!(matches!(outcome, SubmitOutcome::Incomplete { .. }), "outcome was Sent");
        prop_assert_eq!(fields, before);
        let notices = notifier.notices.borrow();
        prop_assert_eq!(notices.len(), 1);
        prop_assert_eq!(notices[0].0, Notice::Error);
        prop_assert_eq!(notices[0].1.as_str(), "Por favor, completa todos los campos");
    }

    /// Four filled fields are always sent and cleared
    #[test]
    fn complete_form_is_always_cleared(
        name in filled_value_strategy(),
        email in filled_value_strategy(),
        phone in filled_value_strategy(),
        message in filled_value_strategy(),
    ) {
        let form = ContactForm::new(&Messages::default());
        let notifier = RecordingNotifier::default();
        let mut fields = ContactFields::new(name, email, phone, message);

        let outcome = form.submit(&mut fields, &notifier);

        prop_assert_eq!(outcome, SubmitOutcome::Sent);
        prop_assert!(fields.is_empty());
        let notices = notifier.notices.borrow();
        prop_assert_eq!(notices.len(), 1);
        prop_assert_eq!(notices[0].0, Notice::Info);
    }

    /// After every activation exactly one option is selected and tabbable,
    /// and it is the most recently activated one
    #[test]
    fn selection_is_single_valued(ops in option_ops_strategy()) {
        let mut selector = selector();
        let mut last: Option<String> = None;

        for op in ops {
            match op {
                OptionOp::Click(i) => {
                    let id = format!("pais-{i}");
                    let focus = selector.click(&id).unwrap();
                    prop_assert_eq!(&focus.option_id, &id);
                    last = Some(id);
                }
                OptionOp::Key(i, key) => {
                    let id = format!("pais-{i}");
                    let outcome = selector.key_down(&id, key).unwrap();
                    let activates = key == "Enter" || key == " ";
                    prop_assert_eq!(outcome.prevent_default, activates);
                    if activates {
                        last = Some(id);
                    }
                }
            }

            if let Some(expected) = &last {
                let selected: Vec<_> = selector
                    .iter()
                    .filter(|(_, m)| m.selected || m.checked)
                    .map(|(o, _)| o.id.clone())
                    .collect();
                let tabbable: Vec<_> = selector
                    .iter()
                    .filter(|(_, m)| m.tabindex == 0)
                    .map(|(o, _)| o.id.clone())
                    .collect();
                prop_assert_eq!(&selected, &vec![expected.clone()]);
                prop_assert_eq!(&tabbable, &vec![expected.clone()]);
            }
        }
    }

    /// Activating an option by key leaves the same state as clicking it
    #[test]
    fn key_activation_equals_click(
        ops in option_ops_strategy(),
        target in 0..OPTION_COUNT,
        space in any::<bool>(),
    ) {
        let mut base = selector();
        for op in ops {
            match op {
                OptionOp::Click(i) => { base.click(&format!("pais-{i}")).unwrap(); }
                OptionOp::Key(i, key) => { base.key_down(&format!("pais-{i}"), key).unwrap(); }
            }
        }

        let id = format!("pais-{target}");
        let mut clicked = base.clone();
        clicked.click(&id).unwrap();
        let mut keyed = base;
        let outcome = keyed.key_down(&id, if space { " " } else { "Enter" }).unwrap();

        prop_assert!(outcome.prevent_default);
        prop_assert_eq!(keyed, clicked);
    }

    /// Existing targets land exactly one header height above their offset
    #[test]
    fn scroll_target_is_offset_by_header(
        offset_top in 0.0f64..20_000.0,
        header_height in 0.0f64..300.0,
        id in "[a-z]{1,12}",
    ) {
        prop_assume!(id != "lang");
        let navigator = SmoothScroll::new(vec![NavLink::new(format!("#{id}"), "x")], "#lang");
        let layout = LayoutSnapshot::new(header_height).with_section(id.clone(), offset_top);

        match navigator.on_click(&format!("#{id}"), &layout) {
            LinkAction::ScrollTo(request) => {
                prop_assert_eq!(request.top, offset_top - header_height);
            }
            other => prop_assert!(false, "unexpected action {:?}", other),
        }

        let missing = LayoutSnapshot::new(header_height);
        prop_assert_eq!(navigator.on_click(&format!("#{id}"), &missing), LinkAction::Suppressed);
    }
}
