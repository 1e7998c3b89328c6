//! Country selector with radio-group semantics.
//!
//! The options are not a native exclusive-choice control, so the selector
//! keeps the chosen option itself and derives every marker (the `selected`
//! class, `aria-checked` and the roving `tabindex`) from that one value.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// One option as the page declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    /// Element id, unique within the selector
    pub id: String,
    /// Visible label
    pub label: String,
    /// Whether the initial markup marks this option checked
    #[serde(default)]
    pub checked: bool,
    /// Whether the initial markup puts this option in the tab sequence
    #[serde(default)]
    pub tabbable: bool,
}

impl CountryOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
            tabbable: false,
        }
    }

    /// Mark this option as the markup's initial default.
    pub fn initially_selected(mut self) -> Self {
        self.checked = true;
        self.tabbable = true;
        self
    }
}

/// Markers rendered on an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionMarkers {
    /// Visual `selected` class
    pub selected: bool,
    /// `aria-checked`
    pub checked: bool,
    /// `tabindex`: 0 when reachable with Tab, -1 otherwise
    pub tabindex: i32,
}

impl OptionMarkers {
    fn chosen() -> Self {
        Self {
            selected: true,
            checked: true,
            tabindex: 0,
        }
    }

    fn cleared() -> Self {
        Self {
            selected: false,
            checked: false,
            tabindex: -1,
        }
    }

    pub fn aria_checked(&self) -> &'static str {
        if self.checked {
            "true"
        } else {
            "false"
        }
    }

    /// Class list for an option with the given base class
    pub fn class(&self, base: &str) -> String {
        if self.selected {
            format!("{} selected", base)
        } else {
            base.to_string()
        }
    }
}

/// Keys that activate an option like a click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl ActivationKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(ActivationKey::Enter),
            " " | "Spacebar" => Some(ActivationKey::Space),
            _ => None,
        }
    }
}

/// Ask the host to move input focus to an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    pub option_id: String,
}

/// What a key press on an option did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the key's default action
    pub prevent_default: bool,
    /// Set when the key activated the option
    pub focus: Option<FocusRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    /// No interaction yet; markers come from the markup
    Initial,
    Chosen(usize),
}

/// Single-choice country picker.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySelector {
    options: Vec<CountryOption>,
    selection: Selection,
}

impl CountrySelector {
    pub fn new(options: Vec<CountryOption>) -> Self {
        Self {
            options,
            selection: Selection::Initial,
        }
    }

    pub fn options(&self) -> &[CountryOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether the visitor has picked an option yet
    pub fn has_interaction(&self) -> bool {
        matches!(self.selection, Selection::Chosen(_))
    }

    /// Currently selected option.
    ///
    /// Before any interaction this is the first option the markup marks
    /// checked, if any.
    pub fn selected(&self) -> Option<&CountryOption> {
        match self.selection {
            Selection::Chosen(index) => self.options.get(index),
            Selection::Initial => self.options.iter().find(|option| option.checked),
        }
    }

    /// Markers for the option with this id.
    pub fn markers(&self, id: &str) -> Option<OptionMarkers> {
        let index = self.index_of(id)?;
        Some(self.markers_at(index))
    }

    /// Options paired with their markers, in page order.
    pub fn iter(&self) -> impl Iterator<Item = (&CountryOption, OptionMarkers)> + '_ {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| (option, self.markers_at(index)))
    }

    /// Select an option as a pointer click does.
    pub fn click(&mut self, id: &str) -> PageResult<FocusRequest> {
        let index = self
            .index_of(id)
            .ok_or_else(|| PageError::UnknownOption(id.to_string()))?;

        self.selection = Selection::Chosen(index);
        tracing::debug!(option = %id, "Country selected");

        Ok(FocusRequest {
            option_id: id.to_string(),
        })
    }

    /// Handle a key press on an option.
    ///
    /// Enter and space synthesize a click and suppress the default action
    /// (space would scroll the page). Other keys pass through.
    pub fn key_down(&mut self, id: &str, key: &str) -> PageResult<KeyOutcome> {
        if self.index_of(id).is_none() {
            return Err(PageError::UnknownOption(id.to_string()));
        }

        match ActivationKey::from_key(key) {
            Some(_) => {
                let focus = self.click(id)?;
                Ok(KeyOutcome {
                    prevent_default: true,
                    focus: Some(focus),
                })
            }
            None => Ok(KeyOutcome {
                prevent_default: false,
                focus: None,
            }),
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|option| option.id == id)
    }

    /// Tab stop before any interaction: the option the markup makes
    /// tabbable, else the first one.
    fn initial_tab_stop(&self) -> usize {
        self.options
            .iter()
            .position(|option| option.tabbable)
            .unwrap_or(0)
    }

    fn markers_at(&self, index: usize) -> OptionMarkers {
        match self.selection {
            Selection::Chosen(chosen) if chosen == index => OptionMarkers::chosen(),
            Selection::Chosen(_) => OptionMarkers::cleared(),
            Selection::Initial => {
                let option = &self.options[index];
                OptionMarkers {
                    selected: option.checked,
                    checked: option.checked,
                    tabindex: if index == self.initial_tab_stop() { 0 } else { -1 },
                }
            }
        }
    }
}
