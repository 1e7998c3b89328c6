//! Contact form handling.
//!
//! Submission is simulated: the four required fields are validated, the
//! visitor is notified, and on success the form is cleared. Nothing is sent
//! anywhere.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capability::{Notice, Notifier};
use crate::config::Messages;

/// Kind of form control a field is rendered with.
///
/// Controls sanitize their value before scripts see it, so an empty check
/// has to go through the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl InputKind {
    /// Value as the control reports it.
    ///
    /// Single-line controls strip line breaks; email additionally strips
    /// leading and trailing whitespace. Textareas report the raw value.
    pub fn sanitize(self, raw: &str) -> String {
        match self {
            InputKind::TextArea => raw.to_string(),
            InputKind::Text | InputKind::Tel => strip_line_breaks(raw),
            InputKind::Email => strip_line_breaks(raw)
                .trim_matches(|c: char| c.is_ascii_whitespace())
                .to_string(),
        }
    }

    /// HTML `type` attribute (textareas have none)
    pub fn html_type(self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Tel => Some("tel"),
            InputKind::TextArea => None,
        }
    }
}

fn strip_line_breaks(raw: &str) -> String {
    raw.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// One of the four required contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// All required fields, in form order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn kind(self) -> InputKind {
        match self {
            ContactField::Name => InputKind::Text,
            ContactField::Email => InputKind::Email,
            ContactField::Phone => InputKind::Tel,
            ContactField::Message => InputKind::TextArea,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::Name => write!(f, "name"),
            ContactField::Email => write!(f, "email"),
            ContactField::Phone => write!(f, "phone"),
            ContactField::Message => write!(f, "message"),
        }
    }
}

/// Current raw values of the contact form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn raw(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Value as the control would report it at submit time
    pub fn value(&self, field: ContactField) -> String {
        field.kind().sanitize(self.raw(field))
    }

    /// Required fields whose reported value is empty
    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    /// Back to the empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
    }
}

/// Result of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field was empty; the form was left as is
    Incomplete { missing: Vec<ContactField> },
    /// All fields present; the send was simulated and the form cleared
    Sent,
}

impl SubmitOutcome {
    /// The host always suppresses native submission.
    pub fn prevents_default(&self) -> bool {
        true
    }
}

/// Submission handler for the contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    incomplete: String,
    thanks: String,
}

impl ContactForm {
    pub fn new(messages: &Messages) -> Self {
        Self {
            incomplete: messages.incomplete.clone(),
            thanks: messages.thanks.clone(),
        }
    }

    /// Validate and "send" the form.
    ///
    /// The notifier is called exactly once, before the form is cleared.
    pub fn submit(&self, fields: &mut ContactFields, notifier: &impl Notifier) -> SubmitOutcome {
        let missing = fields.missing();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Contact form incomplete");
            notifier.notify(Notice::Error, &self.incomplete);
            return SubmitOutcome::Incomplete { missing };
        }

        notifier.notify(Notice::Info, &self.thanks);
        fields.reset();
        tracing::debug!("Contact form submission simulated");
        SubmitOutcome::Sent
    }
}
