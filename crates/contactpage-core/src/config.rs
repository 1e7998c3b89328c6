//! Page configuration: visitor-facing strings, host-page selectors and
//! reveal tuning.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides:
//!
//! ```json
//! { "reserved_fragment": "#idioma", "reveal": { "threshold": 0.25 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::reveal::{ObserverOptions, RootMargin};

/// Visitor-facing strings (single fixed locale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown when a required contact field is empty
    pub incomplete: String,
    /// Shown after the simulated send
    pub thanks: String,
    /// Search prompt text
    pub search_prompt: String,
    /// Shown after a search term was entered
    pub search_pending: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            incomplete: "Por favor, completa todos los campos".to_string(),
            thanks: "¡Gracias por contactarnos! Nos pondremos en contacto contigo pronto."
                .to_string(),
            search_prompt: "¿Qué estás buscando?".to_string(),
            search_pending: "Funcionalidad de búsqueda en desarrollo".to_string(),
        }
    }
}

/// CSS selectors the host page is expected to provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub contact_form: String,
    pub country_option: String,
    pub nav_links: String,
    pub header: String,
    pub search: String,
    pub cards: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            contact_form: ".contact-form".to_string(),
            country_option: ".country-option".to_string(),
            nav_links: ".nav a[href^=\"#\"]".to_string(),
            header: ".header".to_string(),
            search: ".icon-search".to_string(),
            cards: ".servicio-card".to_string(),
        }
    }
}

/// Element ids of the four required contact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            name: "nombre".to_string(),
            email: "email".to_string(),
            phone: "telefono".to_string(),
            message: "mensaje".to_string(),
        }
    }
}

/// Scroll-reveal tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a card's area that must be visible
    pub threshold: f64,
    /// CSS margin shorthand applied to the viewport
    pub root_margin: String,
    /// Vertical offset of a hidden card, in px
    pub hidden_offset_px: f64,
    /// Duration of the opacity and transform transitions, in seconds
    pub transition_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            hidden_offset_px: 20.0,
            transition_secs: 0.6,
        }
    }
}

impl RevealConfig {
    /// Observer options built from this config.
    pub fn observer_options(&self) -> PageResult<ObserverOptions> {
        let root_margin: RootMargin = self.root_margin.parse()?;
        Ok(ObserverOptions {
            threshold: self.threshold,
            root_margin,
        })
    }
}

/// Complete configuration of the interaction layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub messages: Messages,
    pub selectors: Selectors,
    pub field_ids: FieldIds,
    /// Fragment left to the language switcher, matched literally
    pub reserved_fragment: String,
    pub reveal: RevealConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            selectors: Selectors::default(),
            field_ids: FieldIds::default(),
            reserved_fragment: "#lang".to_string(),
            reveal: RevealConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> PageResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded page config");
        Ok(config)
    }

    /// Reject values the interaction layer cannot work with.
    pub fn validate(&self) -> PageResult<()> {
        let reveal = &self.reveal;
        if !(0.0..=1.0).contains(&reveal.threshold) {
            return Err(PageError::InvalidConfig(format!(
                "reveal.threshold must be within [0, 1], got {}",
                reveal.threshold
            )));
        }
        if !(reveal.transition_secs > 0.0) {
            return Err(PageError::InvalidConfig(format!(
                "reveal.transition_secs must be positive, got {}",
                reveal.transition_secs
            )));
        }
        if !reveal.hidden_offset_px.is_finite() {
            return Err(PageError::InvalidConfig(
                "reveal.hidden_offset_px must be finite".to_string(),
            ));
        }
        reveal.root_margin.parse::<RootMargin>()?;

        if !self.reserved_fragment.starts_with('#') {
            return Err(PageError::InvalidConfig(format!(
                "reserved_fragment must start with '#', got {:?}",
                self.reserved_fragment
            )));
        }
        Ok(())
    }
}
