//! Smooth scrolling for in-page navigation links.
//!
//! Fragment links are intercepted and the viewport is scrolled so the target
//! section lands just below the fixed header. The language switcher's
//! fragment is left alone; it is matched literally, so renaming it in the
//! markup without updating [`crate::config::PageConfig::reserved_fragment`]
//! makes this layer start intercepting it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::capability::Layout;

/// `behavior` of a `window.scrollTo` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
}

/// Scroll the window to an absolute position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// A navigation link as rendered in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Whether the link points into the same page
    pub fn is_fragment(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// How a click on a link must be treated, decided synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDisposition {
    /// Not a fragment link; not wired by this layer
    NotHandled,
    /// Reserved fragment; default navigation proceeds
    PassThrough,
    /// Default suppressed; scroll to the section with this id if it exists
    Intercept { target_id: String },
}

impl LinkDisposition {
    pub fn prevents_default(&self) -> bool {
        matches!(self, LinkDisposition::Intercept { .. })
    }
}

/// Full result of a click once layout is known.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkAction {
    NotHandled,
    PassThrough,
    /// Intercepted, but the target does not exist
    Suppressed,
    ScrollTo(ScrollRequest),
}

impl LinkAction {
    pub fn prevents_default(&self) -> bool {
        matches!(self, LinkAction::Suppressed | LinkAction::ScrollTo(_))
    }
}

/// Header-compensated smooth scrolling for the page's fragment links.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    links: Vec<NavLink>,
    reserved_fragment: String,
}

impl SmoothScroll {
    pub fn new(links: Vec<NavLink>, reserved_fragment: impl Into<String>) -> Self {
        Self {
            links,
            reserved_fragment: reserved_fragment.into(),
        }
    }

    /// Navigation links, in header order
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn reserved_fragment(&self) -> &str {
        &self.reserved_fragment
    }

    /// Decide whether a click on `href` is intercepted.
    pub fn classify(&self, href: &str) -> LinkDisposition {
        let Some(target_id) = href.strip_prefix('#') else {
            return LinkDisposition::NotHandled;
        };
        if href == self.reserved_fragment {
            return LinkDisposition::PassThrough;
        }
        LinkDisposition::Intercept {
            target_id: target_id.to_string(),
        }
    }

    /// Scroll position for a section, or `None` if it does not exist.
    ///
    /// The result is the section's document offset minus the header height,
    /// so the section starts right below the fixed header.
    pub fn resolve(&self, target_id: &str, layout: &impl Layout) -> Option<ScrollRequest> {
        if target_id.is_empty() {
            return None;
        }
        let offset_top = layout.section_offset_top(target_id)?;
        let top = offset_top - layout.header_height();
        tracing::debug!(target = %target_id, top, "Smooth scroll");
        Some(ScrollRequest {
            top,
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// Classify and resolve a click in one step.
    pub fn on_click(&self, href: &str, layout: &impl Layout) -> LinkAction {
        match self.classify(href) {
            LinkDisposition::NotHandled => LinkAction::NotHandled,
            LinkDisposition::PassThrough => LinkAction::PassThrough,
            LinkDisposition::Intercept { target_id } => match self.resolve(&target_id, layout) {
                Some(request) => LinkAction::ScrollTo(request),
                None => {
                    tracing::debug!(target = %target_id, "Scroll target missing");
                    LinkAction::Suppressed
                }
            },
        }
    }
}

/// Measured page geometry.
///
/// The desktop shell fills this from the rendered page right before it
/// resolves a click.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Document offset top of each section, by id
    #[serde(default)]
    pub sections: HashMap<String, f64>,
    #[serde(default)]
    pub header_height: f64,
}

impl LayoutSnapshot {
    pub fn new(header_height: f64) -> Self {
        Self {
            sections: HashMap::new(),
            header_height,
        }
    }

    pub fn with_section(mut self, id: impl Into<String>, offset_top: f64) -> Self {
        self.sections.insert(id.into(), offset_top);
        self
    }
}

impl Layout for LayoutSnapshot {
    fn section_offset_top(&self, id: &str) -> Option<f64> {
        self.sections.get(id).copied()
    }

    fn header_height(&self) -> f64 {
        self.header_height
    }
}
