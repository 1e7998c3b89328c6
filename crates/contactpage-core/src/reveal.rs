//! Scroll-triggered fade-in for service cards.
//!
//! ```text
//! initialize ──► every card Hidden   (opacity 0, translateY(20px))
//!                └─ observer.observe(card, threshold 0.1, margin bottom -100px)
//!
//! apply(batch) ─► intersecting entry ─► Revealed (opacity 1, translateY(0))
//!                 exiting entry      ─► unchanged
//! ```
//!
//! Revealing is one-way. A card that scrolls back out keeps its revealed
//! style.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::capability::ViewportObserver;
use crate::config::RevealConfig;
use crate::error::{PageError, PageResult};

/// Axis-aligned rectangle in CSS px.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`; edge-adjacent rectangles overlap with zero area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        if bottom < top || right < left {
            return None;
        }
        Some(Rect::new(top, left, right - left, bottom - top))
    }
}

/// `rootMargin` of an intersection observer, px only.
///
/// Positive values grow the viewport, negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    /// Viewport rectangle with the margin applied
    pub fn apply(&self, viewport: Rect) -> Rect {
        Rect::new(
            viewport.top - self.top,
            viewport.left - self.left,
            viewport.width + self.left + self.right,
            viewport.height + self.top + self.bottom,
        )
    }
}

fn parse_length(token: &str) -> Option<f64> {
    let number = token.strip_suffix("px").unwrap_or(token);
    let value: f64 = number.parse().ok()?;
    // Unitless lengths are only valid for zero.
    if !token.ends_with("px") && value != 0.0 {
        return None;
    }
    value.is_finite().then_some(value)
}

impl FromStr for RootMargin {
    type Err = PageError;

    /// CSS margin shorthand with one to four px lengths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PageError::InvalidRootMargin(s.to_string());
        let values = s
            .split_whitespace()
            .map(|token| parse_length(token).ok_or_else(invalid))
            .collect::<PageResult<Vec<f64>>>()?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Err(invalid()),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Options a card is observed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction of the card's area that counts as intersecting
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin {
                bottom: -100.0,
                ..RootMargin::default()
            },
        }
    }
}

impl ObserverOptions {
    /// Compute the entry the platform observer would report for a card.
    ///
    /// `element` and `viewport` are in the same coordinate space. A card
    /// with no area intersects as soon as it touches the margin-adjusted
    /// viewport, and so does any touching card when the threshold is 0.
    pub fn evaluate(&self, target: &str, element: Rect, viewport: Rect) -> IntersectionEntry {
        let root = self.root_margin.apply(viewport);
        let (is_intersecting, intersection_ratio) = match element.intersection(&root) {
            None => (false, 0.0),
            Some(_) if element.area() == 0.0 => (true, 1.0),
            Some(overlap) => {
                let ratio = overlap.area() / element.area();
                (ratio >= self.threshold, ratio)
            }
        };
        IntersectionEntry {
            target: target.to_string(),
            is_intersecting,
            intersection_ratio,
        }
    }
}

/// One observation of one card, as delivered to the observer callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionEntry {
    /// Element id of the card
    pub target: String,
    pub is_intersecting: bool,
    #[serde(default)]
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn entering(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: true,
            intersection_ratio: 1.0,
        }
    }

    pub fn leaving(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Hidden,
    Revealed,
}

/// Inline style of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub opacity: f64,
    pub translate_y_px: f64,
    pub transition_secs: f64,
}

impl CardStyle {
    /// `style` attribute value
    pub fn to_css(&self) -> String {
        let transform = if self.translate_y_px == 0.0 {
            "translateY(0)".to_string()
        } else {
            format!("translateY({}px)", self.translate_y_px)
        };
        format!(
            "opacity: {}; transform: {}; transition: opacity {secs}s ease, transform {secs}s ease;",
            self.opacity,
            transform,
            secs = self.transition_secs
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Card {
    id: String,
    visibility: CardVisibility,
}

/// Tracks the reveal state of every observed card.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimator {
    cards: Vec<Card>,
    options: ObserverOptions,
    hidden_offset_px: f64,
    transition_secs: f64,
}

impl RevealAnimator {
    /// Put every card in the hidden state.
    pub fn new<I, S>(card_ids: I, config: &RevealConfig) -> PageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards = card_ids
            .into_iter()
            .map(|id| Card {
                id: id.into(),
                visibility: CardVisibility::Hidden,
            })
            .collect();
        Ok(Self {
            cards,
            options: config.observer_options()?,
            hidden_offset_px: config.hidden_offset_px,
            transition_secs: config.transition_secs,
        })
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Register every card with the observer.
    pub fn register(&self, observer: &mut impl ViewportObserver) {
        for card in &self.cards {
            observer.observe(&card.id, &self.options);
        }
        tracing::debug!(cards = self.cards.len(), "Cards registered for reveal");
    }

    /// Apply one observer callback batch.
    ///
    /// Returns the ids revealed by this batch.
    pub fn apply<I>(&mut self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        let mut revealed = Vec::new();
        for entry in entries {
            let Some(card) = self.cards.iter_mut().find(|card| card.id == entry.target) else {
                tracing::warn!(target_id = %entry.target, "Intersection entry for unknown card");
                continue;
            };
            if entry.is_intersecting && card.visibility == CardVisibility::Hidden {
                card.visibility = CardVisibility::Revealed;
                revealed.push(card.id.clone());
            }
        }
        if !revealed.is_empty() {
            tracing::debug!(?revealed, "Cards revealed");
        }
        revealed
    }

    /// Card ids, in page order
    pub fn card_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.cards.iter().map(|card| card.id.as_str())
    }

    pub fn visibility(&self, id: &str) -> Option<CardVisibility> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .map(|card| card.visibility)
    }

    pub fn style(&self, id: &str) -> Option<CardStyle> {
        let visibility = self.visibility(id)?;
        Some(self.style_for(visibility))
    }

    pub fn style_for(&self, visibility: CardVisibility) -> CardStyle {
        match visibility {
            CardVisibility::Hidden => CardStyle {
                opacity: 0.0,
                translate_y_px: self.hidden_offset_px,
                transition_secs: self.transition_secs,
            },
            CardVisibility::Revealed => CardStyle {
                opacity: 1.0,
                translate_y_px: 0.0,
                transition_secs: self.transition_secs,
            },
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.visibility == CardVisibility::Revealed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        observed: Vec<(String, ObserverOptions)>,
    }

    impl ViewportObserver for RecordingObserver {
        fn observe(&mut self, target: &str, options: &ObserverOptions) {
            self.observed.push((target.to_string(), *options));
        }
    }

    fn animator() -> RevealAnimator {
        RevealAnimator::new(["card-web", "card-seo"], &RevealConfig::default()).unwrap()
    }

    #[test]
    fn test_root_margin_parsing() {
        let margin: RootMargin = "0px 0px -100px 0px".parse().unwrap();
        assert_eq!(margin.bottom, -100.0);
        assert_eq!(margin.to_string(), "0px 0px -100px 0px");

        let margin: RootMargin = "10px".parse().unwrap();
        assert_eq!((margin.top, margin.left), (10.0, 10.0));

        let margin: RootMargin = "5px 0".parse().unwrap();
        assert_eq!((margin.top, margin.right, margin.bottom), (5.0, 0.0, 5.0));

        assert!("".parse::<RootMargin>().is_err());
        assert!("10% 0px".parse::<RootMargin>().is_err());
        assert!("10 0".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
    }

    #[test]
    fn test_cards_start_hidden_and_register() {
        let animator = animator();
        let mut observer = RecordingObserver::default();
        animator.register(&mut observer);

        let ids: Vec<_> = observer.observed.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["card-web", "card-seo"]);
        assert_eq!(observer.observed[0].1, ObserverOptions::default());
        assert_eq!(
            animator.style("card-web").unwrap().to_css(),
            "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;"
        );
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut animator = animator();

        let revealed = animator.apply([IntersectionEntry::entering("card-web")]);
        assert_eq!(revealed, vec!["card-web".to_string()]);
        assert_eq!(
            animator.style("card-web").unwrap().to_css(),
            "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
        );

        let revealed = animator.apply([
            IntersectionEntry::leaving("card-web"),
            IntersectionEntry::entering("card-web"),
        ]);
        assert!(revealed.is_empty());
        assert_eq!(animator.visibility("card-web"), Some(CardVisibility::Revealed));
        assert_eq!(animator.visibility("card-seo"), Some(CardVisibility::Hidden));
    }

    #[test]
    fn test_unknown_targets_are_ignored() {
        let mut animator = animator();
        assert!(animator.apply([IntersectionEntry::entering("card-x")]).is_empty());
        assert_eq!(animator.revealed_count(), 0);
    }

    #[test]
    fn test_evaluate_applies_bottom_margin() {
        let options = ObserverOptions::default();
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);

        // Top edge 50px above the viewport bottom sits inside the -100px margin.
        let entry = options.evaluate("card", Rect::new(750.0, 0.0, 300.0, 200.0), viewport);
        assert!(!entry.is_intersecting);

        // 40px of 200px past the adjusted edge: 20%.
        let entry = options.evaluate("card", Rect::new(660.0, 0.0, 300.0, 200.0), viewport);
        assert!(entry.is_intersecting);
        assert!((entry.intersection_ratio - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_threshold() {
        let options = ObserverOptions::default();
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);

        // 10px of 200px visible: 5%, below threshold.
        let entry = options.evaluate("card", Rect::new(690.0, 0.0, 300.0, 200.0), viewport);
        assert!(!entry.is_intersecting);
        assert!(entry.intersection_ratio > 0.0);
    }

    #[test]
    fn test_evaluate_zero_threshold_counts_touching_edge() {
        let options = ObserverOptions {
            threshold: 0.0,
            root_margin: "0px".parse().unwrap(),
        };
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);

        // Top edge lies exactly on the viewport bottom.
        let entry = options.evaluate("card", Rect::new(800.0, 0.0, 100.0, 100.0), viewport);
        assert!(entry.is_intersecting);
        assert_eq!(entry.intersection_ratio, 0.0);

        // One pixel further down it no longer touches.
        let entry = options.evaluate("card", Rect::new(801.0, 0.0, 100.0, 100.0), viewport);
        assert!(!entry.is_intersecting);
    }

    #[test]
    fn test_evaluate_zero_area_element() {
        let options = ObserverOptions::default();
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let entry = options.evaluate("card", Rect::new(100.0, 0.0, 0.0, 0.0), viewport);
        assert!(entry.is_intersecting);
    }

    #[test]
    fn test_entry_deserializes_from_script_payload() {
        let entries: Vec<IntersectionEntry> = serde_json::from_str(
            r#"[{"target":"card-web","isIntersecting":true,"intersectionRatio":0.4}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].target, "card-web");
        assert!(entries[0].is_intersecting);
    }
}
