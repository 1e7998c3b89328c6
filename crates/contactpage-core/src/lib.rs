//! Contact Page Core Library
//!
//! Client-side interaction layer for a marketing/contact page.
//!
//! ## Overview
//!
//! Five independent behaviors are wired to a page once its structure exists:
//!
//! - **Contact form**: validates the four required fields and simulates a send
//! - **Country selector**: radio-group selection with roving tabindex
//! - **Smooth scroll**: header-compensated scrolling for fragment links
//! - **Search**: placeholder prompt that logs the term
//! - **Scroll reveal**: one-way fade-in of service cards
//!
//! Nothing here touches a real page. Dialogs, geometry and viewport
//! observation come in through the traits in [`capability`], so the same
//! logic runs under the desktop shell and under test fakes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use contactpage_core::{initialize, PageConfig, PageRoot};
//!
//! let config = PageConfig::default();
//! let mut interactions = initialize(&page_root, &config, &mut observer)?;
//!
//! // contact form submitted
//! if let Some(form) = &interactions.contact {
//!     form.submit(&mut fields, &notifier);
//! }
//!
//! // option clicked
//! let focus = interactions.countries.click("pais-mx")?;
//! ```

pub mod capability;
pub mod config;
pub mod contact;
pub mod country;
pub mod error;
pub mod logging;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod search;

// Re-exports
pub use capability::{Layout, Notice, Notifier, Prompter, ViewportObserver};
pub use config::{FieldIds, Messages, PageConfig, RevealConfig, Selectors};
pub use contact::{ContactField, ContactFields, ContactForm, InputKind, SubmitOutcome};
pub use country::{
    ActivationKey, CountryOption, CountrySelector, FocusRequest, KeyOutcome, OptionMarkers,
};
pub use error::{PageError, PageResult};
pub use page::{initialize, Interactions, PageRoot};
pub use reveal::{
    CardStyle, CardVisibility, IntersectionEntry, ObserverOptions, Rect, RevealAnimator,
    RootMargin,
};
pub use scroll::{
    LayoutSnapshot, LinkAction, LinkDisposition, NavLink, ScrollBehavior, ScrollRequest,
    SmoothScroll,
};
pub use search::{SearchOutcome, SearchTrigger};
