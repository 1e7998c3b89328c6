//! UI Components for the contact page.
//!
//! Each component drives exactly one of the page interactions.

mod contact_form;
mod country_selector;
mod search_prompt;
mod service_cards;
mod site_header;

pub use contact_form::ContactFormSection;
pub use country_selector::CountryPicker;
pub use search_prompt::SearchPrompt;
pub use service_cards::ServiceCards;
pub use site_header::SiteHeader;
