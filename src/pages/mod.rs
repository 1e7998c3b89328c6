//! Page components for the contact page.

mod home;

pub use home::Home;
