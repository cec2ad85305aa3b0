//! Content and UI state shared by the Mr. Chaiwala crates.
//!
//! Nothing in here depends on Dioxus: it is plain data plus the small pieces of
//! state logic (navbar, parallax, contact handoff) the components drive.

pub mod contact;
pub mod content;
pub mod menu;
pub mod motion;
pub mod nav;
pub mod schema;
pub mod site;
