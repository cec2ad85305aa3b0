//! This crate contains all shared UI for the workspace.

mod browser;
pub use browser::Browser;

mod context;
pub use context::{use_scroll_offset, ScrollOffset};

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

mod components;
pub use components::*;
