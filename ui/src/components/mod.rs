pub mod cards;
pub mod contact;
pub mod footer;
pub mod menu;
pub mod reveal;
pub mod section;
pub mod simple;

pub use cards::*;
pub use contact::ContactForm;
pub use footer::Footer;
pub use menu::{MenuBoard, MenuGrid};
pub use reveal::Reveal;
pub use section::*;
pub use simple::*;
