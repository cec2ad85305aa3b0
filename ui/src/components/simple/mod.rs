mod button;

pub use button::{Button, ButtonVariant, CtaLink};
