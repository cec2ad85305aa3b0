//! Site-wide constants: addresses, contact details and outbound links.
//!
//! These are opaque strings; nothing here is parsed or validated at runtime.

pub const BRAND_NAME: &str = "Mr. Chaiwala";
pub const BRAND_ICON: &str = "🍵";
pub const TAGLINE: &str = "Adelaide's late night chai destination";

pub const ADDRESS: &str = "162 Port Rd, Hindmarsh SA 5007";
pub const STREET: &str = "162 Port Rd";
pub const SUBURB: &str = "Hindmarsh";
pub const STATE: &str = "SA";
pub const POSTCODE: &str = "5007";
pub const HOURS: &str = "5PM - 5AM";
/// `HOURS` in schema.org `openingHours` notation.
pub const OPENING_HOURS: &str = "Mo-Su 17:00-05:00";
pub const HOURS_LONG: &str = "Open 5PM to 5AM every day";

pub const CONTACT_EMAIL: &str = "Bhagyeshthakar@gmail.com";
pub const PHONE_DISPLAY: &str = "0422 372 222";
pub const PHONE_URI: &str = "tel:0422372222";

pub const ORDER_URL: &str = "https://orders.restoplus.com/restaurants/f7lrph252/stores/178srvnlah";
pub const LOYALTY_URL: &str =
    "https://orders.restoplus.com/restaurants/f7lrph252/stores/178srvnlah/loyalty-card";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=100091952810140";
pub const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir//162+Port+Rd,+Hindmarsh+SA+5007";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3271.2!2d138.5693!3d-34.9076!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMzTCsDU0JzI3LjQiUyAxMzjCsDM0JzA5LjAiRQ!5e0!3m2!1sen!2sau!4v1234567890";
pub const HERO_VIDEO_URL: &str = "https://www.youtube.com/embed/Kv1vQyrEOyA?autoplay=1&mute=1&loop=1&playlist=Kv1vQyrEOyA&controls=0&showinfo=0&rel=0&disablekb=1&modestbranding=1&playsinline=1";

pub const COPYRIGHT: &str = "© 2024 Mr. Chaiwala. All rights reserved.";

/// `mailto:` link without any query, used by plain "Email us" links.
pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
