//! Literal page content: testimonials, feature cards, gallery tiles.

use crate::site;

/// Highest star count a testimonial can display.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// The rating as a row of stars, clamped to the displayable range.
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(MAX_RATING)))
    }
}

/// Icon + title + blurb card, used across the story, menu and visit pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn feature(icon: &'static str, title: &'static str, description: &'static str) -> Feature {
    Feature {
        icon,
        title,
        description,
    }
}

/// Headline number on the home hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySize {
    Large,
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryTile {
    pub id: u8,
    pub title: &'static str,
    pub size: GallerySize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

impl ContactMethod {
    /// External links open in a new tab; `mailto:`/`tel:` stay in place.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http")
    }
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { number: "50+", label: "Menu Items" },
    Stat { number: "5PM", label: "Open Daily" },
    Stat { number: "5AM", label: "Late Night Chai" },
];

pub const STORY_FEATURES: [Feature; 3] = [
    feature("🍵", "Expert Chai", "Finest tea leaves & selected spices"),
    feature("🇮🇳", "Street Food", "Authentic Indian flavours"),
    feature("🌙", "Late Night", "Open 5PM to 5AM daily"),
];

pub const OFFERINGS: [Feature; 4] = [
    feature("☕", "Signature Chai", "From classic Chai Cutting to our full-bodied Chai Full, every cup is brewed to perfection"),
    feature("🥪", "Street Snacks", "Vadapav, Samosa Pav, Dabeli, Bun Maska and more authentic Indian street food"),
    feature("🍝", "Comfort Food", "Hot Maggi noodles, Pasta, Parathas, and crispy French Fries"),
    feature("🥤", "Cool Drinks", "Refreshing Lassi, Milkshakes, Cold Coffee, and specialty sodas"),
];

pub const VALUES: [Feature; 4] = [
    feature("🤝", "Local Hiring", "We are committed to hiring locals and building our Adelaide community"),
    feature("🌾", "Local Producers", "We partner with local producers to source the freshest ingredients"),
    feature("❤️", "Community First", "Building connections and serving our neighbourhood one cup at a time"),
    feature("✨", "Quality Always", "Only the finest ingredients make it into every dish we serve"),
];

pub const DIETARY: [Feature; 4] = [
    feature("🌱", "Vegetarian Options", "Most of our menu is vegetarian-friendly"),
    feature("🥛", "Dairy Alternatives", "Oat, almond, and soy milk available"),
    feature("🌾", "Gluten-Free", "Ask about our gluten-free options"),
    feature("🥜", "Allergen Info", "Please inform us of any allergies"),
];

pub const EXPERIENCES: [Feature; 4] = [
    feature("✨", "Cozy Ambiance", "Warm lighting, comfortable seating, and the aroma of fresh chai create the perfect escape from the everyday hustle."),
    feature("👨‍🍳", "Live Chai Making", "Watch our skilled chai-walas craft your perfect cup using traditional techniques passed down through generations."),
    feature("🎭", "Cultural Events", "Join us for regular poetry nights, live music sessions, chai talks, and cultural celebrations."),
    feature("🎉", "Private Events", "Host your special moments with our catering services - from intimate gatherings to corporate events."),
];

pub const BOOKING_PERKS: [Feature; 3] = [
    feature("🌙", "Late Night Chai", site::HOURS_LONG),
    feature("🥡", "Takeaway Available", "Order online or walk in"),
    feature("🎉", "Catering Available", "Bring Mr. Chaiwala to your event"),
];

pub const GALLERY: [GalleryTile; 6] = [
    GalleryTile { id: 1, title: "Our Cafe", size: GallerySize::Large },
    GalleryTile { id: 2, title: "Chai Making", size: GallerySize::Small },
    GalleryTile { id: 3, title: "Spices", size: GallerySize::Small },
    GalleryTile { id: 4, title: "Events", size: GallerySize::Medium },
    GalleryTile { id: 5, title: "Community", size: GallerySize::Medium },
    GalleryTile { id: 6, title: "Food", size: GallerySize::Small },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: "The best chai I've ever had outside of India. The Masala Chai here transports me straight to the streets of Mumbai. Absolutely magical!",
        author: "Raj Sharma",
        role: "Regular Customer",
        initials: "RS",
        rating: 5,
    },
    Testimonial {
        text: "A hidden gem in Melbourne! The ambiance is incredible, and every cup of chai is made with so much love and care.",
        author: "Sarah Mitchell",
        role: "Food Blogger",
        initials: "SM",
        rating: 5,
    },
    Testimonial {
        text: "We hosted our engagement party here and it was perfect. The chai and snacks were a massive hit with all our guests!",
        author: "Priya & James",
        role: "Event Hosts",
        initials: "PJ",
        rating: 5,
    },
];

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "📧",
        label: "Email",
        value: site::CONTACT_EMAIL,
        link: "mailto:Bhagyeshthakar@gmail.com",
    },
    ContactMethod {
        icon: "📞",
        label: "Phone",
        value: site::PHONE_DISPLAY,
        link: site::PHONE_URI,
    },
    ContactMethod {
        icon: "📍",
        label: "Address",
        value: site::ADDRESS,
        link: site::DIRECTIONS_URL,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_displayable() {
        for t in TESTIMONIALS {
            assert!((1..=MAX_RATING).contains(&t.rating), "{}", t.author);
            assert_eq!(t.stars().chars().count(), usize::from(t.rating));
        }
    }

    #[test]
    fn stars_clamp_to_max() {
        let loud = Testimonial {
            rating: 9,
            ..TESTIMONIALS[0]
        };
        assert_eq!(loud.stars(), "★★★★★");
    }

    #[test]
    fn initials_are_two_letters() {
        for t in TESTIMONIALS {
            assert_eq!(t.initials.len(), 2);
        }
    }

    #[test]
    fn only_web_links_are_external() {
        let external: Vec<_> = CONTACT_METHODS
            .iter()
            .filter(|m| m.is_external())
            .map(|m| m.label)
            .collect();
        assert_eq!(external, ["Address"]);
        assert_eq!(CONTACT_METHODS[0].link, site::mailto());
    }

    #[test]
    fn gallery_ids_are_sequential() {
        for (i, tile) in GALLERY.iter().enumerate() {
            assert_eq!(usize::from(tile.id), i + 1);
        }
    }
}
