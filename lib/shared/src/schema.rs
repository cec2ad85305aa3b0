//! schema.org description of the café, embedded in the page head as JSON-LD so
//! search engines can pick up the address, hours, menu and reviews.

use serde::Serialize;

use crate::content::{Testimonial, MAX_RATING, TESTIMONIALS};
use crate::menu::{Category, MenuItem};
use crate::site;

const CONTEXT: &str = "https://schema.org";
const CURRENCY: &str = "AUD";
const CUISINE: &str = "Indian";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    address: PostalAddress,
    telephone: &'static str,
    email: &'static str,
    opening_hours: &'static str,
    serves_cuisine: &'static str,
    same_as: Vec<&'static str>,
    has_menu: Menu,
    review: Vec<Review>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    street_address: &'static str,
    address_locality: &'static str,
    address_region: &'static str,
    postal_code: &'static str,
    address_country: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Menu {
    #[serde(rename = "@type")]
    kind: &'static str,
    has_menu_section: Vec<MenuSection>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuSection {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    has_menu_item: Vec<Dish>,
}

#[derive(Debug, Serialize)]
struct Dish {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    offers: Offer,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Bare decimal, without the display `$`.
    price: &'static str,
    price_currency: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Review {
    #[serde(rename = "@type")]
    kind: &'static str,
    author: Person,
    review_body: &'static str,
    review_rating: Rating,
}

#[derive(Debug, Serialize)]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Rating {
    #[serde(rename = "@type")]
    kind: &'static str,
    rating_value: u8,
    best_rating: u8,
}

impl From<&'static MenuItem> for Dish {
    fn from(item: &'static MenuItem) -> Self {
        Dish {
            kind: "MenuItem",
            name: item.name,
            description: item.description,
            offers: Offer {
                kind: "Offer",
                price: item.price.trim_start_matches('$'),
                price_currency: CURRENCY,
            },
        }
    }
}

impl From<Category> for MenuSection {
    fn from(category: Category) -> Self {
        MenuSection {
            kind: "MenuSection",
            name: category.label(),
            has_menu_item: category.items().iter().map(Dish::from).collect(),
        }
    }
}

impl From<&Testimonial> for Review {
    fn from(testimonial: &Testimonial) -> Self {
        Review {
            kind: "Review",
            author: Person {
                kind: "Person",
                name: testimonial.author,
            },
            review_body: testimonial.text,
            review_rating: Rating {
                kind: "Rating",
                rating_value: testimonial.rating.min(MAX_RATING),
                best_rating: MAX_RATING,
            },
        }
    }
}

impl Cafe {
    pub fn new() -> Self {
        Cafe {
            context: CONTEXT,
            kind: "CafeOrCoffeeShop",
            name: site::BRAND_NAME,
            description: site::TAGLINE,
            address: PostalAddress {
                kind: "PostalAddress",
                street_address: site::STREET,
                address_locality: site::SUBURB,
                address_region: site::STATE,
                postal_code: site::POSTCODE,
                address_country: "AU",
            },
            telephone: site::PHONE_DISPLAY,
            email: site::CONTACT_EMAIL,
            opening_hours: site::OPENING_HOURS,
            serves_cuisine: CUISINE,
            same_as: vec![site::FACEBOOK_URL],
            has_menu: Menu {
                kind: "Menu",
                has_menu_section: Category::ALL.into_iter().map(MenuSection::from).collect(),
            },
            review: TESTIMONIALS.iter().map(Review::from).collect(),
        }
    }

    /// Body of the `application/ld+json` script in the document head.
    pub fn to_json_ld(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Cafe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn json() -> Value {
        let raw = Cafe::new().to_json_ld().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn describes_the_cafe() {
        let cafe = json();
        assert_eq!(cafe["@context"], "https://schema.org");
        assert_eq!(cafe["@type"], "CafeOrCoffeeShop");
        assert_eq!(cafe["name"], site::BRAND_NAME);
        assert_eq!(cafe["address"]["addressLocality"], "Hindmarsh");
        assert_eq!(cafe["address"]["postalCode"], "5007");
        assert_eq!(cafe["openingHours"], "Mo-Su 17:00-05:00");
        assert_eq!(cafe["sameAs"][0], site::FACEBOOK_URL);
    }

    #[test]
    fn menu_sections_follow_the_switcher() {
        let cafe = json();
        let sections = cafe["hasMenu"]["hasMenuSection"].as_array().unwrap();
        assert_eq!(sections.len(), Category::ALL.len());

        for (section, category) in sections.iter().zip(Category::ALL) {
            assert_eq!(section["name"], category.label());
            let items = section["hasMenuItem"].as_array().unwrap();
            assert_eq!(items.len(), category.items().len());
        }
    }

    #[test]
    fn offers_carry_bare_prices() {
        let cafe = json();
        let first = &cafe["hasMenu"]["hasMenuSection"][0]["hasMenuItem"][0];
        let item = &Category::Chai.items()[0];
        assert_eq!(first["name"], item.name);
        assert_eq!(first["offers"]["price"], &item.price[1..]);
        assert_eq!(first["offers"]["priceCurrency"], "AUD");
    }

    #[test]
    fn reviews_come_from_testimonials() {
        let cafe = json();
        let reviews = cafe["review"].as_array().unwrap();
        assert_eq!(reviews.len(), TESTIMONIALS.len());
        assert_eq!(reviews[0]["author"]["name"], "Raj Sharma");
        assert_eq!(reviews[0]["reviewRating"]["ratingValue"], 5);
        assert_eq!(reviews[0]["reviewRating"]["bestRating"], 5);
    }

    #[test]
    fn overrated_review_is_clamped() {
        let loud = Testimonial {
            rating: 9,
            ..TESTIMONIALS[0]
        };
        assert_eq!(Review::from(&loud).review_rating.rating_value, MAX_RATING);
    }

    #[test]
    fn markup_cannot_close_the_script_tag() {
        let raw = Cafe::new().to_json_ld().unwrap();
        assert!(!raw.contains("</"));
    }
}
