use dioxus::prelude::*;
use shared::content::DIETARY;
use shared::site::ORDER_URL;
use ui::{CtaLink, FeatureCard, Highlight, MenuBoard, PageHero, Reveal, SectionHeader};

#[component]
pub fn MenuPage() -> Element {
    rsx! {
        PageHero {
            tag: "Our Menu",
            subtitle: "Discover our carefully curated selection of authentic Indian flavors",
            backdrop: "menu-hero",
            "Crafted with "
            Highlight { "Passion" }
        }

        section { class: "menu-section py-24 px-6",
            div { class: "max-w-7xl mx-auto",
                Reveal { delay_ms: 200, MenuBoard {} }

                Reveal { duration_ms: 600, class: "mt-16 text-center space-y-6",
                    p { class: "text-lg", "Ready to order? Get your favorite chai and snacks delivered!" }
                    CtaLink { href: ORDER_URL, "Order Online Now" }
                }
            }
        }

        section { class: "py-24 px-6 bg-white/50",
            SectionHeader { tag: "Good to Know",
                "Dietary "
                Highlight { "Information" }
            }
            div { class: "max-w-6xl mx-auto grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                for (i, feature) in DIETARY.into_iter().enumerate() {
                    FeatureCard { key: "{feature.title}", feature, index: i }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::h1_count;
    use shared::menu::Category;

    #[test]
    fn renders_heading_once() {
        let html = dioxus_ssr::render_element(rsx! { MenuPage {} });
        assert_eq!(h1_count(&html), 1);
        assert!(html.contains("Crafted with"));
        assert!(html.contains("Passion"));
    }

    #[test]
    fn opens_on_the_drinks_board() {
        let html = dioxus_ssr::render_element(rsx! { MenuPage {} });
        for item in Category::Chai.items() {
            assert!(html.contains(item.name), "missing {}", item.name);
        }
        assert!(!html.contains("Paneer Paratha"));
    }
}
