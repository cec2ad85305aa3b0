use dioxus::prelude::*;
use shared::content::{EXPERIENCES, GALLERY, TESTIMONIALS};
use shared::motion::stagger;
use shared::site;
use ui::{
    ButtonVariant, CtaLink, GalleryItem, Highlight, PageHero, Reveal, SectionHeader,
    TestimonialCard,
};

#[component]
pub fn ExperiencePage() -> Element {
    let mailto = site::mailto();

    rsx! {
        PageHero {
            tag: "The Experience",
            subtitle: "Immerse yourself in the complete Mr. Chaiwala experience",
            backdrop: "experience-hero",
            "More Than Just "
            Highlight { "Chai" }
        }

        section { class: "py-24 px-6",
            div { class: "max-w-6xl mx-auto grid gap-8 md:grid-cols-2",
                for (i, exp) in EXPERIENCES.into_iter().enumerate() {
                    Reveal { key: "{exp.title}", delay_ms: stagger(0, 150, i), duration_ms: 600,
                        div { class: "experience-card hover-grow rounded-3xl overflow-hidden bg-chai-dark text-chai-cream h-full",
                            div { class: "exp-card-image exp-{i} h-56 bg-gradient-to-br from-chai-gold/40 to-chai-dark" }
                            div { class: "p-8 space-y-3",
                                div { class: "text-5xl", "{exp.icon}" }
                                h3 { class: "text-2xl font-display font-bold", "{exp.title}" }
                                p { class: "text-chai-cream/70 leading-relaxed", "{exp.description}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "py-24 px-6 bg-white/50",
            SectionHeader { tag: "Gallery",
                "Glimpses of "
                Highlight { "Mr. Chaiwala" }
            }
            div { class: "max-w-6xl mx-auto grid gap-4 grid-cols-2 md:grid-cols-4 auto-rows-[12rem]",
                for (i, tile) in GALLERY.into_iter().enumerate() {
                    GalleryItem { key: "{tile.id}", tile, index: i }
                }
            }
        }

        section { class: "py-24 px-6",
            SectionHeader { tag: "Testimonials",
                "What Our "
                Highlight { "Customers" }
                " Say"
            }
            div { class: "max-w-6xl mx-auto grid gap-8 md:grid-cols-3",
                for (i, testimonial) in TESTIMONIALS.into_iter().enumerate() {
                    TestimonialCard { key: "{testimonial.initials}", testimonial, index: i }
                }
            }
        }

        section { class: "py-24 px-6 bg-chai-dark text-chai-cream text-center",
            Reveal { class: "max-w-3xl mx-auto space-y-6",
                h2 { class: "text-4xl md:text-5xl font-display font-bold",
                    "Ready to Experience "
                    Highlight { "Mr. Chaiwala" }
                    "?"
                }
                p { class: "text-chai-cream/70", "Book a table or inquire about private events" }
                div { class: "flex flex-wrap justify-center gap-4",
                    CtaLink { href: site::PHONE_URI, "Book a Table" }
                    CtaLink { href: "{mailto}", variant: ButtonVariant::Secondary, "Plan an Event" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::h1_count;

    #[test]
    fn renders_heading_once() {
        let html = dioxus_ssr::render_element(rsx! { ExperiencePage {} });
        assert_eq!(h1_count(&html), 1);
        assert!(html.contains("More Than Just"));
    }

    #[test]
    fn shows_every_testimonial_and_tile() {
        let html = dioxus_ssr::render_element(rsx! { ExperiencePage {} });
        for t in TESTIMONIALS {
            assert!(html.contains(t.initials));
        }
        assert_eq!(html.matches("gallery-item ").count(), GALLERY.len());
    }
}
