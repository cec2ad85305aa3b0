use dioxus::prelude::*;
use shared::content::{BOOKING_PERKS, CONTACT_METHODS};
use shared::site;
use ui::{
    ButtonVariant, ContactForm, ContactMethodCard, CtaLink, FeatureCard, FeatureLayout, Highlight,
    PageHero, Reveal, SectionHeader, SectionTag, SideReveal,
};

#[component]
pub fn VisitPage() -> Element {
    rsx! {
        PageHero {
            tag: "Visit Us",
            subtitle: "Open 5PM to 5AM daily - Adelaide's late night chai destination",
            backdrop: "visit-hero",
            "Your "
            Highlight { "Chai Awaits" }
        }

        section { class: "py-24 px-6",
            SectionHeader { tag: "Our Location",
                "Find "
                Highlight { "Mr. Chaiwala" }
            }

            Reveal { duration_ms: 600, class: "max-w-3xl mx-auto",
                div { class: "location-card hover-lift relative bg-white rounded-3xl shadow-lg overflow-hidden",
                    span { class: "absolute top-4 left-4 z-10 bg-chai-gold text-chai-dark text-xs font-bold uppercase tracking-wider px-3 py-1 rounded-full",
                        "Adelaide's Late Night Chai"
                    }
                    iframe {
                        class: "w-full h-64 border-0",
                        src: site::MAP_EMBED_URL,
                        title: "Mr. Chaiwala Location",
                        "loading": "lazy",
                        "allowfullscreen": "true",
                    }
                    div { class: "p-8 space-y-3",
                        h3 { class: "text-2xl font-display font-bold", "{site::SUBURB}" }
                        InfoRow { icon: "📍", text: site::ADDRESS }
                        InfoRow { icon: "📞", text: site::PHONE_DISPLAY }
                        InfoRow { icon: "⏰", text: "Open Daily: {site::HOURS}" }
                        CtaLink {
                            href: site::DIRECTIONS_URL,
                            variant: ButtonVariant::Secondary,
                            class: "mt-4",
                            "Get Directions"
                        }
                    }
                }
            }

            Reveal { duration_ms: 600, class: "mt-16 text-center space-y-6",
                h3 { class: "text-2xl font-display font-bold", "Can't make it in? Order online!" }
                div { class: "flex flex-wrap justify-center gap-4",
                    CtaLink { href: site::ORDER_URL, "Order Now" }
                    CtaLink { href: site::LOYALTY_URL, variant: ButtonVariant::Secondary, "Join Loyalty Program" }
                }
            }
        }

        section { class: "py-24 px-6 bg-white/50",
            div { class: "max-w-6xl mx-auto grid gap-12 md:grid-cols-2 items-start",
                SideReveal { from_left: true, class: "space-y-6",
                    SectionTag { "Get in Touch" }
                    h2 { class: "text-4xl font-display font-bold",
                        "Contact "
                        Highlight { "Us" }
                    }
                    p { class: "text-chai-dark/70",
                        "Have a question or inquiry? Send us a message and we'll get back to you!"
                    }
                    div { class: "space-y-5 pt-4",
                        for (i, feature) in BOOKING_PERKS.into_iter().enumerate() {
                            FeatureCard {
                                key: "{feature.title}",
                                feature,
                                index: i,
                                layout: FeatureLayout::Inline,
                            }
                        }
                    }
                }
                SideReveal { from_left: false, delay_ms: 200, ContactForm {} }
            }
        }

        section { class: "py-24 px-6",
            SectionHeader { tag: "Connect With Us",
                "Contact "
                Highlight { "Details" }
            }
            div { class: "max-w-5xl mx-auto grid gap-6 md:grid-cols-3",
                for (i, method) in CONTACT_METHODS.into_iter().enumerate() {
                    ContactMethodCard { key: "{method.label}", method, index: i }
                }
            }
            Reveal { delay_ms: 300, class: "mt-16 text-center space-y-4",
                h3 { class: "text-2xl font-display font-bold", "Follow Us" }
                CtaLink { href: site::FACEBOOK_URL, variant: ButtonVariant::Secondary, "Facebook" }
            }
        }
    }
}

#[component]
fn InfoRow(icon: &'static str, #[props(into)] text: String) -> Element {
    rsx! {
        div { class: "flex items-center gap-3",
            span { class: "text-xl", "{icon}" }
            p { "{text}" }
        }
    }
}
