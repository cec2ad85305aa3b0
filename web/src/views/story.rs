use dioxus::prelude::*;
use shared::content::{OFFERINGS, STORY_FEATURES, VALUES};
use shared::site::HOURS;
use ui::{FeatureCard, FeatureLayout, Highlight, PageHero, SectionHeader, SectionTag, SideReveal};

#[component]
pub fn StoryPage() -> Element {
    rsx! {
        PageHero {
            tag: "Our Story",
            subtitle: "Where tradition and flavour come together",
            backdrop: "story-hero",
            "The "
            Highlight { "Mr. Chaiwala" }
            " Story"
        }

        section { class: "py-24 px-6",
            div { class: "max-w-6xl mx-auto grid gap-16 md:grid-cols-2 items-center",
                SideReveal { from_left: true, class: "relative",
                    div { class: "story-image aspect-[4/5] rounded-3xl overflow-hidden shadow-2xl" }
                    div { class: "absolute -bottom-6 -right-6 bg-chai-gold text-chai-dark rounded-2xl px-6 py-4 shadow-xl text-center",
                        span { class: "block text-xs uppercase tracking-widest", "Open" }
                        span { class: "block text-2xl font-display font-bold", "{HOURS}" }
                    }
                }

                SideReveal { from_left: false, delay_ms: 200, class: "space-y-6",
                    SectionTag { "Our Passion" }
                    h2 { class: "text-4xl font-display font-bold",
                        "Bringing "
                        Highlight { "Indian Street Food" }
                        " to Adelaide"
                    }
                    p { class: "text-lg leading-relaxed",
                        "At Mr. Chaiwala, we are passionate about serving the best of Indian street food along with our expertly brewed chai, made with the finest tea leaves and a blend of carefully selected spices."
                    }
                    p { class: "leading-relaxed text-chai-dark/70",
                        "Beyond our signature chai, we offer a variety of delicious dishes including authentic Parathas, comforting Maggi noodles, crispy Samosas, flavorful Sandwiches, and much more. Whether you're craving a quick snack or a full meal, we've got something for everyone."
                    }
                    div { class: "grid gap-4 sm:grid-cols-3 pt-4",
                        for (i, feature) in STORY_FEATURES.into_iter().enumerate() {
                            FeatureCard {
                                key: "{feature.title}",
                                feature,
                                index: i,
                                layout: FeatureLayout::Inline,
                                base_delay_ms: 400,
                            }
                        }
                    }
                }
            }
        }

        section { class: "py-24 px-6 bg-white/50",
            SectionHeader { tag: "What We Offer",
                "Adelaide's "
                Highlight { "Late Night" }
                " Chai Destination"
            }
            div { class: "max-w-6xl mx-auto grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                for (i, feature) in OFFERINGS.into_iter().enumerate() {
                    FeatureCard { key: "{feature.title}", feature, index: i }
                }
            }
        }

        section { class: "py-24 px-6",
            SectionHeader { tag: "Our Commitment",
                "Supporting "
                Highlight { "Local" }
            }
            div { class: "max-w-6xl mx-auto grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                for (i, feature) in VALUES.into_iter().enumerate() {
                    FeatureCard { key: "{feature.title}", feature, index: i }
                }
            }
        }
    }
}
