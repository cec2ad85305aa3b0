use dioxus::prelude::*;
use shared::content::HERO_STATS;
use shared::motion::{HeroParallax, Motion};
use shared::site::{BRAND_NAME, HERO_VIDEO_URL, ORDER_URL};
use ui::{use_scroll_offset, CtaLink, Reveal};

use crate::Route;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        HomeHero {
            CtaLink { href: ORDER_URL, "Order Now" }
            Link {
                class: "cta-button cta-secondary hover-grow press-shrink",
                to: Route::MenuPage {},
                "View Menu"
            }
        }
    }
}

/// Full-screen video hero. `children` are the call-to-action buttons.
#[component]
pub fn HomeHero(children: Element) -> Element {
    let parallax = HeroParallax::at(use_scroll_offset());
    let background_style = parallax.background_style();
    let content_style = parallax.content_style();

    rsx! {
        section { id: "home", class: "hero relative h-screen min-h-[640px] flex items-center justify-center overflow-hidden bg-chai-dark",
            div { class: "absolute inset-0 -top-20 -bottom-20", style: "{background_style}",
                iframe {
                    class: "hero-video absolute inset-0 w-full h-full pointer-events-none scale-125",
                    src: HERO_VIDEO_URL,
                    title: "Background Video",
                    "frameborder": "0",
                    "allow": "autoplay; fullscreen",
                    "allowfullscreen": "true",
                }
                div { class: "absolute inset-0 bg-gradient-to-b from-chai-dark/70 via-chai-dark/50 to-chai-dark" }
            }

            div { class: "relative z-10 max-w-4xl px-6 text-center text-chai-cream space-y-8", style: "{content_style}",
                Reveal { motion: Motion::ScaleIn, delay_ms: 200,
                    span { class: "inline-block px-5 py-2 rounded-full border border-chai-gold/40 bg-chai-gold/10 text-sm tracking-wide",
                        "✨ Authentic Indian Chai & Street Food"
                    }
                }

                Reveal { delay_ms: 400, duration_ms: 1000,
                    h1 { class: "font-display font-bold leading-tight",
                        span { class: "block text-2xl md:text-3xl text-chai-cream/80", "Welcome to" }
                        span { class: "block text-6xl md:text-8xl text-chai-gold", "{BRAND_NAME}" }
                    }
                }

                Reveal { delay_ms: 700,
                    p { class: "text-lg md:text-xl text-chai-cream/80 max-w-2xl mx-auto",
                        "Creating the perfect cup of chai that brings people together and sparks moments of warmth and connection."
                    }
                }

                Reveal { delay_ms: 900, class: "flex flex-wrap items-center justify-center gap-4",
                    {children}
                }

                Reveal { motion: Motion::FadeIn, delay_ms: 1200, duration_ms: 1000,
                    class: "grid grid-cols-3 gap-6 max-w-xl mx-auto pt-8 border-t border-white/10",
                    for stat in HERO_STATS {
                        div { key: "{stat.label}", class: "flex flex-col",
                            span { class: "text-3xl font-display font-bold text-chai-gold", "{stat.number}" }
                            span { class: "text-xs uppercase tracking-widest text-chai-cream/60", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::h1_count;
    use ui::ButtonVariant;

    #[test]
    fn hero_renders_its_heading_once() {
        let html = dioxus_ssr::render_element(rsx! {
            HomeHero { CtaLink { href: ORDER_URL, variant: ButtonVariant::Primary, "Order Now" } }
        });
        assert_eq!(h1_count(&html), 1);
        assert!(html.contains("Welcome to"));
        assert!(html.contains("Mr. Chaiwala"));
        assert!(html.contains("Order Now"));
    }

    #[test]
    fn hero_rests_without_scroll_context() {
        let html = dioxus_ssr::render_element(rsx! {
            HomeHero { span { "cta" } }
        });
        assert!(html.contains("translate3d(0, 0.0px, 0)"));
        assert!(html.contains("opacity: 1.000"));
    }
}
