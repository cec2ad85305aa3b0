use dioxus::prelude::*;
use shared::content::{ContactMethod, Feature, GallerySize, GalleryTile, Testimonial};
use shared::motion::{stagger, Motion};

use crate::Reveal;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum FeatureLayout {
    /// Centered card with the icon on top.
    #[default]
    Card,
    /// Icon beside the text, for compact lists.
    Inline,
}

#[component]
pub fn FeatureCard(
    feature: Feature,
    index: usize,
    #[props(default)] layout: FeatureLayout,
    #[props(default)] base_delay_ms: u32,
) -> Element {
    let delay_ms = stagger(base_delay_ms, 100, index);

    match layout {
        FeatureLayout::Card => rsx! {
          Reveal { delay_ms, duration_ms: 500,
            div { class: "value-card hover-lift h-full bg-white rounded-2xl p-8 text-center shadow-sm",
              div { class: "text-5xl mb-4", "{feature.icon}" }
              h3 { class: "text-xl font-display font-bold mb-2", "{feature.title}" }
              p { class: "text-chai-dark/70 leading-relaxed", "{feature.description}" }
            }
          }
        },
        FeatureLayout::Inline => rsx! {
          Reveal { delay_ms, duration_ms: 600,
            div { class: "flex items-start gap-4",
              span { class: "text-3xl", "{feature.icon}" }
              div {
                h4 { class: "font-bold", "{feature.title}" }
                p { class: "text-sm text-chai-dark/70", "{feature.description}" }
              }
            }
          }
        },
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial, index: usize) -> Element {
    let stars = testimonial.stars();

    rsx! {
      Reveal { delay_ms: stagger(0, 150, index), duration_ms: 600,
        div { class: "testimonial-card relative h-full bg-white rounded-2xl p-8 shadow-sm flex flex-col gap-6",
          div { class: "absolute top-4 right-6 text-6xl font-display text-chai-gold/30", "\"" }
          p { class: "testimonial-text italic leading-relaxed flex-grow", "{testimonial.text}" }
          div { class: "flex items-center gap-4",
            div { class: "w-12 h-12 rounded-full bg-chai-gold text-chai-dark font-bold flex items-center justify-center",
              "{testimonial.initials}"
            }
            div {
              h4 { class: "font-bold", "{testimonial.author}" }
              span { class: "text-sm text-chai-dark/60", "{testimonial.role}" }
            }
          }
          div { class: "testimonial-stars text-chai-gold tracking-widest", "{stars}" }
        }
      }
    }
}

#[component]
pub fn GalleryItem(tile: GalleryTile, index: usize) -> Element {
    let span = match tile.size {
        GallerySize::Large => "md:col-span-2 md:row-span-2",
        GallerySize::Medium => "md:col-span-2",
        GallerySize::Small => "",
    };

    rsx! {
      Reveal {
        motion: Motion::ScaleIn,
        delay_ms: stagger(0, 100, index),
        duration_ms: 500,
        class: "gallery-item gallery-{tile.id} hover-grow relative min-h-48 rounded-2xl overflow-hidden {span}",
        div { class: "absolute inset-0 bg-gradient-to-t from-chai-dark/80 to-transparent flex items-end p-6",
          span { class: "text-chai-cream font-display text-xl", "{tile.title}" }
        }
      }
    }
}

#[component]
pub fn ContactMethodCard(method: ContactMethod, index: usize) -> Element {
    let external = method.is_external();

    rsx! {
      Reveal { delay_ms: stagger(0, 100, index), duration_ms: 500,
        a {
          class: "contact-method hover-lift block bg-white rounded-2xl p-8 text-center shadow-sm",
          href: method.link,
          target: if external { "_blank" },
          rel: if external { "noopener noreferrer" },
          span { class: "text-4xl block mb-3", "{method.icon}" }
          h4 { class: "font-bold mb-1", "{method.label}" }
          p { class: "text-chai-dark/70 break-words", "{method.value}" }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::{GALLERY, TESTIMONIALS};

    #[test]
    fn testimonial_card_shows_author_and_stars() {
        let html = dioxus_ssr::render_element(rsx! {
            TestimonialCard { testimonial: TESTIMONIALS[0], index: 0 }
        });
        assert!(html.contains("Raj Sharma"));
        assert!(html.contains("Regular Customer"));
        assert!(html.contains("★★★★★"));
    }

    #[test]
    fn gallery_tile_spans_by_size() {
        let html = dioxus_ssr::render_element(rsx! {
            GalleryItem { tile: GALLERY[0], index: 0 }
        });
        assert!(html.contains("md:row-span-2"));
        assert!(html.contains("Our Cafe"));
    }
}
