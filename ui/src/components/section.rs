use dioxus::prelude::*;
use shared::motion::Motion;

use crate::Reveal;

/// Banner at the top of every inner page. `children` is the `h1` content.
#[component]
pub fn PageHero(
    #[props(into)] tag: String,
    #[props(into)] subtitle: String,
    #[props(into)] backdrop: String,
    children: Element,
) -> Element {
    rsx! {
      section { class: "page-hero relative flex items-center justify-center min-h-[60vh] pt-24 text-center overflow-hidden {backdrop}",
        div { class: "absolute inset-0 bg-gradient-to-b from-chai-dark/80 via-chai-dark/60 to-chai-dark/90" }
        Reveal { class: "relative z-10 max-w-3xl px-6 space-y-4",
          SectionTag { "{tag}" }
          h1 { class: "text-5xl md:text-6xl font-display font-bold text-chai-cream", {children} }
          p { class: "text-lg text-chai-cream/80", "{subtitle}" }
        }
      }
    }
}

#[component]
pub fn SectionHeader(#[props(into)] tag: String, children: Element) -> Element {
    rsx! {
      Reveal { class: "text-center mb-14 space-y-3",
        SectionTag { "{tag}" }
        h2 { class: "text-4xl md:text-5xl font-display font-bold", {children} }
      }
    }
}

#[component]
pub fn SectionTag(children: Element) -> Element {
    rsx! {
      span { class: "inline-block text-xs font-semibold uppercase tracking-[0.3em] text-chai-gold",
        {children}
      }
    }
}

#[component]
pub fn Highlight(children: Element) -> Element {
    rsx! {
      span { class: "text-chai-gold italic", {children} }
    }
}

/// A `Reveal` that slides in from one side, for two-column layouts.
#[component]
pub fn SideReveal(
    from_left: bool,
    #[props(default)] delay_ms: u32,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let motion = if from_left {
        Motion::SlideLeft
    } else {
        Motion::SlideRight
    };

    rsx! {
      Reveal { motion, delay_ms, duration_ms: 1000, class, {children} }
    }
}
