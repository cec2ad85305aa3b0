use dioxus::prelude::*;
use shared::motion::{stagger, Transition};
use shared::nav::{NavState, NAV_ITEMS};
use shared::site::{BRAND_ICON, BRAND_NAME, ORDER_URL};

use crate::Browser;

fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link text-chai-gold border-b-2 border-chai-gold pb-0.5"
    } else {
        "nav-link text-chai-cream/80 hover:text-chai-gold border-b-2 border-transparent pb-0.5"
    }
}

fn link_style(index: usize) -> String {
    Transition {
        duration_ms: 500,
        delay_ms: stagger(0, 100, index),
    }
    .style()
}

#[component]
pub fn Navbar(mut nav: Signal<NavState>, current_path: String) -> Element {
    use_effect(move || Browser::set_body_overflow(nav.read().body_overflow()));
    // Leaving the shell must not strand the page with scrolling locked.
    use_drop(|| Browser::set_body_overflow(""));

    let state = nav();
    let bar_class = if state.scrolled {
        "bg-chai-dark/95 backdrop-blur-md shadow-lg py-3"
    } else {
        "bg-transparent py-6"
    };
    let (links_class, burger_class, overlay_class) = if state.menu_open {
        ("translate-x-0", "is-open", "opacity-100 pointer-events-auto")
    } else {
        ("translate-x-full md:translate-x-0", "", "opacity-0 pointer-events-none")
    };

    rsx! {
        nav { class: "navbar fixed top-0 inset-x-0 z-40 transition-all duration-300 motion-drop-in {bar_class}",
            div { class: "max-w-7xl mx-auto px-6 flex items-center justify-between",
                // Logo area
                Link { to: "/",
                    div { class: "flex items-center gap-2 hover-grow",
                        span { class: "text-3xl", "{BRAND_ICON}" }
                        span { class: "text-2xl font-display font-bold text-chai-cream tracking-tight",
                            "{BRAND_NAME}"
                        }
                    }
                }

                // Menu
                div { class: "nav-links fixed md:static inset-y-0 right-0 w-3/4 md:w-auto z-50 bg-chai-dark md:bg-transparent flex flex-col md:flex-row items-center justify-center gap-8 transition-transform duration-300 {links_class}",
                    for (i, item) in NAV_ITEMS.iter().enumerate() {
                        div {
                            key: "{item.path}",
                            class: "motion motion-fade-down",
                            style: link_style(i),
                            Link {
                                class: link_class(item.is_active(&current_path)),
                                to: item.path,
                                onclick: move |_| nav.write().close_menu(),
                                "{item.label}"
                            }
                        }
                    }

                    a {
                        class: "cta-button cta-primary md:hidden",
                        href: ORDER_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: move |_| nav.write().close_menu(),
                        "Order Now"
                    }
                }

                a {
                    class: "cta-button cta-primary hidden md:inline-flex",
                    href: ORDER_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Order Now"
                }

                button {
                    class: "burger md:hidden relative z-50 flex flex-col gap-1.5 p-2 cursor-pointer {burger_class}",
                    aria_label: "Toggle menu",
                    onclick: move |_| nav.write().toggle_menu(),
                    span { class: "block w-6 h-0.5 bg-chai-cream transition-transform" }
                    span { class: "block w-6 h-0.5 bg-chai-cream transition-opacity" }
                    span { class: "block w-6 h-0.5 bg-chai-cream transition-transform" }
                }

                // Mobile overlay
                div {
                    class: "md:hidden fixed inset-0 z-40 bg-black/60 backdrop-blur-sm transition-opacity duration-300 {overlay_class}",
                    onclick: move |_| nav.write().close_menu(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Routable, PartialEq)]
    enum Fixture {
        #[route("/")]
        Page {},
    }

    /// Mounts a `Navbar` over `state` inside a router at `/`.
    #[component]
    fn Harness(state: NavState) -> Element {
        use_context_provider(|| state);
        rsx! { Router::<Fixture> {} }
    }

    #[component]
    fn Page() -> Element {
        let state = use_context::<NavState>();
        let nav = use_signal(|| state);
        rsx! { Navbar { nav, current_path: "/" } }
    }

    fn render(state: NavState) -> String {
        dioxus_ssr::render_element(rsx! { Harness { state } })
    }

    fn scrolled_to(y: f64) -> NavState {
        let mut state = NavState::default();
        state.on_scroll(y);
        state
    }

    #[test]
    fn solid_bar_only_past_threshold() {
        let html = render(scrolled_to(51.0));
        assert!(html.contains("bg-chai-dark/95 backdrop-blur-md shadow-lg py-3"));
        assert!(!html.contains("bg-transparent py-6"));

        for y in [0.0, 50.0] {
            let html = render(scrolled_to(y));
            assert!(html.contains("bg-transparent py-6"), "{y}");
            assert!(!html.contains("bg-chai-dark/95"), "{y}");
        }
    }

    #[test]
    fn open_menu_slides_in_with_overlay() {
        let mut state = NavState::default();
        state.toggle_menu();
        let html = render(state);
        assert!(html.contains("translate-x-0"));
        assert!(!html.contains("translate-x-full"));
        assert!(html.contains("is-open"));
        assert!(html.contains("opacity-100 pointer-events-auto"));
    }

    #[test]
    fn second_toggle_restores_closed_markup() {
        let closed = render(NavState::default());

        let mut state = NavState::default();
        state.toggle_menu();
        state.toggle_menu();
        let html = render(state);

        assert_eq!(html, closed);
        assert!(html.contains("translate-x-full md:translate-x-0"));
        assert!(html.contains("opacity-0 pointer-events-none"));
        assert!(!html.contains("is-open"));
    }

    #[test]
    fn route_change_renders_a_fresh_bar() {
        let mut state = scrolled_to(900.0);
        state.toggle_menu();
        state.on_route_change();

        assert_eq!(render(state), render(NavState::default()));
    }

    #[test]
    fn current_route_link_is_highlighted() {
        let html = render(NavState::default());
        assert_eq!(html.matches("text-chai-gold border-b-2 border-chai-gold").count(), 1);
        assert_eq!(html.matches("border-transparent").count(), NAV_ITEMS.len() - 1);
        assert!(html.contains("aria-label=\"Toggle menu\""));
    }
}
