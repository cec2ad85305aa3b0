use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::nav::NavState;
use shared::schema::Cafe;
use shared::site::BRAND_NAME;

use ui::{Browser, Layout, Navbar, ScrollOffset};
use views::{ExperiencePage, HomePage, MenuPage, StoryPage, VisitPage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        HomePage {},
        #[route("/story")]
        StoryPage {},
        #[route("/menu")]
        MenuPage {},
        #[route("/experience")]
        ExperiencePage {},
        #[route("/visit")]
        VisitPage {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let structured_data = use_hook(|| match Cafe::new().to_json_ld() {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Skipping structured data: {}", e);
            None
        }
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "{BRAND_NAME}" }
        if let Some(json) = structured_data {
            document::Script { r#type: "application/ld+json", "{json}" }
        }

        Router::<Route> {}
    }
}

/// Persistent chrome around every page: navbar, footer, scroll tracking.
#[component]
fn Shell() -> Element {
    let mut nav = use_signal(NavState::default);
    let route = use_route::<Route>();
    let scroll_y = use_memo(move || nav.read().scroll_y);

    use_context_provider(|| ScrollOffset(scroll_y));

    use_future(move || async move {
        let mut events = Browser::scroll_events();
        while let Ok(y) = events.recv::<f64>().await {
            nav.write().on_scroll(y);
        }
    });

    // New page starts at the top with the mobile menu closed.
    use_effect(use_reactive((&route,), move |(route,)| {
        info!("Navigated to {}", route);
        Browser::scroll_to_top();
        nav.write().on_route_change();
    }));

    rsx! {
        Layout {
            Navbar { nav, current_path: route.to_string() }
            main { class: "flex-grow",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::h1_count;

    /// The full app shell at its initial route, `/`.
    fn render_root() -> String {
        // Router props must be built inside a Dioxus runtime, so wrap it in a root component.
        #[allow(non_snake_case)]
        fn Root() -> Element {
            rsx! { Router::<Route> {} }
        }
        let mut dom = VirtualDom::new(Root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn home_route_renders_its_heading_once() {
        let html = render_root();
        assert_eq!(h1_count(&html), 1);
        assert!(html.contains("Welcome to"));
        assert!(html.contains("View Menu"));
    }

    #[test]
    fn shell_starts_at_top_with_menu_closed() {
        let html = render_root();
        assert!(html.contains("bg-transparent py-6"));
        assert!(!html.contains("bg-chai-dark/95"));
        assert!(html.contains("translate-x-full"));
        assert!(!html.contains("is-open"));
        // Parallax reads the shell's scroll offset.
        assert!(html.contains("translate3d(0, 0.0px, 0)"));
    }

    #[test]
    fn shell_wraps_pages_in_navbar_and_footer() {
        let html = render_root();
        assert!(html.contains("<nav"));
        assert!(html.contains("<footer"));
        assert!(html.contains("<main"));
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        for path in ["/", "/story", "/menu", "/experience", "/visit"] {
            let route: Route = path.parse().unwrap();
            assert_eq!(route.to_string(), path);
        }
    }
}
