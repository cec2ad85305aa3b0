use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use shared::menu::Category;

mod category_toggle;
mod item;

pub use category_toggle::CategoryToggle;
pub use item::MenuCard;

/// Category switcher plus the grid for the selected category.
#[component]
pub fn MenuBoard(initial: Option<Category>) -> Element {
    let selected = use_signal(|| initial.unwrap_or_default());

    use_effect(move || info!("Showing menu category: {}", selected()));

    rsx! {
      CategoryToggle { selected }
      // A keyed list of one: a new key remounts the grid so the cards replay their entry.
      for category in std::iter::once(selected()) {
        MenuGrid { key: "{category}", category }
      }
    }
}

#[component]
pub fn MenuGrid(category: Category) -> Element {
    rsx! {
      div {
        class: "menu-grid motion motion-fade-up grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
        style: "animation-duration: 500ms;",
        for (i, item) in category.items().iter().enumerate() {
          MenuCard { key: "{item.name}", item: *item, index: i }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn grid_shows_only_the_selected_category() {
        let html = dioxus_ssr::render_element(rsx! {
            MenuGrid { category: Category::Sides }
        });

        assert_eq!(count(&html, "class=\"menu-card "), Category::Sides.items().len());
        for item in Category::Sides.items() {
            assert!(html.contains(item.name), "missing {}", item.name);
            assert!(html.contains(item.price));
        }
        for other in Category::ALL.into_iter().filter(|c| *c != Category::Sides) {
            for item in other.items() {
                assert!(
                    !html.contains(&format!(">{}<", item.name)),
                    "{} leaked into sides",
                    item.name
                );
            }
        }
    }

    #[test]
    fn popular_items_get_a_badge() {
        let html = dioxus_ssr::render_element(rsx! {
            MenuGrid { category: Category::Chai }
        });
        let popular = Category::Chai.items().iter().filter(|i| i.popular).count();
        assert_eq!(count(&html, ">Popular<"), popular);
    }

    #[test]
    fn board_starts_on_the_default_category() {
        let html = dioxus_ssr::render_element(rsx! { MenuBoard {} });
        assert!(html.contains(">Chai Cutting<"));
        assert!(!html.contains(">Vadapav<"));
        assert_eq!(count(&html, "category-btn"), Category::ALL.len());
    }

    #[test]
    fn board_honours_an_initial_category() {
        let html = dioxus_ssr::render_element(rsx! {
            MenuBoard { initial: Category::Snacks }
        });
        assert!(html.contains(">Vadapav<"));
        assert!(!html.contains(">Chai Cutting<"));
    }
}
