use dioxus::prelude::*;
use shared::menu::Category;

#[component]
pub fn CategoryToggle(mut selected: Signal<Category>) -> Element {
    let active_class = "bg-chai-dark text-chai-cream shadow-md";
    let inactive_class = "bg-white text-chai-dark/70 hover:text-chai-dark hover:bg-white/70";

    rsx! {
      div { class: "flex flex-wrap justify-center gap-3 mb-12",
        for category in Category::ALL {
          button {
            key: "{category}",
            class: "category-btn hover-grow press-shrink flex items-center gap-2 px-5 py-3 rounded-full text-sm font-semibold transition-colors duration-200 cursor-pointer",
            class: if selected() == category { "{active_class}" } else { "{inactive_class}" },
            "data-category": category.id(),
            onclick: move |_| selected.set(category),
            span { class: "text-lg", "{category.icon()}" }
            span { "{category.label()}" }
          }
        }
      }
    }
}
