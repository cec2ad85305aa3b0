use dioxus::prelude::*;
use shared::menu::MenuItem;
use shared::motion::stagger;

use crate::Reveal;

#[derive(Props, Clone, PartialEq)]
pub struct MenuCardProps {
    pub item: MenuItem,
    pub index: usize,
}

#[component]
pub fn MenuCard(props: MenuCardProps) -> Element {
    let item = props.item;

    rsx! {
      Reveal { delay_ms: stagger(0, 100, props.index), duration_ms: 500,
        div { class: "menu-card hover-lift relative h-full bg-white rounded-2xl p-6 shadow-sm flex items-start gap-4",
          if item.popular {
            span { class: "popular-badge absolute -top-3 left-6 bg-chai-gold text-chai-dark text-xs font-bold uppercase tracking-wider px-3 py-1 rounded-full",
              "Popular"
            }
          }
          div { class: "flex-grow",
            div { class: "flex items-baseline justify-between gap-4 mb-2",
              h3 { class: "text-lg font-display font-bold", "{item.name}" }
              span { class: "menu-price font-bold text-chai-gold-dark", "{item.price}" }
            }
            p { class: "text-sm text-chai-dark/70", "{item.description}" }
          }
          span { class: "add-btn hover-grow shrink-0 w-9 h-9 rounded-full bg-chai-dark text-chai-cream flex items-center justify-center text-xl",
            "+"
          }
        }
      }
    }
}
