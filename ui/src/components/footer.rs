use dioxus::prelude::*;
use shared::menu::FOOTER_FAVOURITES;
use shared::nav::FOOTER_LINKS;
use shared::site;

#[component]
pub fn Footer() -> Element {
    let mailto = site::mailto();

    rsx! {
      footer { class: "bg-chai-dark text-chai-cream/80 pt-16 pb-8 px-6",
        div { class: "max-w-7xl mx-auto grid gap-12 md:grid-cols-4",
          div { class: "space-y-4",
            Link { to: "/", class: "flex items-center gap-2",
              span { class: "text-3xl", "{site::BRAND_ICON}" }
              span { class: "text-2xl font-display font-bold text-chai-cream", "{site::BRAND_NAME}" }
            }
            p { class: "text-sm leading-relaxed",
              "{site::TAGLINE}. Open {site::HOURS} daily."
            }
          }

          div { class: "footer-column",
            h4 { "Quick Links" }
            for link in FOOTER_LINKS {
              Link { key: "{link.label}", to: link.path, "{link.label}" }
            }
          }
          div { class: "footer-column",
            h4 { "Popular Items" }
            for name in FOOTER_FAVOURITES {
              Link { key: "{name}", to: "/menu", "{name}" }
            }
          }
          div { class: "footer-column",
            h4 { "Contact" }
            a { href: "{mailto}", "Email Us" }
            a { href: site::PHONE_URI, "{site::PHONE_DISPLAY}" }
            a {
              href: site::FACEBOOK_URL,
              target: "_blank",
              rel: "noopener noreferrer",
              "Facebook"
            }
            a {
              href: site::ORDER_URL,
              target: "_blank",
              rel: "noopener noreferrer",
              "Order Online"
            }
          }
        }

        div { class: "max-w-7xl mx-auto mt-12 pt-6 border-t border-white/10 flex flex-col md:flex-row justify-between gap-2 text-xs tracking-wide text-chai-cream/50",
          p { "{site::COPYRIGHT}" }
          p { "{site::ADDRESS}" }
        }
      }
    }
}
