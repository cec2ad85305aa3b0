use crate::components::Footer;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      // Grain overlay
      div { class: "fixed inset-0 z-50 pointer-events-none opacity-[0.04] grain-overlay h-full w-full" }

      // Main container
      div { class: "relative flex flex-col min-h-screen bg-chai-cream text-chai-dark",
        {children}
        Footer {}
      }
    }
}
