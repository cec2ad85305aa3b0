use dioxus::prelude::*;
use shared::motion::{Motion, Transition};

/// Plays an entry animation the first time its content scrolls into view.
///
/// Until then the content sits in the hidden `motion-pending` state. Re-keying a
/// `Reveal` (or any ancestor) remounts it and arms the animation again.
#[component]
pub fn Reveal(
    #[props(default)] motion: Motion,
    #[props(default)] delay_ms: u32,
    #[props(default = 800)] duration_ms: u32,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let mut visible = use_signal(|| false);
    let motion_class = motion.class_when(visible());
    let style = Transition {
        duration_ms,
        delay_ms,
    }
    .style();

    rsx! {
        div {
            class: "motion {motion_class} {class}",
            style: "{style}",
            onvisible: move |evt| {
                // Once shown, stays shown.
                if !visible() && evt.is_intersecting().unwrap_or_default() {
                    visible.set(true);
                }
            },
            {children}
        }
    }
}
