use dioxus::document;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

/// Reports `window.scrollY` on every scroll event, plus once on start.
const SCROLL_LISTENER: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener("scroll", report, { passive: true });
    report();
    await new Promise(() => {});
"#;

/// Helper to abstract the few browser side effects the site needs.
pub struct Browser;

impl Browser {
    pub fn scroll_to_top() {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Hand the user agent a new location, e.g. a `mailto:` URI.
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    pub fn open(uri: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(uri) {
                warn!("Failed to navigate to {}: {:?}", uri, e);
            }
        }
    }

    /// Set `document.body.style.overflow`; `""` restores the stylesheet value.
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    pub fn set_body_overflow(value: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            if let Err(e) = body.style().set_property("overflow", value) {
                warn!("Failed to set body overflow: {:?}", e);
            }
        }
    }

    /// Stream of window scroll offsets; read it with `recv::<f64>()`.
    pub fn scroll_events() -> document::Eval {
        document::eval(SCROLL_LISTENER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_effects_are_inert_off_the_browser() {
        Browser::set_body_overflow("hidden");
        Browser::set_body_overflow("");
        Browser::open("mailto:someone@example.com");
        Browser::scroll_to_top();
    }
}
