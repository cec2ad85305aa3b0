use dioxus::prelude::*;

/// Window scroll offset, provided by the navigation shell.
#[derive(Clone, Copy)]
pub struct ScrollOffset(pub Memo<f64>);

/// Current scroll offset, or 0 when rendered outside the shell.
pub fn use_scroll_offset() -> f64 {
    try_use_context::<ScrollOffset>()
        .map(|offset| (offset.0)())
        .unwrap_or_default()
}
