//! Motion parameters for entry animations and the home hero parallax.
//!
//! Timing itself is done by CSS keyframes; this module only decides which
//! animation runs, for how long and after what delay.

/// Entry animation, mapped onto a keyframe class in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    FadeUp,
    FadeDown,
    FadeIn,
    /// Enters from the left.
    SlideLeft,
    /// Enters from the right.
    SlideRight,
    ScaleIn,
}

/// Class held by content that has not entered the viewport yet.
pub const PENDING_CLASS: &str = "motion-pending";

impl Motion {
    pub fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "motion-fade-up",
            Motion::FadeDown => "motion-fade-down",
            Motion::FadeIn => "motion-fade-in",
            Motion::SlideLeft => "motion-slide-left",
            Motion::SlideRight => "motion-slide-right",
            Motion::ScaleIn => "motion-scale-in",
        }
    }

    /// Keyframe class once `visible`, otherwise the hidden pending state.
    /// The keyframes start the moment the class is swapped in.
    pub fn class_when(self, visible: bool) -> &'static str {
        if visible {
            self.class()
        } else {
            PENDING_CLASS
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            delay_ms: 0,
        }
    }
}

impl Transition {
    pub fn style(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-delay: {}ms;",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Delay for the `index`-th element of a staggered list.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

/// Clamped linear map of `value` from `input` onto `output`.
fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let t = ((value - input.0) / (input.1 - input.0)).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

/// Home hero transform for a given vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    /// Background drift in px.
    pub translate_y: f64,
    /// Foreground content opacity.
    pub opacity: f64,
}

impl HeroParallax {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            translate_y: interpolate(scroll_y, (0.0, 500.0), (0.0, 150.0)),
            opacity: interpolate(scroll_y, (0.0, 300.0), (1.0, 0.0)),
        }
    }

    pub fn background_style(&self) -> String {
        format!("transform: translate3d(0, {:.1}px, 0);", self.translate_y)
    }

    pub fn content_style(&self) -> String {
        format!("opacity: {:.3};", self.opacity)
    }
}
