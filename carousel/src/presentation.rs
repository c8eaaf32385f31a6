use alloc::string::String;

use crate::{DisplaySlot, SlideDirection};

/// Everything a renderer needs for one frame.
///
/// Produced by [`crate::Carousel::presentation`]; recompute it after every mutation.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Presentation {
    /// Previous, current and next slot; `None` for an empty carousel.
    pub slots: Option<[DisplaySlot; 3]>,
    /// Horizontal offset of the strip in percent of the viewport width.
    ///
    /// While dragging this follows the pointer; otherwise it is the resting target the renderer
    /// should transition to.
    pub offset_percent: f64,
    pub dragging: bool,
    pub transitioning: bool,
    pub slide_direction: Option<SlideDirection>,
    /// The configured duration, only while a transition is running.
    pub transition_duration: Option<String>,
}

impl Presentation {
    /// The strip offset in pixels for a viewport of `width`.
    pub fn offset_px(&self, width: f64) -> f64 {
        self.offset_percent / 100.0 * width
    }
}

/// Offset of the strip at rest: centered, or one slot over while sliding.
pub(crate) fn rest_offset_percent(direction: Option<SlideDirection>) -> f64 {
    match direction {
        None => -100.0,
        Some(SlideDirection::Left) => 0.0,
        Some(SlideDirection::Right) => -200.0,
    }
}
