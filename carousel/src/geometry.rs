/// Measurements supplied by the rendering layer.
///
/// Returning `None` means the element is not mounted (or not measurable right now). Every
/// computation that needs a missing value degrades to "no movement".
pub trait Geometry {
    /// Width of the visible viewport, in pixels.
    fn viewport_width(&self) -> Option<f64>;
    /// Horizontal offset of the sliding strip relative to the viewport, in pixels.
    ///
    /// The strip holds three slots, so a centered strip sits at `-viewport_width`.
    fn strip_offset(&self) -> Option<f64>;
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn viewport_width(&self) -> Option<f64> {
        (**self).viewport_width()
    }

    fn strip_offset(&self) -> Option<f64> {
        (**self).strip_offset()
    }
}

/// Plain-value geometry, for hosts that measure once per event (and for tests).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedGeometry {
    pub viewport_width: Option<f64>,
    pub strip_offset: Option<f64>,
}

impl FixedGeometry {
    pub fn new(viewport_width: f64, strip_offset: f64) -> Self {
        Self {
            viewport_width: Some(viewport_width),
            strip_offset: Some(strip_offset),
        }
    }

    /// A strip resting on its center slot.
    pub fn centered(viewport_width: f64) -> Self {
        Self::new(viewport_width, -viewport_width)
    }

    /// A strip displaced by `position` items from center (positive = towards the next item).
    pub fn at_position(viewport_width: f64, position: f64) -> Self {
        Self::new(viewport_width, (-position - 1.0) * viewport_width)
    }

    /// Geometry of an unmounted element.
    pub fn unmounted() -> Self {
        Self::default()
    }
}

impl Geometry for FixedGeometry {
    fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    fn strip_offset(&self) -> Option<f64> {
        self.strip_offset
    }
}

/// Returns a width usable as a divisor, or `None`.
pub(crate) fn usable_width(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}
