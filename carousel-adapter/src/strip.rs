use carousel::{Geometry, Presentation};

use crate::{Easing, OffsetTween};

/// Duration used when the carousel has no parsable `transition_duration`.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Parses a CSS-like duration (`"300ms"`, `"0.25s"`) into milliseconds.
pub fn parse_duration_ms(s: &str) -> Option<u64> {
    let s = s.trim();
    let (value, scale) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, 1000.0)
    } else {
        return None;
    };
    let value: f64 = value.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * scale + 0.5) as u64)
}

/// A simulated sliding strip for hosts without a transition engine of their own.
///
/// It follows the carousel's [`Presentation`]: pointer-driven offsets are applied directly,
/// transitions are tweened. It doubles as the [`Geometry`] the carousel measures.
#[derive(Clone, Debug)]
pub struct StripAnimator {
    width: Option<f64>,
    offset_percent: f64,
    tween: Option<OffsetTween>,
    duration_ms: u64,
    easing: Easing,
}

impl Default for StripAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, Easing::default())
    }
}

impl StripAnimator {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            width: None,
            offset_percent: -100.0,
            tween: None,
            duration_ms,
            easing,
        }
    }

    pub fn set_viewport_width(&mut self, width: Option<f64>) {
        self.width = width;
    }

    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn offset_percent(&self) -> f64 {
        self.offset_percent
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Aligns the strip with a freshly computed presentation.
    pub fn sync(&mut self, p: &Presentation, now_ms: u64) {
        if p.dragging || !p.transitioning {
            self.tween = None;
            self.offset_percent = p.offset_percent;
            return;
        }
        match &mut self.tween {
            Some(t) if t.heads_to(p.offset_percent) => {}
            Some(t) => t.redirect(now_ms, p.offset_percent, self.duration_ms),
            None => {
                self.tween = Some(OffsetTween::new(
                    self.offset_percent,
                    p.offset_percent,
                    now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
    }

    /// Moves the strip to where the running tween is at `now_ms`, without finishing it.
    pub fn sample(&mut self, now_ms: u64) {
        if let Some(t) = &self.tween {
            self.offset_percent = t.offset_at(now_ms);
        }
    }

    /// Advances the tween. Returns `true` when it finished on this tick.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(t) = self.tween else {
            return false;
        };
        if t.is_done(now_ms) {
            self.tween = None;
            self.offset_percent = t.to_percent;
            return true;
        }
        self.offset_percent = t.offset_at(now_ms);
        false
    }
}

impl Geometry for StripAnimator {
    fn viewport_width(&self) -> Option<f64> {
        self.width
    }

    fn strip_offset(&self) -> Option<f64> {
        self.width.map(|w| self.offset_percent / 100.0 * w)
    }
}
