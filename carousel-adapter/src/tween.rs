/// Eases the strip offset, in percent of the viewport width, towards a rest position.
///
/// Offsets follow the carousel's presentation: `-100` shows the current item, `0` the previous
/// one and `-200` the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetTween {
    pub from_percent: f64,
    pub to_percent: f64,
    pub start_ms: u64,
    /// A zero duration completes on the first sample.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl OffsetTween {
    pub fn new(
        from_percent: f64,
        to_percent: f64,
        start_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            from_percent,
            to_percent,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Fraction of the duration elapsed at `now_ms`, in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).min(1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn offset_at(&self, now_ms: u64) -> f64 {
        let eased = self.easing.sample(self.progress(now_ms));
        self.from_percent + (self.to_percent - self.from_percent) * eased
    }

    /// Whether the tween already rests at `offset_percent`.
    pub fn heads_to(&self, offset_percent: f64) -> bool {
        (self.to_percent - offset_percent).abs() < 1e-9
    }

    /// Aims at a new rest offset, starting from wherever the strip is at `now_ms`.
    pub fn redirect(&mut self, now_ms: u64, to_percent: f64, duration_ms: u64) {
        *self = Self::new(
            self.offset_at(now_ms),
            to_percent,
            now_ms,
            duration_ms,
            self.easing,
        );
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Maps a CSS timing-function keyword onto the closest curve.
    ///
    /// `ease` has no exact counterpart here and maps to [`Easing::SmoothStep`].
    pub fn from_css(s: &str) -> Option<Self> {
        match s.trim() {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::SmoothStep),
            "ease-out" => Some(Self::EaseOutCubic),
            "ease-in-out" => Some(Self::EaseInOutCubic),
            _ => None,
        }
    }

    /// Eased fraction for a linear `t` in `[0, 1]`.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
