use alloc::string::String;
use alloc::sync::Arc;

/// A callback without arguments (`on_drag_start`, `on_drag_end`, `on_unstable`).
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// A callback receiving an item index (`on_position_change`, `on_stable`).
pub type IndexCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Default flick sensitivity: a tenth of the viewport width.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Configuration for [`crate::Carousel`].
///
/// Callbacks are stored in `Arc`s so adapters can clone the options, change a field or two and
/// hand them back via `Carousel::set_options`.
pub struct CarouselOptions {
    /// Number of items in the collection.
    pub count: usize,
    /// The externally controlled index. Out-of-range and negative values are wrapped.
    pub position: i64,
    /// Minimum drag distance (as a fraction of the viewport width) for a release to count as a
    /// flick.
    pub threshold: f64,
    /// Re-measure the viewport on every use instead of caching the width at mount.
    pub dynamic_size: bool,
    /// Passed through to the renderer while a transition is running.
    pub transition_duration: Option<String>,

    pub on_drag_start: Option<Callback>,
    pub on_drag_end: Option<Callback>,
    /// Fired with the new target index whenever it changes.
    pub on_position_change: Option<IndexCallback>,
    /// Fired with the current index when the carousel comes to rest.
    pub on_stable: Option<IndexCallback>,
    /// Fired when the carousel starts moving (drag or transition).
    pub on_unstable: Option<Callback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            position: self.position,
            threshold: self.threshold,
            dynamic_size: self.dynamic_size,
            transition_duration: self.transition_duration.clone(),
            on_drag_start: self.on_drag_start.clone(),
            on_drag_end: self.on_drag_end.clone(),
            on_position_change: self.on_position_change.clone(),
            on_stable: self.on_stable.clone(),
            on_unstable: self.on_unstable.clone(),
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CarouselOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: 0,
            threshold: DEFAULT_THRESHOLD,
            dynamic_size: false,
            transition_duration: None,
            on_drag_start: None,
            on_drag_end: None,
            on_position_change: None,
            on_stable: None,
            on_unstable: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Sets the flick threshold. Non-positive or non-finite values fall back to the default.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_dynamic_size(mut self, dynamic_size: bool) -> Self {
        self.dynamic_size = dynamic_size;
        self
    }

    pub fn with_transition_duration(mut self, duration: Option<impl Into<String>>) -> Self {
        self.transition_duration = duration.map(Into::into);
        self
    }

    pub fn with_on_drag_start(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_drag_start = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_end(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_drag_end = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_position_change(
        mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_position_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_stable(mut self, f: Option<impl Fn(usize) + Send + Sync + 'static>) -> Self {
        self.on_stable = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_unstable(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_unstable = f.map(|f| Arc::new(f) as _);
        self
    }

    /// The threshold actually used for release decisions.
    pub(crate) fn effective_threshold(&self) -> f64 {
        if self.threshold.is_finite() && self.threshold > 0.0 {
            self.threshold
        } else {
            DEFAULT_THRESHOLD
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("position", &self.position)
            .field("threshold", &self.threshold)
            .field("dynamic_size", &self.dynamic_size)
            .field("transition_duration", &self.transition_duration)
            .finish_non_exhaustive()
    }
}
