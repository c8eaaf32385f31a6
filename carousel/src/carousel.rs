use crate::geometry::usable_width;
use crate::index::{step, wrap};
use crate::presentation::rest_offset_percent;
use crate::{
    CarouselOptions, CarouselState, DisplaySlot, DragSession, Geometry, PointerId, Presentation,
    SlideDirection, display_slots,
};

/// Half an item: crossing it during a drag moves the anchor to the neighbor.
const HALF: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Baseline {
    target_index: usize,
    stable: bool,
}

/// A headless carousel engine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects; measurements are read through a [`Geometry`] passed to the
///   operations that need them.
/// - Your adapter feeds it pointer events, external position changes and "transition finished"
///   notifications.
/// - Rendering is described by [`Carousel::presentation`], a pure function of the state.
///
/// Every public mutation is diffed against the state it started from, and the `on_*` callbacks of
/// [`CarouselOptions`] fire once per change. See [`Carousel::batch_update`] to coalesce several
/// mutations.
///
/// For raw event routing and tween-driven settling, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    state: CarouselState,
    cached_width: Option<f64>,
    last_position: i64,

    notify_depth: usize,
    baseline: Option<Baseline>,
}

impl Carousel {
    /// Creates a carousel resting on `options.position` (wrapped into range).
    pub fn new(options: CarouselOptions) -> Self {
        let index = wrap(options.position, options.count);
        cdebug!(
            count = options.count,
            position = options.position,
            index,
            "Carousel::new"
        );
        Self {
            state: CarouselState::at(index),
            cached_width: None,
            last_position: options.position,
            options,
            notify_depth: 0,
            baseline: None,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn target_index(&self) -> usize {
        self.state.target_index
    }

    pub fn slide_direction(&self) -> Option<SlideDirection> {
        self.state.slide_direction
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag.is_some()
    }

    pub fn is_stable(&self) -> bool {
        self.state.is_stable()
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.state.drag.as_ref()
    }

    /// Applies new options.
    ///
    /// A changed `count` re-wraps the indexes into the new range; a changed `count` or a
    /// `position` other than the last applied one then reconciles the external position (see
    /// [`Carousel::reconcile_position`]).
    pub fn set_options(&mut self, options: CarouselOptions) {
        let prev_count = self.options.count;
        self.options = options;
        ctrace!(
            count = self.options.count,
            position = self.options.position,
            "Carousel::set_options"
        );

        let count_changed = self.options.count != prev_count;
        let position_changed = self.options.position != self.last_position;
        self.batch_update(|c| {
            if count_changed {
                let count = c.options.count;
                c.state.current_index = wrap(c.state.current_index as i64, count);
                c.state.target_index = wrap(c.state.target_index as i64, count);
            }
            if count_changed || position_changed {
                if c.state.drag.is_none() {
                    c.last_position = c.options.position;
                }
                c.reconcile(c.options.position);
            }
        });
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_count(&mut self, count: usize) {
        self.update_options(|o| o.count = count);
    }

    /// Batches multiple mutations into a single round of notifications.
    ///
    /// `on_position_change`, `on_stable` and `on_unstable` compare the state after the outermost
    /// batch with the state before it, so intermediate flips inside the batch are not reported.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        if self.notify_depth == 0 {
            self.baseline = Some(self.snapshot());
        }
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);
        if self.notify_depth == 0 {
            if let Some(before) = self.baseline.take() {
                self.notify_since(before);
            }
        }
    }

    fn snapshot(&self) -> Baseline {
        Baseline {
            target_index: self.state.target_index,
            stable: self.state.is_stable(),
        }
    }

    fn notify_since(&self, before: Baseline) {
        if before.target_index != self.state.target_index {
            if let Some(cb) = &self.options.on_position_change {
                cb(self.state.target_index);
            }
        }
        let stable = self.state.is_stable();
        if before.stable == stable {
            return;
        }
        if stable {
            if let Some(cb) = &self.options.on_stable {
                cb(self.state.current_index);
            }
        } else if let Some(cb) = &self.options.on_unstable {
            cb();
        }
    }

    fn fire_drag_start(&self) {
        if let Some(cb) = &self.options.on_drag_start {
            cb();
        }
    }

    fn fire_drag_end(&self) {
        if let Some(cb) = &self.options.on_drag_end {
            cb();
        }
    }

    /// Reports a new value of the externally controlled position.
    ///
    /// The last applied value is remembered; the position is only reconciled when it differs.
    /// A value reported during a drag is not applied, so reporting it again afterwards moves the
    /// carousel. Returns `true` if the position was reconciled.
    pub fn set_position(&mut self, position: i64) -> bool {
        if position == self.last_position {
            return false;
        }
        self.options.position = position;
        if self.state.drag.is_some() {
            ctrace!(position, "Carousel::set_position: drag in progress, deferred");
            return false;
        }
        self.last_position = position;
        self.reconcile_position(position);
        true
    }

    /// Moves towards `position` (wrapped into range) unless a drag is in progress.
    ///
    /// A single step forward or backward animates like a flick would; anything further snaps
    /// immediately.
    pub fn reconcile_position(&mut self, position: i64) {
        self.batch_update(|c| c.reconcile(position));
    }

    fn reconcile(&mut self, position: i64) {
        if self.state.drag.is_some() {
            ctrace!(position, "Carousel::reconcile: drag in progress, ignored");
            return;
        }
        let count = self.count();
        let index = wrap(position, count);
        if index == self.state.target_index {
            return;
        }
        if count > 0 {
            let distance = wrap(index as i64 - self.state.current_index as i64, count);
            if distance == 1 {
                self.slide_to(SlideDirection::Right);
                return;
            }
            if distance == count - 1 {
                self.slide_to(SlideDirection::Left);
                return;
            }
        }
        ctrace!(from = self.state.current_index, to = index, "Carousel::reconcile: snap");
        self.state = CarouselState::at(index);
    }

    /// Starts an animated one-step move towards `direction`.
    ///
    /// `current_index` stays put until [`Carousel::on_transition_complete`]. Ignored (returns
    /// `false`) for an empty carousel or while a drag is active.
    pub fn slide(&mut self, direction: SlideDirection) -> bool {
        if self.count() == 0 || self.state.drag.is_some() {
            ctrace!(?direction, "Carousel::slide ignored");
            return false;
        }
        self.batch_update(|c| c.slide_to(direction));
        true
    }

    fn slide_to(&mut self, direction: SlideDirection) {
        let target = step(self.state.current_index, direction.delta(), self.count());
        ctrace!(?direction, from = self.state.current_index, target, "Carousel::slide");
        self.state.target_index = target;
        self.state.slide_direction = Some(direction);
        self.state.transitioning = true;
    }

    /// The renderer finished the running transition.
    pub fn on_transition_complete(&mut self) {
        self.batch_update(|c| {
            ctrace!(index = c.state.target_index, "Carousel::on_transition_complete");
            c.state.current_index = c.state.target_index;
            c.state.slide_direction = None;
            c.state.transitioning = false;
        });
    }

    /// Captures the viewport width used while `dynamic_size` is off.
    pub fn mount(&mut self, geometry: &impl Geometry) {
        self.cached_width = usable_width(geometry.viewport_width());
        cdebug!(width = ?self.cached_width, "Carousel::mount");
    }

    pub fn unmount(&mut self) {
        self.cached_width = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.cached_width.is_some()
    }

    /// The viewport width, or `0.0` when it is unknown.
    pub fn viewport_width(&self, geometry: &impl Geometry) -> f64 {
        let width = if self.options.dynamic_size {
            usable_width(geometry.viewport_width())
        } else {
            self.cached_width
        };
        width.unwrap_or(0.0)
    }

    /// Continuous position of the strip in items relative to `current_index`.
    ///
    /// `0.0` is centered, positive values lean towards the next item. Returns `0.0` without
    /// geometry.
    pub fn current_slide_position(&self, geometry: &impl Geometry) -> f64 {
        let width = self.viewport_width(geometry);
        if width <= 0.0 {
            return 0.0;
        }
        match geometry.strip_offset() {
            Some(offset) if offset.is_finite() => -(offset / width + 1.0),
            _ => 0.0,
        }
    }

    /// Normalized distance dragged since the last renormalization (positive = forward).
    pub fn drag_delta(&self, geometry: &impl Geometry) -> f64 {
        match &self.state.drag {
            Some(drag) => self.delta_between(geometry, drag.start, drag.current),
            None => 0.0,
        }
    }

    fn delta_between(&self, geometry: &impl Geometry, start: f64, current: f64) -> f64 {
        let width = self.viewport_width(geometry);
        if width <= 0.0 {
            return 0.0;
        }
        -((current - start) / width)
    }

    /// Starts a drag at coordinate `x`.
    ///
    /// Whatever transition is running is interrupted: the drag anchors to the item the strip is
    /// currently closest to. Rejected (returns `false`) while another pointer is dragging.
    pub fn begin_drag(
        &mut self,
        geometry: &impl Geometry,
        x: f64,
        pointer: Option<PointerId>,
    ) -> bool {
        if !x.is_finite() {
            cwarn!(x, "Carousel::begin_drag: non-finite coordinate");
            return false;
        }
        if let Some(drag) = &self.state.drag {
            if !drag.tracks(pointer) {
                ctrace!(?pointer, active = ?drag.pointer, "Carousel::begin_drag: foreign pointer");
                return false;
            }
        }

        self.batch_update(|c| {
            let mut base = c.current_slide_position(geometry);
            let mut delta = 0;
            if base < -HALF {
                delta = -1;
                base += 1.0;
            } else if base > HALF {
                delta = 1;
                base -= 1.0;
            }
            let index = step(c.state.current_index, delta, c.count());
            ctrace!(index, base, x, ?pointer, "Carousel::begin_drag");
            c.state = CarouselState {
                drag: Some(DragSession::new(pointer, base, x)),
                ..CarouselState::at(index)
            };
            c.fire_drag_start();
        });
        true
    }

    /// Moves the active drag to coordinate `x`.
    ///
    /// Ignored unless `pointer` owns the active drag.
    pub fn update_drag(
        &mut self,
        geometry: &impl Geometry,
        pointer: Option<PointerId>,
        x: f64,
    ) -> bool {
        if !x.is_finite() {
            cwarn!(x, "Carousel::update_drag: non-finite coordinate");
            return false;
        }
        let Some(drag) = self.state.drag.filter(|d| d.tracks(pointer)) else {
            return false;
        };

        self.batch_update(|c| {
            let candidate = drag.base + c.delta_between(geometry, drag.start, x);
            let (delta, base, start, flick) = if candidate < -HALF {
                (-1, candidate + 1.0, x, false)
            } else if candidate > HALF {
                (1, candidate - 1.0, x, false)
            } else {
                (0, drag.base, drag.start, true)
            };
            let index = step(c.state.current_index, delta, c.count());
            c.state.current_index = index;
            c.state.target_index = index;
            c.state.drag = Some(DragSession {
                base,
                start,
                current: x,
                flick: drag.flick && flick,
                ..drag
            });
        });
        true
    }

    /// Releases the drag owned by `pointer` and decides where to settle.
    pub fn end_drag(&mut self, geometry: &impl Geometry, pointer: Option<PointerId>) -> bool {
        if !self.state.drag.is_some_and(|d| d.tracks(pointer)) {
            return false;
        }
        self.batch_update(|c| c.release(geometry));
        true
    }

    /// Releases the active drag whichever pointer owns it (e.g. the pointer left the viewport).
    pub fn release_drag(&mut self, geometry: &impl Geometry) -> bool {
        if self.state.drag.is_none() {
            return false;
        }
        self.batch_update(|c| c.release(geometry));
        true
    }

    fn release(&mut self, geometry: &impl Geometry) {
        let Some(drag) = self.state.drag else {
            return;
        };
        let delta = self.drag_delta(geometry);
        let pos = self.current_slide_position(geometry);
        let direction = release_direction(drag.flick, delta, pos, self.options.effective_threshold());
        ctrace!(delta, pos, flick = drag.flick, ?direction, "Carousel::release");

        self.state.drag = None;
        self.state.transitioning = pos != 0.0;
        if let Some(direction) = direction {
            self.slide_to(direction);
        }
        self.fire_drag_end();
    }

    /// Abandons the drag owned by `pointer` without a release decision; the strip animates back.
    ///
    /// A no-op (returning `false`) when no such drag is active.
    pub fn cancel_drag(&mut self, pointer: Option<PointerId>) -> bool {
        if !self.state.drag.is_some_and(|d| d.tracks(pointer)) {
            return false;
        }
        self.batch_update(|c| {
            ctrace!(?pointer, "Carousel::cancel_drag");
            c.state.drag = None;
            c.state.transitioning = true;
            c.fire_drag_end();
        });
        true
    }

    /// The three slots to render around `current_index`.
    pub fn display_slots(&self) -> Option<[DisplaySlot; 3]> {
        display_slots(self.count(), self.state.current_index)
    }

    /// Describes what the renderer should show right now.
    pub fn presentation(&self, geometry: &impl Geometry) -> Presentation {
        let offset_percent = match &self.state.drag {
            Some(drag) => (-drag.base - self.drag_delta(geometry) - 1.0) * 100.0,
            None => rest_offset_percent(self.state.slide_direction),
        };
        let transition_duration = if self.state.transitioning {
            self.options.transition_duration.clone()
        } else {
            None
        };
        Presentation {
            slots: self.display_slots(),
            offset_percent,
            dragging: self.state.drag.is_some(),
            transitioning: self.state.transitioning,
            slide_direction: self.state.slide_direction,
            transition_duration,
        }
    }
}

/// Decides which neighbor a released drag settles on.
///
/// A flick (a drag that never crossed half an item) is judged by the distance travelled; any
/// other drag by where the strip was let go.
pub(crate) fn release_direction(
    flick: bool,
    delta: f64,
    pos: f64,
    threshold: f64,
) -> Option<SlideDirection> {
    if (flick && delta < -threshold) || (!flick && pos < -HALF) {
        Some(SlideDirection::Left)
    } else if (flick && delta > threshold) || (!flick && pos > HALF) {
        Some(SlideDirection::Right)
    } else {
        None
    }
}
