use core::fmt;

use carousel::{Carousel, CarouselOptions, PointerId, Presentation, SlideDirection};

use crate::input::find_touch;
use crate::strip::{DEFAULT_DURATION_MS, parse_duration_ms};
use crate::{Easing, GestureListeners, InputEvent, ListenerSession, StripAnimator, Touch};

/// A framework-neutral controller that wraps a [`Carousel`] and routes raw input into it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` when the viewport is laid out
/// - `handle(event, now_ms)` for mouse/touch/transition events
/// - `tick(now_ms)` each frame while `is_animating()` (for hosts without CSS-like transitions)
///
/// Render from `presentation()`; `strip().offset_percent()` is the animated strip offset.
pub struct Controller<L: GestureListeners = ()> {
    c: Carousel,
    strip: StripAnimator,
    listeners: L,
    session: Option<ListenerSession<L::Target>>,
}

impl Controller<()> {
    pub fn new(options: CarouselOptions) -> Self {
        Self::with_listeners(options, ())
    }
}

impl<L: GestureListeners> Controller<L> {
    pub fn with_listeners(options: CarouselOptions, listeners: L) -> Self {
        let duration_ms = tween_duration_ms(&options);
        Self {
            c: Carousel::new(options),
            strip: StripAnimator::new(duration_ms, Easing::default()),
            listeners,
            session: None,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    /// Direct access to the engine. Call [`Controller::sync`] after mutating it.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    pub fn strip(&self) -> &StripAnimator {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut StripAnimator {
        &mut self.strip
    }

    pub fn listeners(&self) -> &L {
        &self.listeners
    }

    pub fn session(&self) -> Option<&ListenerSession<L::Target>> {
        self.session.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.strip.is_animating()
    }

    pub fn presentation(&self) -> Presentation {
        self.c.presentation(&self.strip)
    }

    /// Reports the laid-out viewport width. The first report mounts the carousel.
    pub fn on_viewport_width(&mut self, width: f64) {
        self.strip.set_viewport_width(Some(width));
        if !self.c.is_mounted() {
            self.c.mount(&self.strip);
        }
    }

    /// Replaces the carousel options; the tween picks up a changed `transition_duration`.
    pub fn set_options(&mut self, options: CarouselOptions, now_ms: u64) {
        self.c.set_options(options);
        self.sync(now_ms);
    }

    /// The viewport went away: any gesture is abandoned, a pending transition is settled at its
    /// target and measurements are dropped.
    pub fn on_unmount(&mut self, now_ms: u64) {
        if let Some(pointer) = self.c.drag().map(|d| d.pointer) {
            self.c.cancel_drag(pointer);
        }
        self.close_session();
        // No transition end can arrive without a viewport.
        if self.c.is_transitioning() {
            self.c.on_transition_complete();
        }
        self.sync(now_ms);
        self.strip.set_viewport_width(None);
        self.c.unmount();
    }

    /// Re-aligns the strip with the carousel state.
    ///
    /// The tween duration is re-read from the current options, so edits made through
    /// [`Controller::carousel_mut`] apply to the next transition.
    pub fn sync(&mut self, now_ms: u64) {
        self.strip.set_duration_ms(tween_duration_ms(self.c.options()));
        let p = self.c.presentation(&self.strip);
        self.strip.sync(&p, now_ms);
    }

    pub fn set_position(&mut self, position: i64, now_ms: u64) -> bool {
        let changed = self.c.set_position(position);
        self.sync(now_ms);
        changed
    }

    pub fn slide(&mut self, direction: SlideDirection, now_ms: u64) -> bool {
        let accepted = self.c.slide(direction);
        self.sync(now_ms);
        accepted
    }

    /// Advances the strip tween; completes the carousel transition when it finishes.
    ///
    /// Returns `true` on the tick the transition completed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.strip.tick(now_ms) {
            return false;
        }
        self.c.on_transition_complete();
        self.sync(now_ms);
        true
    }

    /// Routes one input event. Returns `true` if the carousel accepted it.
    pub fn handle(&mut self, event: InputEvent<'_, L::Target>, now_ms: u64) -> bool {
        self.strip.sample(now_ms);
        let handled = self.route(event);
        self.sync(now_ms);
        handled
    }

    fn route(&mut self, event: InputEvent<'_, L::Target>) -> bool {
        match event {
            InputEvent::MouseDown { x } => self.c.begin_drag(&self.strip, x, None),
            // A touch drag owns the pointer id, so mouse moves/ups cannot interfere with it.
            InputEvent::MouseMove { x } => self.c.update_drag(&self.strip, None, x),
            InputEvent::MouseUp => self.c.end_drag(&self.strip, None),
            InputEvent::MouseLeave => {
                let released = self.c.release_drag(&self.strip);
                if released {
                    self.close_session();
                }
                released
            }
            InputEvent::TouchStart { target, touches } => {
                let Some(touch) = touches.first() else {
                    return false;
                };
                if !self.c.begin_drag(&self.strip, touch.x, Some(touch.id)) {
                    return false;
                }
                self.open_session(target, touch.id);
                true
            }
            InputEvent::TouchMove(touches) => match self.tracked_touch(touches) {
                Some((id, x)) => self.c.update_drag(&self.strip, Some(id), x),
                None => false,
            },
            InputEvent::TouchEnd(touches) => match self.tracked_touch(touches) {
                Some((id, _)) => {
                    let ended = self.c.end_drag(&self.strip, Some(id));
                    self.close_session();
                    ended
                }
                None => false,
            },
            InputEvent::TouchCancel(touches) => match self.tracked_touch(touches) {
                Some((id, _)) => {
                    let cancelled = self.c.cancel_drag(Some(id));
                    self.close_session();
                    cancelled
                }
                None => false,
            },
            InputEvent::TransitionEnd => {
                self.c.on_transition_complete();
                true
            }
        }
    }

    /// The changed touch belonging to the active touch drag, if any.
    fn tracked_touch(&self, touches: &[Touch]) -> Option<(PointerId, f64)> {
        let id = self.c.drag()?.pointer?;
        find_touch(touches, id).map(|t| (t.id, t.x))
    }

    fn open_session(&mut self, target: L::Target, touch: PointerId) {
        if let Some(session) = &mut self.session {
            if session.target == target {
                session.touch = touch;
                return;
            }
        }
        self.close_session();
        self.listeners.attach(&target);
        self.session = Some(ListenerSession { target, touch });
    }

    fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.listeners.detach(&session.target);
        }
    }
}

fn tween_duration_ms(options: &CarouselOptions) -> u64 {
    options
        .transition_duration
        .as_deref()
        .and_then(parse_duration_ms)
        .unwrap_or(DEFAULT_DURATION_MS)
}

impl<L: GestureListeners> Drop for Controller<L> {
    fn drop(&mut self) {
        self.close_session();
    }
}

impl<L: GestureListeners + fmt::Debug> fmt::Debug for Controller<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("carousel", &self.c)
            .field("strip", &self.strip)
            .field("listeners", &self.listeners)
            .field("session_touch", &self.session.as_ref().map(|s| s.touch))
            .finish()
    }
}
