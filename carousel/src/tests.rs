use crate::carousel::release_direction;
use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

const W: f64 = 100.0;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_i64(start as i64, end_exclusive as i64) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ev {
    DragStart,
    DragEnd,
    Position(usize),
    Stable(usize),
    Unstable,
}

type Log = Arc<Mutex<Vec<Ev>>>;

fn recording(options: CarouselOptions) -> (Carousel, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let (a, b, c, d, e) = (
        Arc::clone(&log),
        Arc::clone(&log),
        Arc::clone(&log),
        Arc::clone(&log),
        Arc::clone(&log),
    );
    let options = options
        .with_on_drag_start(Some(move || a.lock().unwrap().push(Ev::DragStart)))
        .with_on_drag_end(Some(move || b.lock().unwrap().push(Ev::DragEnd)))
        .with_on_position_change(Some(move |i| c.lock().unwrap().push(Ev::Position(i))))
        .with_on_stable(Some(move |i| d.lock().unwrap().push(Ev::Stable(i))))
        .with_on_unstable(Some(move || e.lock().unwrap().push(Ev::Unstable)));
    let mut c = Carousel::new(options);
    c.mount(&FixedGeometry::centered(W));
    (c, log)
}

fn take(log: &Log) -> Vec<Ev> {
    core::mem::take(&mut *log.lock().unwrap())
}

/// Geometry matching what a renderer would show for the current presentation, with any
/// transition already applied.
fn live(c: &Carousel) -> FixedGeometry {
    let p = c.presentation(&FixedGeometry::centered(W));
    FixedGeometry::new(W, p.offset_px(W))
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn wrap_is_in_range_and_periodic() {
    let mut rng = Lcg::new(7);
    for _ in 0..2_000 {
        let len = rng.gen_range_usize(1, 50);
        let i = rng.gen_range_i64(-10_000, 10_000);
        let k = rng.gen_range_i64(-20, 20);
        let w = wrap(i, len);
        assert!(w < len, "wrap({i}, {len}) = {w}");
        assert_eq!(w, wrap(i + k * len as i64, len));
    }
}

#[test]
fn wrap_handles_negative_and_empty() {
    assert_eq!(wrap(-1, 5), 4);
    assert_eq!(wrap(-6, 5), 4);
    assert_eq!(wrap(7, 5), 2);
    assert_eq!(wrap(i64::MIN, 3), wrap(i64::MIN % 3 + 3, 3));
    assert_eq!(wrap(42, 0), 0);
    assert_eq!(wrap(-42, 0), 0);
}

#[test]
fn new_wraps_initial_position() {
    let c = Carousel::new(CarouselOptions::new(4).with_position(-1));
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.target_index(), 3);
    assert!(c.is_stable());

    let empty = Carousel::new(CarouselOptions::new(0).with_position(9));
    assert_eq!(empty.current_index(), 0);
}

#[test]
fn single_step_position_change_animates() {
    let (mut c, log) = recording(CarouselOptions::new(5).with_position(2));

    assert!(c.set_position(3));
    assert!(c.is_transitioning());
    assert_eq!(c.target_index(), 3);
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.slide_direction(), Some(SlideDirection::Right));
    assert_eq!(take(&log), [Ev::Position(3), Ev::Unstable]);

    c.on_transition_complete();
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.slide_direction(), None);
    assert_eq!(take(&log), [Ev::Stable(3)]);
}

#[test]
fn multi_step_position_change_snaps() {
    let (mut c, log) = recording(CarouselOptions::new(5).with_position(2));

    c.set_position(0);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.target_index(), 0);
    assert!(!c.is_transitioning());
    assert_eq!(take(&log), [Ev::Position(0)]);
}

#[test]
fn backward_step_wraps_and_slides_left() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.set_position(-1);
    assert_eq!(c.target_index(), 4);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.slide_direction(), Some(SlideDirection::Left));
}

#[test]
fn set_position_only_reconciles_changes() {
    let (mut c, log) = recording(CarouselOptions::new(5));
    c.begin_drag(&live(&c), 200.0, None);
    c.update_drag(&live(&c), None, 120.0);
    c.end_drag(&live(&c), None);
    c.on_transition_complete();
    assert_eq!(c.current_index(), 1);
    take(&log);

    // The host re-renders with the same controlled value: nothing moves.
    assert!(!c.set_position(0));
    assert_eq!(c.current_index(), 1);

    // An explicit reconciliation pulls the carousel back.
    c.reconcile_position(0);
    assert_eq!(c.target_index(), 0);
    assert_eq!(c.slide_direction(), Some(SlideDirection::Left));
}

#[test]
fn position_change_is_ignored_while_dragging() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.mount(&FixedGeometry::centered(W));
    c.begin_drag(&live(&c), 50.0, None);
    c.set_position(1);
    assert_eq!(c.target_index(), 0);
    assert!(c.is_dragging());
}

#[test]
fn position_reported_during_drag_applies_once_reported_again() {
    let (mut c, log) = recording(CarouselOptions::new(5));
    c.begin_drag(&live(&c), 100.0, None);
    assert!(!c.set_position(3));
    assert_eq!(c.target_index(), 0);

    c.end_drag(&live(&c), None);
    assert!(c.is_stable());
    take(&log);

    // The host re-renders with the same controlled value after the drag.
    assert!(c.set_position(3));
    assert_eq!(c.target_index(), 3);
    assert_eq!(c.current_index(), 3);
    assert_eq!(take(&log), [Ev::Position(3)]);
    assert!(!c.set_position(3));
}

#[test]
fn options_position_during_drag_applies_after_it() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.mount(&FixedGeometry::centered(W));
    c.begin_drag(&live(&c), 100.0, None);
    c.update_options(|o| o.position = 2);
    assert_eq!(c.target_index(), 0);
    c.cancel_drag(None);
    c.on_transition_complete();

    // Same options again once the drag is over.
    c.update_options(|o| o.position = 2);
    assert_eq!(c.current_index(), 2);
    assert!(!c.set_position(2));
}

#[test]
fn empty_carousel_degrades() {
    let mut c = Carousel::new(CarouselOptions::new(0));
    assert!(!c.slide(SlideDirection::Right));
    c.set_position(3);
    assert_eq!(c.current_index(), 0);
    assert!(c.display_slots().is_none());
    assert!(c.begin_drag(&FixedGeometry::centered(W), 10.0, None));
    c.update_drag(&FixedGeometry::centered(W), None, -500.0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn drag_without_movement_settles_in_place() {
    let (mut c, log) = recording(CarouselOptions::new(3).with_position(1));

    assert!(c.begin_drag(&live(&c), 100.0, None));
    assert!(c.update_drag(&live(&c), None, 100.0));
    assert!(c.end_drag(&live(&c), None));

    assert_eq!(c.current_index(), 1);
    assert!(!c.is_transitioning());
    assert!(c.is_stable());
    assert_eq!(
        take(&log),
        [Ev::DragStart, Ev::Unstable, Ev::DragEnd, Ev::Stable(1)]
    );
}

#[test]
fn flick_past_threshold_slides_left() {
    let (mut c, log) = recording(CarouselOptions::new(4));

    c.begin_drag(&live(&c), 100.0, None);
    c.update_drag(&live(&c), None, 115.0);
    assert_close(c.drag_delta(&live(&c)), -0.15);
    assert_close(c.current_slide_position(&live(&c)), -0.15);
    assert!(c.drag().unwrap().flick);

    c.end_drag(&live(&c), None);
    assert_eq!(c.target_index(), 3);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.slide_direction(), Some(SlideDirection::Left));
    assert!(c.is_transitioning());
    assert_eq!(
        take(&log),
        [Ev::DragStart, Ev::Unstable, Ev::DragEnd, Ev::Position(3)]
    );

    c.on_transition_complete();
    assert_eq!(c.current_index(), 3);
    assert_eq!(take(&log), [Ev::Stable(3)]);
}

#[test]
fn short_flick_snaps_back() {
    let mut c = Carousel::new(CarouselOptions::new(4).with_threshold(0.2));
    c.mount(&FixedGeometry::centered(W));

    c.begin_drag(&live(&c), 100.0, None);
    c.update_drag(&live(&c), None, 85.0);
    c.end_drag(&live(&c), None);

    assert_eq!(c.target_index(), 0);
    assert_eq!(c.slide_direction(), None);
    // Released off-center, so the strip animates back.
    assert!(c.is_transitioning());
}

#[test]
fn crossing_half_an_item_moves_the_index_during_drag() {
    let (mut c, log) = recording(CarouselOptions::new(5).with_position(2));

    c.begin_drag(&live(&c), 300.0, None);
    c.update_drag(&live(&c), None, 240.0);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.target_index(), 3);
    let drag = *c.drag().unwrap();
    assert!(!drag.flick);
    assert_close(drag.base, -0.4);
    assert_eq!(drag.start, 240.0);

    c.update_drag(&live(&c), None, 230.0);
    let drag = *c.drag().unwrap();
    assert_close(drag.base, -0.4);
    assert_eq!(drag.start, 240.0);
    assert_eq!(drag.current, 230.0);
    assert_close(c.current_slide_position(&live(&c)), -0.3);

    c.end_drag(&live(&c), None);
    assert_eq!(c.target_index(), 3);
    assert_eq!(c.slide_direction(), None);
    assert!(c.is_transitioning());

    c.on_transition_complete();
    assert_eq!(c.current_index(), 3);
    assert_eq!(
        take(&log),
        [
            Ev::DragStart,
            Ev::Unstable,
            Ev::Position(3),
            Ev::DragEnd,
            Ev::Stable(3)
        ]
    );
}

#[test]
fn flick_candidacy_is_lost_for_the_rest_of_the_drag() {
    let mut c = Carousel::new(CarouselOptions::new(5).with_position(2));
    c.mount(&FixedGeometry::centered(W));

    c.begin_drag(&live(&c), 300.0, None);
    c.update_drag(&live(&c), None, 240.0);
    c.update_drag(&live(&c), None, 300.0);
    assert_eq!(c.current_index(), 2);
    c.update_drag(&live(&c), None, 285.0);
    assert!(!c.drag().unwrap().flick);

    // delta = 0.15 would be a flick, but the drag already crossed once.
    c.end_drag(&live(&c), None);
    assert_eq!(c.target_index(), 2);
    assert_eq!(c.slide_direction(), None);
}

#[test]
fn release_direction_rules() {
    assert_eq!(release_direction(true, -0.15, 0.0, 0.1), Some(SlideDirection::Left));
    assert_eq!(release_direction(true, 0.15, 0.0, 0.1), Some(SlideDirection::Right));
    assert_eq!(release_direction(true, 0.05, 0.9, 0.1), None);
    assert_eq!(release_direction(false, 0.9, -0.6, 0.1), Some(SlideDirection::Left));
    assert_eq!(release_direction(false, -0.9, 0.6, 0.1), Some(SlideDirection::Right));
    assert_eq!(release_direction(false, 0.9, 0.4, 0.1), None);
}

#[test]
fn non_flick_release_uses_the_strip_position() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.mount(&FixedGeometry::centered(W));
    c.begin_drag(&live(&c), 300.0, None);
    c.update_drag(&live(&c), None, 240.0);
    assert_eq!(c.current_index(), 1);

    // The renderer lags behind and still shows the strip 0.7 items forward.
    c.end_drag(&FixedGeometry::at_position(W, 0.7), None);
    assert_eq!(c.target_index(), 2);
    assert_eq!(c.slide_direction(), Some(SlideDirection::Right));
}

#[test]
fn drag_during_transition_anchors_to_the_nearest_item() {
    let (mut c, log) = recording(CarouselOptions::new(5).with_position(1));
    assert!(c.slide(SlideDirection::Right));
    take(&log);

    // Caught at 80% of the way to the next item.
    assert!(c.begin_drag(&FixedGeometry::at_position(W, 0.8), 50.0, None));
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.target_index(), 2);
    assert!(!c.is_transitioning());
    assert_eq!(c.slide_direction(), None);
    assert_close(c.drag().unwrap().base, -0.2);
    assert_eq!(take(&log), [Ev::DragStart]);
}

#[test]
fn second_pointer_cannot_steal_the_drag() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.mount(&FixedGeometry::centered(W));

    assert!(c.begin_drag(&live(&c), 100.0, Some(1)));
    assert!(!c.begin_drag(&live(&c), 10.0, Some(2)));
    assert!(!c.begin_drag(&live(&c), 10.0, None));
    assert!(!c.update_drag(&live(&c), Some(2), 0.0));
    assert!(!c.update_drag(&live(&c), None, 0.0));
    assert!(!c.end_drag(&live(&c), Some(2)));
    assert!(!c.cancel_drag(Some(2)));
    assert_eq!(c.drag().unwrap().current, 100.0);

    // The owning touch may restart its own session.
    assert!(c.begin_drag(&live(&c), 90.0, Some(1)));
    assert_eq!(c.drag().unwrap().start, 90.0);
    assert!(c.end_drag(&live(&c), Some(1)));
    assert!(!c.is_dragging());
}

#[test]
fn release_drag_ends_any_session() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.mount(&FixedGeometry::centered(W));
    assert!(!c.release_drag(&live(&c)));
    c.begin_drag(&live(&c), 100.0, Some(4));
    assert!(c.release_drag(&live(&c)));
    assert!(!c.is_dragging());
}

#[test]
fn cancel_is_idempotent() {
    let (mut c, log) = recording(CarouselOptions::new(5));
    let before = *c.state();
    assert!(!c.cancel_drag(None));
    assert_eq!(*c.state(), before);
    assert!(take(&log).is_empty());

    c.begin_drag(&live(&c), 100.0, None);
    assert!(c.cancel_drag(None));
    assert!(!c.is_dragging());
    assert!(c.is_transitioning());
    assert_eq!(take(&log), [Ev::DragStart, Ev::Unstable, Ev::DragEnd]);

    assert!(!c.cancel_drag(None));
    assert!(take(&log).is_empty());
}

#[test]
fn stability_notifications_alternate() {
    let (mut c, log) = recording(CarouselOptions::new(4));
    let mut rng = Lcg::new(0x5eed);
    let mut x = 500.0;

    for _ in 0..5_000 {
        match rng.gen_range_usize(0, 8) {
            0 => {
                c.begin_drag(&live(&c), x, None);
            }
            1 | 2 => {
                x += rng.gen_range_i64(-80, 80) as f64;
                c.update_drag(&live(&c), None, x);
            }
            3 => {
                c.end_drag(&live(&c), None);
            }
            4 => {
                c.cancel_drag(None);
            }
            5 => c.on_transition_complete(),
            6 => {
                c.set_position(rng.gen_range_i64(-6, 6));
            }
            _ => {
                c.slide(if rng.gen_range_usize(0, 2) == 0 {
                    SlideDirection::Left
                } else {
                    SlideDirection::Right
                });
            }
        }
        let s = c.state();
        assert!(s.current_index < 4 && s.target_index < 4);
        if let Some(drag) = &s.drag {
            assert!((-0.5..=0.5).contains(&drag.base), "base {}", drag.base);
        }
    }

    let mut stable = true;
    for ev in take(&log) {
        match ev {
            Ev::Stable(_) => {
                assert!(!stable, "two consecutive on_stable");
                stable = true;
            }
            Ev::Unstable => {
                assert!(stable, "two consecutive on_unstable");
                stable = false;
            }
            _ => {}
        }
    }
    assert_eq!(stable, c.is_stable());
}

#[test]
fn batch_update_coalesces_notifications() {
    let (mut c, log) = recording(CarouselOptions::new(5));
    c.batch_update(|c| {
        c.slide(SlideDirection::Right);
        c.on_transition_complete();
    });
    // Target moved but the carousel never looked unstable from outside.
    assert_eq!(take(&log), [Ev::Position(1)]);
}

#[test]
fn unmounted_geometry_means_no_movement() {
    let mut c = Carousel::new(CarouselOptions::new(5).with_position(2));
    let g = FixedGeometry::unmounted();
    assert_eq!(c.viewport_width(&g), 0.0);
    assert_eq!(c.current_slide_position(&g), 0.0);

    c.begin_drag(&g, 100.0, None);
    c.update_drag(&g, None, -900.0);
    assert_eq!(c.drag_delta(&g), 0.0);
    assert_eq!(c.current_index(), 2);
    c.end_drag(&g, None);
    assert_eq!(c.target_index(), 2);
    assert!(c.is_stable());
}

#[test]
fn viewport_width_is_cached_unless_dynamic() {
    let mut cached = Carousel::new(CarouselOptions::new(3));
    cached.mount(&FixedGeometry::centered(200.0));
    assert_eq!(cached.viewport_width(&FixedGeometry::centered(50.0)), 200.0);
    cached.unmount();
    assert!(!cached.is_mounted());
    assert_eq!(cached.viewport_width(&FixedGeometry::centered(50.0)), 0.0);

    let dynamic = Carousel::new(CarouselOptions::new(3).with_dynamic_size(true));
    assert_eq!(dynamic.viewport_width(&FixedGeometry::centered(50.0)), 50.0);
    assert_eq!(dynamic.viewport_width(&FixedGeometry::new(0.0, 0.0)), 0.0);
}

#[test]
fn invalid_threshold_falls_back_to_default() {
    let mut c = Carousel::new(CarouselOptions::new(4).with_threshold(-1.0));
    c.mount(&FixedGeometry::centered(W));
    c.begin_drag(&live(&c), 100.0, None);
    c.update_drag(&live(&c), None, 95.0);
    c.end_drag(&live(&c), None);
    assert_eq!(c.target_index(), 0);
}

#[test]
fn shrinking_count_rewraps_indexes() {
    let (mut c, log) = recording(CarouselOptions::new(6).with_position(5));
    c.set_count(3);
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.target_index(), 2);
    assert_eq!(take(&log), [Ev::Position(2)]);

    c.update_options(|o| o.count = 0);
    assert_eq!(c.current_index(), 0);
    assert!(c.display_slots().is_none());
}

#[test]
fn window_for_many_items_has_no_copies() {
    let slots = display_slots(5, 0).unwrap();
    assert_eq!(
        slots.map(|s| (s.index, s.copy)),
        [
            (4, CopyKind::Original),
            (0, CopyKind::Original),
            (1, CopyKind::Original)
        ]
    );
    assert!(display_slots(0, 0).is_none());
}

#[test]
fn window_duplicates_small_collections() {
    let one = ["A"];
    let w = display_window_keyed(&one, 0, |s| Some(*s));
    assert_eq!(w.len(), 3);
    assert!(w.iter().all(|d| *d.item == "A"));
    let keys: Vec<_> = w.iter().map(|d| d.key.clone().unwrap()).collect();
    assert_eq!(keys, ["A", "A-copy", "A-copy2"]);
    assert_eq!(
        w.iter().map(|d| d.slot.copy).collect::<Vec<_>>(),
        [CopyKind::Original, CopyKind::Copy, CopyKind::Copy2]
    );

    let two = ["A", "B"];
    let w = display_window_keyed(&two, 0, |s| Some(*s));
    let items: Vec<_> = w.iter().map(|d| *d.item).collect();
    assert_eq!(items, ["B", "A", "B"]);
    let keys: Vec<_> = w.iter().map(|d| d.key.clone().unwrap()).collect();
    assert_eq!(keys, ["B", "A", "B-copy"]);
}

#[test]
fn unkeyed_items_pass_through() {
    let items = [10u32];
    let w = display_window_keyed(&items, 0, |_| None::<String>);
    assert!(w.iter().all(|d| d.key.is_none()));
    assert_eq!(w[1].slot.copy, CopyKind::Copy);
    assert_eq!(w[2].slot.copy, CopyKind::Copy2);

    let plain = display_window(&items, 0);
    assert_eq!(plain.len(), 3);
    assert!(display_window::<u32>(&[], 0).is_empty());
}

#[test]
fn presentation_tracks_drag_and_rest_targets() {
    let mut c = Carousel::new(
        CarouselOptions::new(3).with_transition_duration(Some("300ms")),
    );
    c.mount(&FixedGeometry::centered(W));

    let p = c.presentation(&live(&c));
    assert_close(p.offset_percent, -100.0);
    assert_eq!(p.transition_duration, None);
    assert_eq!(p.slots.unwrap()[1].index, 0);

    c.begin_drag(&live(&c), 100.0, None);
    c.update_drag(&live(&c), None, 70.0);
    let p = c.presentation(&live(&c));
    assert!(p.dragging);
    assert_close(p.offset_percent, -130.0);

    c.end_drag(&live(&c), None);
    let p = c.presentation(&live(&c));
    assert_eq!(p.slide_direction, Some(SlideDirection::Right));
    assert_close(p.offset_percent, -200.0);
    assert_eq!(p.transition_duration.as_deref(), Some("300ms"));

    c.on_transition_complete();
    let p = c.presentation(&live(&c));
    assert_close(p.offset_percent, -100.0);
    assert_eq!(p.slots.unwrap()[1].index, 1);
}
