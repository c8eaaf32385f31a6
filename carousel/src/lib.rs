//! A headless swipe carousel engine.
//!
//! For adapter-level utilities (event routing, listener sessions, tween settling), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the state machine behind a swipeable carousel: wrapping index
//! arithmetic, a drag lifecycle that turns continuous pointer motion into discrete index
//! changes (with flick and half-item thresholds), reconciliation with an externally controlled
//! position, and a 3-slot render window that stays well-formed with one or two items.
//!
//! It is UI-agnostic. A GUI/web layer is expected to provide:
//! - the viewport width and the current strip offset (via [`Geometry`])
//! - pointer/touch coordinates
//! - a "transition finished" notification
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod geometry;
mod index;
mod options;
mod presentation;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use geometry::{FixedGeometry, Geometry};
pub use index::wrap;
pub use options::{Callback, CarouselOptions, DEFAULT_THRESHOLD, IndexCallback};
pub use presentation::Presentation;
pub use types::{CarouselState, CopyKind, DisplaySlot, DragSession, PointerId, SlideDirection};
pub use window::{
    DisplayItem, KeyedDisplayItem, display_slots, display_window, display_window_keyed,
};
