//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Routing raw mouse/touch events (touch lists, pointer ownership) into the engine
//! - Per-gesture listener registration that is always released when the gesture ends
//! - A tween-driven strip for hosts without CSS-like transitions (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no web-sys/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod input;
mod listeners;
mod strip;
mod tween;


pub use controller::Controller;
pub use input::{InputEvent, Touch};
pub use listeners::{GestureListeners, ListenerSession};
pub use strip::{DEFAULT_DURATION_MS, StripAnimator, parse_duration_ms};
pub use tween::{Easing, OffsetTween};
