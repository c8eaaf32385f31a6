/// Identifier of a touch point. Mouse drags carry no identifier.
pub type PointerId = u64;

/// The neighbor a slide is heading towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideDirection {
    /// Towards the previous item.
    Left,
    /// Towards the next item.
    Right,
}

impl SlideDirection {
    /// Index step applied when the slide settles.
    pub fn delta(self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// An active pointer/touch interaction.
///
/// Positions are fractions of the viewport width; `base` stays within `[-0.5, 0.5]` relative to
/// the current index and is renormalized whenever the pointer crosses half an item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    /// `None` for the mouse, the touch identifier otherwise.
    pub pointer: Option<PointerId>,
    pub base: f64,
    /// Pointer coordinate at the last renormalization.
    pub start: f64,
    /// Latest pointer coordinate.
    pub current: f64,
    /// Cleared for good the first time the drag crosses half an item.
    pub flick: bool,
}

impl DragSession {
    pub(crate) fn new(pointer: Option<PointerId>, base: f64, x: f64) -> Self {
        Self {
            pointer,
            base,
            start: x,
            current: x,
            flick: true,
        }
    }

    /// Whether events from `pointer` belong to this session.
    pub fn tracks(&self, pointer: Option<PointerId>) -> bool {
        self.pointer == pointer
    }
}

/// A serializable snapshot of the carousel's index and motion state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// The centered item. Always `< count`, or `0` for an empty carousel.
    pub current_index: usize,
    /// The item being animated towards; equals `current_index` when nothing is sliding.
    pub target_index: usize,
    pub slide_direction: Option<SlideDirection>,
    pub transitioning: bool,
    pub drag: Option<DragSession>,
}

impl CarouselState {
    pub(crate) fn at(index: usize) -> Self {
        Self {
            current_index: index,
            target_index: index,
            slide_direction: None,
            transitioning: false,
            drag: None,
        }
    }

    /// No transition is running and no drag is active.
    pub fn is_stable(&self) -> bool {
        !self.transitioning && self.drag.is_none()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// Whether a render window slot shows a duplicated item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CopyKind {
    #[default]
    Original,
    /// First duplicate of an item already on screen.
    Copy,
    /// Second duplicate (only with a single item).
    Copy2,
}

impl CopyKind {
    /// Suffix appended to the identity key of a duplicated item.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Original => None,
            Self::Copy => Some("copy"),
            Self::Copy2 => Some("copy2"),
        }
    }

    pub fn is_copy(self) -> bool {
        self != Self::Original
    }
}

/// One of the three slots (previous, current, next) of the render window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplaySlot {
    /// Index of the underlying item.
    pub index: usize,
    pub copy: CopyKind,
}
