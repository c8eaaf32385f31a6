use carousel::PointerId;

/// One changed touch point of a touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Touch {
    pub id: PointerId,
    pub x: f64,
}

/// Raw input as delivered by the host.
///
/// `T` identifies the element a touch started on; per-gesture listeners are registered on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a, T = ()> {
    MouseDown { x: f64 },
    MouseMove { x: f64 },
    MouseUp,
    /// The mouse left the viewport. Ends whatever drag is active.
    MouseLeave,
    /// `touches` are the changed touches; only the first one can start a drag.
    TouchStart { target: T, touches: &'a [Touch] },
    TouchMove(&'a [Touch]),
    TouchEnd(&'a [Touch]),
    TouchCancel(&'a [Touch]),
    /// The renderer finished a transition.
    TransitionEnd,
}

pub(crate) fn find_touch(touches: &[Touch], id: PointerId) -> Option<&Touch> {
    touches.iter().find(|t| t.id == id)
}
