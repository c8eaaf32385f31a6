use carousel::PointerId;

/// Registration of the per-gesture move/end/cancel listeners on the host element.
///
/// The controller attaches them when a touch drag is accepted and detaches them on every way the
/// gesture can end: matching touch end/cancel, mouse leave, and drop.
pub trait GestureListeners {
    type Target: Clone + PartialEq;

    fn attach(&mut self, target: &Self::Target);
    fn detach(&mut self, target: &Self::Target);
}

/// For hosts that deliver touch events globally and need no per-gesture registration.
impl GestureListeners for () {
    type Target = ();

    fn attach(&mut self, _target: &()) {}
    fn detach(&mut self, _target: &()) {}
}

/// Listeners currently registered for a touch drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerSession<T> {
    pub target: T,
    pub touch: PointerId,
}
