/// A registration that can be torn down.
///
/// `detach` must be idempotent: after the first call the underlying callback
/// is never invoked again.
pub trait Detach {
    fn detach(&mut self);
    fn is_attached(&self) -> bool;
}

/// Per-frame callback registry, e.g. `requestAnimationFrame`.
pub trait FrameSource {
    type Subscription: Detach;

    /// Invoke `tick` with the frame timestamp (milliseconds) on every frame
    /// until the returned subscription is detached.
    fn subscribe(&self, tick: Box<dyn FnMut(f64)>) -> Self::Subscription;
}
