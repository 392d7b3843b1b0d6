use std::cell::RefCell;
use std::rc::Rc;

use super::frames::{Detach, FrameSource};
use crate::models::SmoothScroll;

/// Page-lifetime smooth scrolling.
///
/// Activation registers a frame callback that steps the engine and hands
/// every new position to the `apply` sink. Deactivation, explicit or on drop,
/// detaches the callback exactly once.
pub struct SmoothScrollDriver<S: FrameSource> {
    engine: Rc<RefCell<SmoothScroll>>,
    subscription: RefCell<Option<S::Subscription>>,
}

impl<S: FrameSource> SmoothScrollDriver<S> {
    pub fn activate(frames: &S, engine: SmoothScroll, mut apply: impl FnMut(f64) + 'static) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let stepping = Rc::clone(&engine);
        let subscription = frames.subscribe(Box::new(move |time: f64| {
            let next = stepping.borrow_mut().frame(time);
            if let Some(position) = next {
                apply(position);
            }
        }));
        log::debug!("Smooth scroll activated");
        Self {
            engine,
            subscription: RefCell::new(Some(subscription)),
        }
    }

    /// Feed a wheel delta in pixels. Returns `true` when the driver consumed
    /// it and the native scroll should be suppressed.
    pub fn wheel(&self, delta: f64) -> bool {
        self.is_active() && self.engine.borrow_mut().wheel(delta)
    }

    pub fn scroll_to(&self, target: f64) {
        if self.is_active() {
            self.engine.borrow_mut().scroll_to(target);
        }
    }

    /// Report a native scroll offset (keyboard, scrollbar, anchor jumps).
    pub fn sync(&self, native: f64) {
        self.engine.borrow_mut().sync(native);
    }

    pub fn set_limit(&self, limit: f64) {
        self.engine.borrow_mut().set_limit(limit);
    }

    pub fn position(&self) -> f64 {
        self.engine.borrow().position()
    }

    pub fn is_animating(&self) -> bool {
        self.engine.borrow().is_animating()
    }

    pub fn is_active(&self) -> bool {
        self.subscription
            .borrow()
            .as_ref()
            .is_some_and(|s| s.is_attached())
    }

    /// Release the frame callback. Later calls are no-ops.
    pub fn deactivate(&self) {
        if let Some(mut subscription) = self.subscription.borrow_mut().take() {
            subscription.detach();
            log::debug!("Smooth scroll deactivated");
        }
    }
}

impl<S: FrameSource> Drop for SmoothScrollDriver<S> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
