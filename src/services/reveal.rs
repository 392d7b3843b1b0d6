use std::cell::RefCell;
use std::rc::Rc;

use super::frames::Detach;
use super::DomError;
use crate::models::{IntersectionEntry, Reveal, RevealState};

/// Intersection watcher registry, e.g. `IntersectionObserver`.
pub trait IntersectionSource {
    type Target: ?Sized;
    type Subscription: Detach;

    /// Report intersection changes of `target` against the viewport, crossing
    /// `threshold`, until the subscription is detached. A target already in
    /// view is reported right away.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<Self::Subscription, DomError>;
}

/// Drives one reveal state machine from an intersection watcher.
pub struct RevealWatcher<I: IntersectionSource> {
    reveal: Rc<RefCell<Reveal>>,
    subscription: Option<I::Subscription>,
}

impl<I: IntersectionSource> RevealWatcher<I> {
    /// Start watching `target`. `on_reveal` runs once, on the entry that
    /// performs the `Hidden -> Revealed` transition.
    pub fn attach(
        source: &I,
        target: &I::Target,
        threshold: f64,
        on_reveal: impl FnOnce() + 'static,
    ) -> Result<Self, DomError> {
        let reveal = Rc::new(RefCell::new(Reveal::new(threshold)));
        let observed = Rc::clone(&reveal);
        let mut on_reveal = Some(on_reveal);
        let subscription = source.observe(
            target,
            threshold,
            Box::new(move |entry: IntersectionEntry| {
                let revealed = observed.borrow_mut().observe(entry);
                if revealed {
                    if let Some(callback) = on_reveal.take() {
                        callback();
                    }
                }
            }),
        )?;
        Ok(Self {
            reveal,
            subscription: Some(subscription),
        })
    }

    pub fn state(&self) -> RevealState {
        self.reveal.borrow().state()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.as_ref().is_some_and(|s| s.is_attached())
    }

    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.detach();
        }
    }
}

impl<I: IntersectionSource> Drop for RevealWatcher<I> {
    fn drop(&mut self) {
        self.detach();
    }
}
