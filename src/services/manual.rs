//! Deterministic in-memory stand-ins for the browser frame and intersection
//! sources.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::frames::{Detach, FrameSource};
use super::reveal::IntersectionSource;
use super::DomError;
use crate::models::{IntersectionEntry, RevealSlot};

type Tick = Rc<RefCell<Box<dyn FnMut(f64)>>>;
type EntryHandler = Rc<RefCell<Box<dyn FnMut(IntersectionEntry)>>>;

#[derive(Default)]
struct FrameQueue {
    next_id: Cell<u64>,
    ticks: RefCell<Vec<(u64, Tick)>>,
}

/// Frame source advanced by hand.
#[derive(Default, Clone)]
pub struct ManualFrames {
    queue: Rc<FrameQueue>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one frame at `time` to every subscriber. Returns how many
    /// callbacks ran.
    pub fn advance(&self, time: f64) -> usize {
        let ticks: Vec<Tick> = self
            .queue
            .ticks
            .borrow()
            .iter()
            .map(|(_, tick)| Rc::clone(tick))
            .collect();
        for tick in &ticks {
            (*tick.borrow_mut())(time);
        }
        ticks.len()
    }

    pub fn subscribers(&self) -> usize {
        self.queue.ticks.borrow().len()
    }
}

pub struct ManualFrameSubscription {
    id: u64,
    queue: Rc<FrameQueue>,
    attached: bool,
}

impl Detach for ManualFrameSubscription {
    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.queue.ticks.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

impl FrameSource for ManualFrames {
    type Subscription = ManualFrameSubscription;

    fn subscribe(&self, tick: Box<dyn FnMut(f64)>) -> ManualFrameSubscription {
        let id = self.queue.next_id.get();
        self.queue.next_id.set(id + 1);
        self.queue
            .ticks
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(tick))));
        ManualFrameSubscription {
            id,
            queue: Rc::clone(&self.queue),
            attached: true,
        }
    }
}

#[derive(Default)]
struct ObserverTable {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, RevealSlot, EntryHandler)>>,
    in_view: RefCell<HashMap<RevealSlot, f64>>,
}

/// Intersection source keyed by reveal slot, with intersections emitted by hand.
#[derive(Default, Clone)]
pub struct ManualIntersections {
    table: Rc<ObserverTable>,
}

impl ManualIntersections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `slot` as already in view with `ratio`; observing it reports at once.
    pub fn set_visible(&self, slot: RevealSlot, ratio: f64) {
        self.table.in_view.borrow_mut().insert(slot, ratio);
    }

    /// Deliver `entry` to every handler watching `slot`. Returns how many ran.
    pub fn emit(&self, slot: RevealSlot, entry: IntersectionEntry) -> usize {
        let handlers: Vec<EntryHandler> = self
            .table
            .handlers
            .borrow()
            .iter()
            .filter(|(_, watched, _)| *watched == slot)
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in &handlers {
            (*handler.borrow_mut())(entry);
        }
        handlers.len()
    }

    /// Deliver `entry` to every handler. Returns how many ran.
    pub fn emit_all(&self, entry: IntersectionEntry) -> usize {
        let handlers: Vec<EntryHandler> = self
            .table
            .handlers
            .borrow()
            .iter()
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in &handlers {
            (*handler.borrow_mut())(entry);
        }
        handlers.len()
    }

    pub fn observers(&self) -> usize {
        self.table.handlers.borrow().len()
    }
}

pub struct ManualObservation {
    id: u64,
    table: Rc<ObserverTable>,
    attached: bool,
}

impl Detach for ManualObservation {
    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.table.handlers.borrow_mut().retain(|(id, _, _)| *id != self.id);
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

impl IntersectionSource for ManualIntersections {
    type Target = RevealSlot;
    type Subscription = ManualObservation;

    fn observe(
        &self,
        target: &RevealSlot,
        _threshold: f64,
        on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<ManualObservation, DomError> {
        let id = self.table.next_id.get();
        self.table.next_id.set(id + 1);
        let handler: EntryHandler = Rc::new(RefCell::new(on_entry));
        self.table
            .handlers
            .borrow_mut()
            .push((id, *target, Rc::clone(&handler)));

        let initial = self.table.in_view.borrow().get(target).copied();
        if let Some(ratio) = initial {
            (*handler.borrow_mut())(IntersectionEntry::visible(ratio));
        }

        Ok(ManualObservation {
            id,
            table: Rc::clone(&self.table),
            attached: true,
        })
    }
}
