use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions, WheelEvent, Window,
};

use super::frames::{Detach, FrameSource};
use super::reveal::IntersectionSource;
use super::smooth_scroll::SmoothScrollDriver;
use super::DomError;
use crate::config::SmoothScrollConfig;
use crate::models::scroll::{normalize_wheel_delta, DeltaMode};
use crate::models::{IntersectionEntry, SmoothScroll};

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Largest vertical scroll offset the document allows.
fn scroll_limit(window: &Window) -> Result<f64, DomError> {
    let root = window
        .document()
        .and_then(|d| d.document_element())
        .ok_or(DomError::NoDocument)?;
    Ok((root.scroll_height() as f64 - viewport_height(window)).max(0.0))
}

/// `requestAnimationFrame` as a frame source.
#[derive(Debug, Clone, Copy)]
pub struct BrowserFrames(());

impl BrowserFrames {
    pub fn new() -> Result<Self, DomError> {
        window()?;
        Ok(Self(()))
    }
}

type Tick = Rc<RefCell<Box<dyn FnMut(f64)>>>;

/// Self-rearming animation frame loop. Dropping the pending frame cancels it.
pub struct AnimationFrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

fn schedule(running: Rc<Cell<bool>>, pending: Rc<RefCell<Option<AnimationFrame>>>, tick: Tick) {
    let slot = Rc::clone(&pending);
    let frame = request_animation_frame(move |time| {
        if !running.get() {
            return;
        }
        (*tick.borrow_mut())(time);
        // the tick may have detached the loop
        if running.get() {
            schedule(running, slot, tick);
        }
    });
    *pending.borrow_mut() = Some(frame);
}

impl FrameSource for BrowserFrames {
    type Subscription = AnimationFrameLoop;

    fn subscribe(&self, tick: Box<dyn FnMut(f64)>) -> AnimationFrameLoop {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(RefCell::new(None));
        schedule(Rc::clone(&running), Rc::clone(&pending), Rc::new(RefCell::new(tick)));
        AnimationFrameLoop { running, pending }
    }
}

impl Detach for AnimationFrameLoop {
    fn detach(&mut self) {
        if self.running.replace(false) {
            self.pending.borrow_mut().take();
        }
    }

    fn is_attached(&self) -> bool {
        self.running.get()
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.detach();
    }
}

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `IntersectionObserver` as an intersection source.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserIntersections;

pub struct ObservedElement {
    observer: IntersectionObserver,
    callback: Option<ObserverClosure>,
}

impl IntersectionSource for BrowserIntersections {
    type Target = Element;
    type Subscription = ObservedElement;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<ObservedElement, DomError> {
        let callback: ObserverClosure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_entry(IntersectionEntry {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(ObservedElement {
            observer,
            callback: Some(callback),
        })
    }
}

impl Detach for ObservedElement {
    fn detach(&mut self) {
        if let Some(callback) = self.callback.take() {
            self.observer.disconnect();
            drop(callback);
        }
    }

    fn is_attached(&self) -> bool {
        self.callback.is_some()
    }
}

impl Drop for ObservedElement {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Smooth scrolling wired to the window: wheel input, native scroll resync
/// and the frame loop. Dropping the session tears all three down.
pub struct SmoothScrollSession {
    driver: Rc<SmoothScrollDriver<BrowserFrames>>,
    listeners: Vec<EventListener>,
}

impl SmoothScrollSession {
    pub fn start(config: &SmoothScrollConfig) -> Result<Self, DomError> {
        let window = window()?;
        let frames = BrowserFrames::new()?;

        let mut engine = SmoothScroll::new(config.options(), scroll_limit(&window)?);
        engine.sync(scroll_offset(&window));

        let target = window.clone();
        let driver = Rc::new(SmoothScrollDriver::activate(&frames, engine, move |y| {
            let options = ScrollToOptions::new();
            options.set_top(y);
            options.set_behavior(ScrollBehavior::Instant);
            target.scroll_to_with_scroll_to_options(&options);
        }));

        let wheel_driver = Rc::clone(&driver);
        let wheel_window = window.clone();
        let wheel = EventListener::new_with_options(
            &window,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                // pinch zoom
                if event.ctrl_key() {
                    return;
                }
                if let Ok(limit) = scroll_limit(&wheel_window) {
                    wheel_driver.set_limit(limit);
                }
                let delta = normalize_wheel_delta(
                    event.delta_y(),
                    DeltaMode::from_dom(event.delta_mode()),
                    viewport_height(&wheel_window),
                );
                if wheel_driver.wheel(delta) {
                    event.prevent_default();
                }
            },
        );

        let scroll_driver = Rc::clone(&driver);
        let scroll_window = window.clone();
        let scroll = EventListener::new(&window, "scroll", move |_| {
            // content may have grown since the last wheel (images, the 3D scene)
            if let Ok(limit) = scroll_limit(&scroll_window) {
                scroll_driver.set_limit(limit);
            }
            scroll_driver.sync(scroll_offset(&scroll_window));
        });

        Ok(Self {
            driver,
            listeners: vec![wheel, scroll],
        })
    }
}

impl Drop for SmoothScrollSession {
    fn drop(&mut self) {
        self.listeners.clear();
        self.driver.deactivate();
    }
}
