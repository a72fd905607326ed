//! Browser subscriptions with explicit subscribe/unsubscribe.
//!
//! Intersection observers and animation-frame loops hold JS closures that are
//! neither `Send` nor `Sync`, so they cannot be captured by Leptos cleanup
//! hooks directly. Instead they live in a thread-local [`Registry`] and
//! components keep only the `Copy` [`SubscriptionId`], passing it to
//! [`unsubscribe`] from `on_cleanup`. Dropping a subscription disconnects the
//! observer or cancels the pending frame.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::RevealLatch;

/// Handle to a live subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Id-keyed store of live subscriptions.
#[derive(Debug)]
pub struct Registry<T> {
    next_id: u64,
    entries: HashMap<u64, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: HashMap::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn insert(&mut self, entry: T) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, entry);
        SubscriptionId(id)
    }

    /// Remove and return the entry. Removing twice yields `None`.
    pub fn remove(&mut self, id: SubscriptionId) -> Option<T> {
        self.entries.remove(&id.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

enum Subscription {
    Visibility {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    },
    Frame(Rc<FrameLoop>),
}

impl Drop for Subscription {
    fn drop(&mut self) {
        match self {
            Subscription::Visibility { observer, .. } => observer.disconnect(),
            Subscription::Frame(frame_loop) => frame_loop.stop(),
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<Registry<Subscription>> = RefCell::new(Registry::default());
}

fn register(subscription: Subscription) -> SubscriptionId {
    ACTIVE.with(|active| active.borrow_mut().insert(subscription))
}

/// Release a subscription. Unknown or already released ids are ignored.
pub fn unsubscribe(id: SubscriptionId) {
    // Drop outside the borrow: disconnecting may re-enter the registry.
    let removed = ACTIVE.with(|active| active.borrow_mut().remove(id));
    if removed.is_some() {
        debug!(?id, "unsubscribed");
    }
    drop(removed);
}

/// Number of live subscriptions on this thread.
pub fn active_count() -> usize {
    ACTIVE.with(|active| active.borrow().len())
}

/// Call `on_visible` the first time `target` intersects the viewport by at
/// least `threshold` of its area. Later visibility changes are ignored.
pub fn on_first_visible(
    target: &Element,
    threshold: f64,
    on_visible: impl Fn() + 'static,
) -> Result<SubscriptionId, JsValue> {
    let mut latch = RevealLatch::default();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if latch.observe(visible) {
                on_visible();
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);

    let id = register(Subscription::Visibility {
        observer,
        _callback: callback,
    });
    debug!(?id, threshold, "observing visibility");
    Ok(id)
}

struct FrameLoop {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    fn schedule(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        if let Some(callback) = self.callback.borrow().as_ref() {
            let handle = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.pending.set(Some(handle));
        }
        Ok(())
    }

    fn stop(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.callback.borrow_mut().take();
    }
}

/// Run `tick` once per display refresh with the frame timestamp (ms) until
/// the subscription is released.
pub fn on_animation_frame(mut tick: impl FnMut(f64) + 'static) -> Result<SubscriptionId, JsValue> {
    let frame_loop = Rc::new(FrameLoop {
        pending: Cell::new(None),
        callback: RefCell::new(None),
    });

    // The closure holds a weak handle so the loop is freed once unsubscribed.
    let weak: Weak<FrameLoop> = Rc::downgrade(&frame_loop);
    let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        tick(timestamp);
        if let Some(frame_loop) = weak.upgrade() {
            if let Err(err) = frame_loop.schedule() {
                warn!(?err, "animation frame loop stopped");
            }
        }
    });
    *frame_loop.callback.borrow_mut() = Some(callback);
    frame_loop.schedule()?;

    let id = register(Subscription::Frame(frame_loop));
    debug!(?id, "frame loop started");
    Ok(id)
}
