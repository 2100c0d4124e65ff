use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One target crossing one of its thresholds.
#[derive(Clone, Debug, PartialEq)]
pub struct Crossing {
    pub target_id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Crossing {
    pub fn is_entering(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// What the observer should do after delivering a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Continue,
    /// Release every target; no further batches are delivered.
    Stop,
}

pub type CrossingCallback = Box<dyn FnMut(&[Crossing]) -> Observation>;

/// Visibility detection over some scrollable root.
pub trait ViewportObserver {
    type Target;

    /// Starts reporting crossings of `threshold` (fraction of the target's area) for `target`.
    fn observe(&mut self, target: &Self::Target, threshold: f64);

    /// Installs the batch callback, replacing any earlier one.
    fn on_crossing(&mut self, callback: CrossingCallback);

    /// Stops observing everything and drops the callback. Idempotent.
    fn dispose(&mut self);
}

impl<O: ViewportObserver + ?Sized> ViewportObserver for Box<O> {
    type Target = O::Target;

    fn observe(&mut self, target: &Self::Target, threshold: f64) {
        (**self).observe(target, threshold)
    }

    fn on_crossing(&mut self, callback: CrossingCallback) {
        (**self).on_crossing(callback)
    }

    fn dispose(&mut self) {
        (**self).dispose()
    }
}

pub type ElementViewport = Box<dyn ViewportObserver<Target = Element>>;

/// Stand-in for hosts without visibility detection: nothing is ever reported.
pub struct NullViewport<T> {
    _target: std::marker::PhantomData<T>,
}

impl<T> Default for NullViewport<T> {
    fn default() -> Self {
        NullViewport {
            _target: std::marker::PhantomData,
        }
    }
}

impl<T> ViewportObserver for NullViewport<T> {
    type Target = T;

    fn observe(&mut self, _target: &T, _threshold: f64) {}

    fn on_crossing(&mut self, _callback: CrossingCallback) {}

    fn dispose(&mut self) {}
}

type SharedCallback = Rc<RefCell<Option<CrossingCallback>>>;

struct NativeObserver {
    threshold: f64,
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// `ViewportObserver` over the browser's `IntersectionObserver`. One native
/// observer is created per distinct threshold, all sharing the same callback.
pub struct IntersectionViewport {
    root: Option<Element>,
    callback: SharedCallback,
    natives: Rc<RefCell<Vec<NativeObserver>>>,
}

impl IntersectionViewport {
    /// `root` is the scroll container; `None` means the browser viewport.
    pub fn new(root: Option<Element>) -> Self {
        IntersectionViewport {
            root,
            callback: Rc::new(RefCell::new(None)),
            natives: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn is_supported() -> bool {
        web_sys::window()
            .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false)
    }

    /// Native observer when available, otherwise a `NullViewport`.
    pub fn or_null(root: Option<Element>) -> ElementViewport {
        if Self::is_supported() {
            Box::new(IntersectionViewport::new(root))
        } else {
            warn!("IntersectionObserver unavailable, visibility tracking disabled");
            Box::new(NullViewport::default())
        }
    }

    fn native_for(&self, threshold: f64) -> Result<IntersectionObserver, JsValue> {
        if let Some(native) = self.natives.borrow().iter().find(|n| n.threshold == threshold) {
            return Ok(native.observer.clone());
        }

        let callback = self.callback.clone();
        let natives = self.natives.clone();
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch: Vec<Crossing> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Crossing {
                    target_id: entry.target().id(),
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();

            let outcome = match callback.borrow_mut().as_mut() {
                Some(cb) => cb(&batch),
                None => Observation::Continue,
            };
            if outcome == Observation::Stop {
                for native in natives.borrow().iter() {
                    native.observer.disconnect();
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root(self.root.as_ref());
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;

        self.natives.borrow_mut().push(NativeObserver {
            threshold,
            observer: observer.clone(),
            _closure: closure,
        });
        Ok(observer)
    }
}

impl ViewportObserver for IntersectionViewport {
    type Target = Element;

    fn observe(&mut self, target: &Element, threshold: f64) {
        match self.native_for(threshold) {
            Ok(observer) => observer.observe(target),
            Err(e) => warn!("could not create IntersectionObserver for #{}: {:?}", target.id(), e),
        }
    }

    fn on_crossing(&mut self, callback: CrossingCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }

    fn dispose(&mut self) {
        for native in self.natives.borrow_mut().drain(..) {
            native.observer.disconnect();
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for IntersectionViewport {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_requires_intersection_and_threshold() {
        let crossing = |ratio, is_intersecting| Crossing {
            target_id: "slide1".into(),
            ratio,
            is_intersecting,
        };
        assert!(crossing(0.5, true).is_entering(0.5));
        assert!(crossing(1.0, true).is_entering(0.5));
        assert!(!crossing(0.49, true).is_entering(0.5));
        assert!(!crossing(0.6, false).is_entering(0.5));
    }

    #[test]
    fn null_viewport_never_reports() {
        let mut viewport: NullViewport<String> = NullViewport::default();
        viewport.on_crossing(Box::new(|_: &[Crossing]| panic!("null viewport delivered a batch")));
        viewport.observe(&"slide0".to_string(), 0.5);
        viewport.dispose();
    }
}
