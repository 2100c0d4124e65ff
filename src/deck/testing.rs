//! Host-side doubles for the DOM-facing seams.

use std::cell::RefCell;
use std::rc::Rc;

use super::navigation::SlideScroller;
use super::slide_id::SlideIndex;
use super::viewport::{Crossing, CrossingCallback, Observation, ViewportObserver};

pub fn crossing(id: &str, ratio: f64) -> Crossing {
    Crossing {
        target_id: id.to_string(),
        ratio,
        is_intersecting: ratio > 0.0,
    }
}

#[derive(Default)]
struct ManualState {
    observed: Vec<(String, f64)>,
    callback: Option<CrossingCallback>,
    disposed: bool,
}

/// Viewport whose batches are fired by the test. Clones share state.
#[derive(Clone, Default)]
pub struct ManualViewport {
    state: Rc<RefCell<ManualState>>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed(&self) -> Vec<(String, f64)> {
        self.state.borrow().observed.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    /// Delivers one batch. Returns false when nothing is listening.
    pub fn fire(&self, batch: &[Crossing]) -> bool {
        let callback = self.state.borrow_mut().callback.take();
        let Some(mut callback) = callback else {
            return false;
        };
        match callback(batch) {
            Observation::Continue => {
                let mut state = self.state.borrow_mut();
                if state.callback.is_none() && !state.disposed {
                    state.callback = Some(callback);
                }
            }
            Observation::Stop => {
                self.state.borrow_mut().observed.clear();
            }
        }
        true
    }
}

impl ViewportObserver for ManualViewport {
    type Target = String;

    fn observe(&mut self, target: &String, threshold: f64) {
        self.state.borrow_mut().observed.push((target.clone(), threshold));
    }

    fn on_crossing(&mut self, callback: CrossingCallback) {
        self.state.borrow_mut().callback = Some(callback);
    }

    fn dispose(&mut self) {
        let mut state = self.state.borrow_mut();
        state.observed.clear();
        state.callback = None;
        state.disposed = true;
    }
}

/// Records scroll requests instead of scrolling; `missing` sections report not found.
#[derive(Clone, Default)]
pub struct RecordingScroller {
    requests: Rc<RefCell<Vec<SlideIndex>>>,
    missing: Rc<RefCell<Vec<SlideIndex>>>,
}

impl RecordingScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without(self, index: usize) -> Self {
        self.missing.borrow_mut().push(SlideIndex::new(index));
        self
    }

    pub fn requests(&self) -> Vec<usize> {
        self.requests.borrow().iter().map(|i| i.get()).collect()
    }

    pub fn last_request(&self) -> Option<SlideIndex> {
        self.requests.borrow().last().copied()
    }
}

impl SlideScroller for RecordingScroller {
    fn scroll_to(&self, index: SlideIndex) -> bool {
        if self.missing.borrow().contains(&index) {
            return false;
        }
        self.requests.borrow_mut().push(index);
        true
    }
}
