use std::cell::Cell;
use std::rc::Rc;

use yew::Callback;

use super::viewport::{Crossing, Observation, ViewportObserver};

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Entrance state of one content block. `Revealed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    pub fn on_batch(self, batch: &[Crossing], threshold: f64) -> RevealState {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Pending if batch.iter().any(|c| c.is_entering(threshold)) => RevealState::Revealed,
            RevealState::Pending => RevealState::Pending,
        }
    }
}

/// One-shot visibility trigger for a single block. Stops observing as soon
/// as the block has been revealed.
pub struct RevealController<O: ViewportObserver> {
    observer: O,
    threshold: f64,
    state: Rc<Cell<RevealState>>,
}

impl<O: ViewportObserver> RevealController<O> {
    pub fn new(mut observer: O, threshold: f64, on_reveal: Callback<()>) -> Self {
        let state = Rc::new(Cell::new(RevealState::Pending));
        {
            let state = state.clone();
            observer.on_crossing(Box::new(move |batch: &[Crossing]| {
                let before = state.get();
                let after = before.on_batch(batch, threshold);
                state.set(after);
                if after.is_revealed() {
                    if !before.is_revealed() {
                        on_reveal.emit(());
                    }
                    Observation::Stop
                } else {
                    Observation::Continue
                }
            }));
        }
        RevealController {
            observer,
            threshold,
            state,
        }
    }

    pub fn watch(&mut self, block: &O::Target) {
        if !self.state().is_revealed() {
            self.observer.observe(block, self.threshold);
        }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }
}

impl<O: ViewportObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.observer.dispose();
    }
}

/// Inline style carrying the block's transition delay.
pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::testing::{crossing, ManualViewport};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn counting_callback() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let cb = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (count, cb)
    }

    #[test]
    fn reveals_once_the_threshold_is_crossed() {
        let viewport = ManualViewport::new();
        let (count, cb) = counting_callback();
        let mut controller = RevealController::new(viewport.clone(), DEFAULT_THRESHOLD, cb);
        controller.watch(&"block".to_string());

        viewport.fire(&[crossing("block", 0.05)]);
        assert_eq!(controller.state(), RevealState::Pending);

        viewport.fire(&[crossing("block", 0.1)]);
        assert_eq!(controller.state(), RevealState::Revealed);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stops_observing_after_reveal() {
        let viewport = ManualViewport::new();
        let (count, cb) = counting_callback();
        let mut controller = RevealController::new(viewport.clone(), DEFAULT_THRESHOLD, cb);
        controller.watch(&"block".to_string());

        viewport.fire(&[crossing("block", 0.4)]);
        assert!(viewport.observed().is_empty());
        assert!(!viewport.fire(&[crossing("block", 0.0)]));

        assert_eq!(controller.state(), RevealState::Revealed);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropping_controller_releases_the_observer() {
        let viewport = ManualViewport::new();
        let (count, cb) = counting_callback();
        let mut controller = RevealController::new(viewport.clone(), DEFAULT_THRESHOLD, cb);
        controller.watch(&"block".to_string());
        drop(controller);

        assert!(viewport.is_disposed());
        assert!(!viewport.fire(&[crossing("block", 1.0)]));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn delay_is_rendered_as_transition_delay() {
        assert_eq!(transition_delay_style(0), "transition-delay: 0ms;");
        assert_eq!(transition_delay_style(400), "transition-delay: 400ms;");
    }

    #[test]
    fn reveal_events_are_recorded_in_order() {
        let viewport = ManualViewport::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let cb = {
            let log = log.clone();
            Callback::from(move |_| log.borrow_mut().push("revealed"))
        };
        let mut controller = RevealController::new(viewport.clone(), 0.5, cb);
        controller.watch(&"block".to_string());
        viewport.fire(&[crossing("block", 0.2)]);
        viewport.fire(&[crossing("block", 0.6)]);
        assert_eq!(*log.borrow(), vec!["revealed"]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod props {
        use super::super::RevealState;
        use crate::deck::testing::crossing;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn revealed_never_reverts(ratios in proptest::collection::vec(0.0f64..=1.0, 1..40)) {
                let mut state = RevealState::Pending;
                let mut seen_revealed = false;
                for ratio in ratios {
                    state = state.on_batch(&[crossing("block", ratio)], 0.1);
                    if seen_revealed {
                        prop_assert_eq!(state, RevealState::Revealed);
                    }
                    seen_revealed |= state.is_revealed();
                }
            }
        }
    }
}
