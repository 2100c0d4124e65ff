use log::{debug, warn};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

use super::active_slide::ActiveSlideStore;
use super::slide_id::SlideIndex;

/// A discrete request to move through the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    GoTo(isize),
}

impl NavIntent {
    /// Maps a `KeyboardEvent.key` value to an intent. Other keys are ignored.
    pub fn from_key(key: &str) -> Option<NavIntent> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(NavIntent::Next),
            "ArrowUp" | "ArrowLeft" => Some(NavIntent::Previous),
            _ => None,
        }
    }
}

/// Whether the previous and next controls are at a bound: `(at_first, at_last)`.
pub fn bounds(active: SlideIndex, total: usize) -> (bool, bool) {
    let current = active.get();
    (current == 0, current + 1 >= total)
}

/// Attribute selector for a section id. Unlike `#id` it accepts ids that are
/// not valid CSS identifiers, such as ones starting with a digit.
pub fn section_selector(element_id: &str) -> String {
    format!("[id=\"{}\"]", element_id)
}

/// Brings a slide section into view. Returns false if the section does not exist.
pub trait SlideScroller {
    fn scroll_to(&self, index: SlideIndex) -> bool;
}

/// Smooth-scrolls sections found by id inside the deck's scroll container.
#[derive(Clone, PartialEq)]
pub struct ContainerScroller {
    container: NodeRef,
    id_prefix: String,
}

impl ContainerScroller {
    pub fn new(container: NodeRef, id_prefix: impl Into<String>) -> Self {
        ContainerScroller {
            container,
            id_prefix: id_prefix.into(),
        }
    }

    fn section(&self, index: SlideIndex) -> Option<Element> {
        let container = self.container.cast::<Element>()?;
        let selector = section_selector(&index.element_id(&self.id_prefix));
        match container.query_selector(&selector) {
            Ok(section) => section,
            Err(err) => {
                warn!("bad section selector {}: {:?}", selector, err);
                None
            }
        }
    }
}

impl SlideScroller for ContainerScroller {
    fn scroll_to(&self, index: SlideIndex) -> bool {
        match self.section(index) {
            Some(section) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// Turns navigation intents into scroll requests. It only reads the active
/// slide; the tracker updates it once the scroll has settled.
pub struct NavigationDispatcher<S: SlideScroller> {
    scroller: S,
    active: ActiveSlideStore,
}

impl<S: SlideScroller> NavigationDispatcher<S> {
    pub fn new(scroller: S, active: ActiveSlideStore) -> Self {
        NavigationDispatcher { scroller, active }
    }

    /// Scrolls to `index` clamped into the deck. Returns the slide that was
    /// requested, or `None` when its section could not be found.
    pub fn go_to(&self, index: isize) -> Option<SlideIndex> {
        let target = SlideIndex::clamped(index, self.active.slide_count());
        debug!("navigate to slide {} (requested {})", target, index);
        self.scroller.scroll_to(target).then_some(target)
    }

    pub fn next(&self) -> Option<SlideIndex> {
        self.go_to(self.current() + 1)
    }

    pub fn previous(&self) -> Option<SlideIndex> {
        self.go_to(self.current() - 1)
    }

    pub fn dispatch(&self, intent: NavIntent) -> Option<SlideIndex> {
        match intent {
            NavIntent::Next => self.next(),
            NavIntent::Previous => self.previous(),
            NavIntent::GoTo(index) => self.go_to(index),
        }
    }

    fn current(&self) -> isize {
        self.active.get().get() as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::testing::RecordingScroller;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_the_four_navigation_keys() {
        assert_eq!(NavIntent::from_key("ArrowDown"), Some(NavIntent::Next));
        assert_eq!(NavIntent::from_key("ArrowRight"), Some(NavIntent::Next));
        assert_eq!(NavIntent::from_key("ArrowUp"), Some(NavIntent::Previous));
        assert_eq!(NavIntent::from_key("ArrowLeft"), Some(NavIntent::Previous));
        for key in ["Enter", " ", "PageDown", "j", "arrowdown", "Home"] {
            assert_eq!(NavIntent::from_key(key), None, "key {:?}", key);
        }
    }

    #[test]
    fn go_to_clamps_out_of_range_requests() {
        let (store, _writer) = ActiveSlideStore::new(12);
        let scroller = RecordingScroller::new();
        let dispatcher = NavigationDispatcher::new(scroller.clone(), store);

        dispatcher.go_to(-3);
        dispatcher.go_to(4);
        dispatcher.go_to(40);

        assert_eq!(scroller.requests(), vec![0, 4, 11]);
    }

    #[test]
    fn relative_moves_are_based_on_the_active_slide() {
        let (store, writer) = ActiveSlideStore::new(12);
        let scroller = RecordingScroller::new();
        let dispatcher = NavigationDispatcher::new(scroller.clone(), store.clone());

        writer.set(SlideIndex::new(5));
        assert_eq!(dispatcher.next(), Some(SlideIndex::new(6)));
        assert_eq!(dispatcher.previous(), Some(SlideIndex::new(4)));
        assert_eq!(store.get(), SlideIndex::new(5), "dispatcher must not write the active slide");
    }

    #[test]
    fn bounds_do_not_wrap() {
        let (store, writer) = ActiveSlideStore::new(12);
        let scroller = RecordingScroller::new();
        let dispatcher = NavigationDispatcher::new(scroller.clone(), store);

        assert_eq!(dispatcher.previous(), Some(SlideIndex::FIRST));
        writer.set(SlideIndex::new(11));
        assert_eq!(dispatcher.next(), Some(SlideIndex::new(11)));
        assert_eq!(scroller.requests(), vec![0, 11]);
    }

    #[test]
    fn controls_are_disabled_only_at_the_bounds() {
        assert_eq!(bounds(SlideIndex::new(0), 12), (true, false));
        assert_eq!(bounds(SlideIndex::new(10), 12), (false, false));
        assert_eq!(bounds(SlideIndex::new(11), 12), (false, true));
        assert_eq!(bounds(SlideIndex::FIRST, 1), (true, true));
    }

    #[test]
    fn section_selector_quotes_the_id() {
        assert_eq!(section_selector("slide3"), "[id=\"slide3\"]");
        assert_eq!(section_selector("1deck10"), "[id=\"1deck10\"]");
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let (store, _writer) = ActiveSlideStore::new(12);
        let scroller = RecordingScroller::new().without(3);
        let dispatcher = NavigationDispatcher::new(scroller.clone(), store);

        assert_eq!(dispatcher.dispatch(NavIntent::GoTo(3)), None);
        assert!(scroller.requests().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn go_to_never_leaves_the_deck(requested in any::<isize>(), slide_count in 1usize..64) {
                let (store, _writer) = ActiveSlideStore::new(slide_count);
                let scroller = RecordingScroller::new();
                let dispatcher = NavigationDispatcher::new(scroller.clone(), store);

                let target = dispatcher.go_to(requested).unwrap();
                let expected = requested.clamp(0, slide_count as isize - 1) as usize;
                prop_assert_eq!(target.get(), expected);
                prop_assert_eq!(scroller.last_request(), Some(target));
            }
        }
    }
}
