//! Whole-deck behavior: store, tracker and dispatcher wired the way the deck page wires them.

use pretty_assertions::assert_eq;

use super::active_slide::ActiveSlideStore;
use super::navigation::{NavIntent, NavigationDispatcher};
use super::outline::{section_of, OUTLINE};
use super::slide_id::SlideIndex;
use super::testing::{crossing, ManualViewport, RecordingScroller};
use super::tracker::{ActiveSlideTracker, TieBreak, TrackerOptions};

const SLIDES: usize = 12;

struct Deck {
    store: ActiveSlideStore,
    viewport: ManualViewport,
    scroller: RecordingScroller,
    tracker: Option<ActiveSlideTracker<ManualViewport>>,
    dispatcher: NavigationDispatcher<RecordingScroller>,
}

impl Deck {
    fn mount() -> Deck {
        let (store, writer) = ActiveSlideStore::new(SLIDES);
        let viewport = ManualViewport::new();
        let scroller = RecordingScroller::new();
        let options = TrackerOptions {
            threshold: 0.5,
            id_prefix: "slide".into(),
            tie_break: TieBreak::LastInBatch,
            slide_count: SLIDES,
        };
        let mut tracker = ActiveSlideTracker::new(viewport.clone(), writer, options);
        let ids: Vec<String> = (0..SLIDES).map(|i| format!("slide{}", i)).collect();
        tracker.observe_all(&ids);
        let dispatcher = NavigationDispatcher::new(scroller.clone(), store.clone());
        Deck {
            store,
            viewport,
            scroller,
            tracker: Some(tracker),
            dispatcher,
        }
    }

    /// The browser finishes scrolling to `from -> to`: one leaves, one enters.
    fn settle(&self, from: usize, to: usize) {
        self.viewport.fire(&[
            crossing(&format!("slide{}", from), 0.2),
            crossing(&format!("slide{}", to), 0.8),
        ]);
    }

    fn settle_on_last_request(&self) {
        let from = self.store.get().get();
        let to = self.scroller.last_request().map(|i| i.get()).unwrap_or(from);
        if from != to {
            self.settle(from, to);
        }
    }

    fn key(&self, key: &str) {
        if let Some(intent) = NavIntent::from_key(key) {
            self.dispatcher.dispatch(intent);
        }
    }

    fn unmount(&mut self) {
        self.tracker.take();
    }
}

#[test]
fn next_moves_one_slide_once_scroll_settles() {
    let deck = Deck::mount();
    for k in 0..SLIDES - 1 {
        assert_eq!(deck.store.get().get(), k);
        deck.dispatcher.next();
        assert_eq!(deck.store.get().get(), k, "active slide changes only after settling");
        deck.settle_on_last_request();
        assert_eq!(deck.store.get().get(), k + 1);
    }
}

#[test]
fn previous_on_first_slide_stays_put() {
    let deck = Deck::mount();
    deck.dispatcher.previous();
    deck.settle_on_last_request();
    assert_eq!(deck.store.get(), SlideIndex::FIRST);
    assert!(deck.store.is_first());
}

#[test]
fn rapid_arrow_presses_converge_to_a_valid_slide() {
    let deck = Deck::mount();
    deck.key("ArrowDown");
    deck.key("ArrowDown");
    deck.key("ArrowDown");

    // every press read slide 0 as current while the first scroll was in flight
    assert_eq!(deck.scroller.requests(), vec![1, 1, 1]);

    // the browser passes slide 1 and comes to rest on slide 2
    deck.viewport.fire(&[crossing("slide0", 0.3), crossing("slide1", 0.7)]);
    deck.viewport.fire(&[crossing("slide1", 0.1), crossing("slide2", 0.9)]);

    let active = deck.store.get().get();
    assert!(active <= 2);
    assert_eq!(active, 2);
}

#[test]
fn outcomes_link_from_the_title_slide() {
    let deck = Deck::mount();
    let outcomes = OUTLINE.iter().find(|e| e.label == "Outcomes").unwrap();

    deck.dispatcher.go_to(outcomes.target().get() as isize);
    assert_eq!(deck.scroller.last_request(), Some(SlideIndex::new(10)));
    deck.settle_on_last_request();

    assert_eq!(deck.store.get(), SlideIndex::new(10));
    assert_eq!(section_of(deck.store.get()).map(|e| e.label), Some("Outcomes"));
    assert!(!deck.store.is_first());
    assert!(!deck.store.is_last());
}

#[test]
fn next_on_last_slide_is_a_no_op() {
    let deck = Deck::mount();
    deck.dispatcher.go_to(11);
    deck.settle_on_last_request();
    assert!(deck.store.is_last());

    deck.key("ArrowRight");
    deck.settle_on_last_request();
    assert_eq!(deck.store.get(), SlideIndex::new(11));
    assert_eq!(deck.scroller.last_request(), Some(SlideIndex::new(11)));
}

#[test]
fn stable_position_activates_its_single_qualifying_slide() {
    let deck = Deck::mount();
    let batch = [crossing("slide5", 0.3), crossing("slide6", 1.0), crossing("slide7", 0.0)];
    deck.viewport.fire(&batch);

    let qualifying: Vec<usize> = batch
        .iter()
        .filter(|c| c.is_entering(0.5))
        .filter_map(|c| SlideIndex::from_element_id(&c.target_id, "slide"))
        .map(|i| i.get())
        .collect();
    assert_eq!(qualifying, vec![6]);
    assert_eq!(deck.store.get(), SlideIndex::new(6));

    // slide6 starts to leave while nothing else has crossed the threshold yet
    deck.viewport.fire(&[crossing("slide6", 0.4), crossing("slide7", 0.2)]);
    assert_eq!(deck.store.get(), SlideIndex::new(6));
}

#[test]
fn nothing_changes_after_unmount() {
    let mut deck = Deck::mount();
    deck.settle(0, 4);
    assert_eq!(deck.store.get().get(), 4);

    deck.unmount();
    assert!(deck.viewport.is_disposed());
    assert!(!deck.viewport.fire(&[crossing("slide7", 1.0)]));
    assert_eq!(deck.store.get().get(), 4);
}
