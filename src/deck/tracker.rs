use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use serde::Deserialize;

use super::active_slide::ActiveSlideWriter;
use super::slide_id::SlideIndex;
use super::viewport::{Crossing, Observation, ViewportObserver};

/// How a batch with several entering sections is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Delivery order decides: the last entering crossing wins.
    #[default]
    LastInBatch,
    /// The entering crossing with the largest ratio wins, later ones on equal ratios.
    GreatestRatio,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerOptions {
    pub threshold: f64,
    pub id_prefix: String,
    pub tie_break: TieBreak,
    pub slide_count: usize,
}

/// Picks the slide a batch moves the deck to, if any.
pub fn resolve_batch(batch: &[Crossing], options: &TrackerOptions) -> Option<SlideIndex> {
    let mut winner: Option<(SlideIndex, f64)> = None;

    for crossing in batch.iter().filter(|c| c.is_entering(options.threshold)) {
        let index = match SlideIndex::from_element_id(&crossing.target_id, &options.id_prefix) {
            Some(index) if index.get() < options.slide_count => index,
            _ => {
                debug!("ignoring crossing for unknown section {:?}", crossing.target_id);
                continue;
            }
        };
        winner = match (options.tie_break, winner) {
            (TieBreak::GreatestRatio, Some((_, best))) if crossing.ratio < best => winner,
            _ => Some((index, crossing.ratio)),
        };
    }

    winner.map(|(index, _)| index)
}

/// Watches every slide section and writes the one that is in view into the
/// active slide store. Releases its observer when disposed or dropped.
pub struct ActiveSlideTracker<O: ViewportObserver> {
    observer: O,
    threshold: f64,
    disposed: Rc<Cell<bool>>,
}

impl<O: ViewportObserver> ActiveSlideTracker<O> {
    pub fn new(mut observer: O, writer: ActiveSlideWriter, options: TrackerOptions) -> Self {
        let disposed = Rc::new(Cell::new(false));
        let threshold = options.threshold;

        {
            let disposed = disposed.clone();
            observer.on_crossing(Box::new(move |batch: &[Crossing]| {
                if disposed.get() {
                    return Observation::Stop;
                }
                if let Some(index) = resolve_batch(batch, &options) {
                    writer.set(index);
                }
                Observation::Continue
            }));
        }

        ActiveSlideTracker {
            observer,
            threshold,
            disposed,
        }
    }

    pub fn observe(&mut self, section: &O::Target) {
        if !self.disposed.get() {
            self.observer.observe(section, self.threshold);
        }
    }

    pub fn observe_all<'a>(&mut self, sections: impl IntoIterator<Item = &'a O::Target>)
    where
        O::Target: 'a,
    {
        for section in sections {
            self.observe(section);
        }
    }

    pub fn dispose(&mut self) {
        if !self.disposed.replace(true) {
            self.observer.dispose();
        }
    }
}

impl<O: ViewportObserver> Drop for ActiveSlideTracker<O> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::active_slide::ActiveSlideStore;
    use crate::deck::testing::{crossing, ManualViewport};
    use pretty_assertions::assert_eq;

    fn options(tie_break: TieBreak) -> TrackerOptions {
        TrackerOptions {
            threshold: 0.5,
            id_prefix: "slide".into(),
            tie_break,
            slide_count: 12,
        }
    }

    #[test]
    fn entering_section_becomes_active() {
        let batch = [crossing("slide3", 0.62)];
        assert_eq!(resolve_batch(&batch, &options(TieBreak::LastInBatch)), Some(SlideIndex::new(3)));
    }

    #[test]
    fn leaving_sections_do_not_count() {
        let batch = [crossing("slide2", 0.3), crossing("slide4", 0.0)];
        assert_eq!(resolve_batch(&batch, &options(TieBreak::LastInBatch)), None);
    }

    #[test]
    fn last_entering_crossing_wins_by_default() {
        let batch = [crossing("slide4", 0.9), crossing("slide5", 0.5), crossing("slide6", 0.1)];
        assert_eq!(resolve_batch(&batch, &options(TieBreak::LastInBatch)), Some(SlideIndex::new(5)));
    }

    #[test]
    fn greatest_ratio_prefers_the_most_visible_section() {
        let batch = [crossing("slide4", 0.9), crossing("slide5", 0.5)];
        assert_eq!(resolve_batch(&batch, &options(TieBreak::GreatestRatio)), Some(SlideIndex::new(4)));

        let tied = [crossing("slide4", 0.7), crossing("slide5", 0.7)];
        assert_eq!(resolve_batch(&tied, &options(TieBreak::GreatestRatio)), Some(SlideIndex::new(5)));
    }

    #[test]
    fn unparseable_and_out_of_range_ids_are_ignored() {
        let batch = [crossing("hero", 1.0), crossing("slideX", 1.0), crossing("slide12", 1.0)];
        assert_eq!(resolve_batch(&batch, &options(TieBreak::LastInBatch)), None);

        let mixed = [crossing("slide2", 0.8), crossing("slide-1", 1.0)];
        assert_eq!(resolve_batch(&mixed, &options(TieBreak::LastInBatch)), Some(SlideIndex::new(2)));
    }

    #[test]
    fn tracker_writes_observed_sections_into_the_store() {
        let viewport = ManualViewport::new();
        let (store, writer) = ActiveSlideStore::new(12);
        let mut tracker = ActiveSlideTracker::new(viewport.clone(), writer, options(TieBreak::LastInBatch));
        let ids: Vec<String> = (0..12).map(|i| format!("slide{}", i)).collect();
        tracker.observe_all(&ids);

        assert_eq!(viewport.observed().len(), 12);
        assert!(viewport.observed().iter().all(|(_, threshold)| *threshold == 0.5));

        viewport.fire(&[crossing("slide1", 0.55)]);
        assert_eq!(store.get(), SlideIndex::new(1));

        viewport.fire(&[crossing("bogus", 1.0)]);
        assert_eq!(store.get(), SlideIndex::new(1));
    }

    #[test]
    fn disposed_tracker_releases_observer_and_ignores_batches() {
        let viewport = ManualViewport::new();
        let (store, writer) = ActiveSlideStore::new(12);
        let mut tracker = ActiveSlideTracker::new(viewport.clone(), writer, options(TieBreak::LastInBatch));
        tracker.observe(&"slide0".to_string());
        tracker.dispose();

        assert!(viewport.is_disposed());
        viewport.fire(&[crossing("slide5", 1.0)]);
        assert_eq!(store.get(), SlideIndex::FIRST);

        tracker.observe(&"slide1".to_string());
        assert!(viewport.observed().is_empty());
    }

    #[test]
    fn dropping_tracker_disposes_it() {
        let viewport = ManualViewport::new();
        let (_store, writer) = ActiveSlideStore::new(12);
        drop(ActiveSlideTracker::new(viewport.clone(), writer, options(TieBreak::LastInBatch)));
        assert!(viewport.is_disposed());
    }
}
