use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use super::slide_id::SlideIndex;

struct Inner {
    current: SlideIndex,
    slide_count: usize,
    next_key: u64,
    subscribers: Vec<(u64, Callback<SlideIndex>)>,
}

/// Read side of the active slide cell. Clones share the same cell.
#[derive(Clone)]
pub struct ActiveSlideStore {
    inner: Rc<RefCell<Inner>>,
}

/// The only handle allowed to change the active slide. Not `Clone`.
pub struct ActiveSlideWriter {
    inner: Rc<RefCell<Inner>>,
}

/// Keeps a subscriber registered until dropped.
pub struct Subscription {
    key: u64,
    inner: Weak<RefCell<Inner>>,
}

impl ActiveSlideStore {
    /// Creates the cell at slide 0 and hands out its single writer.
    pub fn new(slide_count: usize) -> (ActiveSlideStore, ActiveSlideWriter) {
        let inner = Rc::new(RefCell::new(Inner {
            current: SlideIndex::FIRST,
            slide_count,
            next_key: 0,
            subscribers: Vec::new(),
        }));
        (
            ActiveSlideStore { inner: inner.clone() },
            ActiveSlideWriter { inner },
        )
    }

    pub fn get(&self) -> SlideIndex {
        self.inner.borrow().current
    }

    pub fn slide_count(&self) -> usize {
        self.inner.borrow().slide_count
    }

    pub fn is_first(&self) -> bool {
        self.get() == SlideIndex::FIRST
    }

    pub fn is_last(&self) -> bool {
        self.get().get() + 1 >= self.slide_count()
    }

    pub fn subscribe(&self, callback: Callback<SlideIndex>) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let key = inner.next_key;
        inner.next_key += 1;
        inner.subscribers.push((key, callback));
        Subscription {
            key,
            inner: Rc::downgrade(&self.inner),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl PartialEq for ActiveSlideStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ActiveSlideWriter {
    /// Moves the active slide. Returns whether anything changed; indices
    /// past the end of the deck are ignored.
    pub fn set(&self, index: SlideIndex) -> bool {
        let subscribers = {
            let mut inner = self.inner.borrow_mut();
            if index.get() >= inner.slide_count || inner.current == index {
                return false;
            }
            debug!("active slide {} -> {}", inner.current, index);
            inner.current = index;
            inner
                .subscribers
                .iter()
                .map(|(_, cb)| cb.clone())
                .collect::<Vec<_>>()
        };
        // Emitted outside the borrow so subscribers may read the store.
        for cb in subscribers {
            cb.emit(index);
        }
        true
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(key, _)| *key != self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<usize>>>, Callback<SlideIndex>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let cb = {
            let seen = seen.clone();
            Callback::from(move |i: SlideIndex| seen.borrow_mut().push(i.get()))
        };
        (seen, cb)
    }

    #[test]
    fn starts_at_first_slide() {
        let (store, _writer) = ActiveSlideStore::new(12);
        assert_eq!(store.get(), SlideIndex::FIRST);
        assert!(store.is_first());
        assert!(!store.is_last());
    }

    #[test]
    fn notifies_subscribers_only_on_change() {
        let (store, writer) = ActiveSlideStore::new(12);
        let (seen, cb) = recorder();
        let _sub = store.subscribe(cb);

        assert!(writer.set(SlideIndex::new(3)));
        assert!(!writer.set(SlideIndex::new(3)));
        assert!(writer.set(SlideIndex::new(4)));

        assert_eq!(*seen.borrow(), vec![3, 4]);
        assert_eq!(store.get(), SlideIndex::new(4));
    }

    #[test]
    fn ignores_out_of_range_writes() {
        let (store, writer) = ActiveSlideStore::new(12);
        assert!(!writer.set(SlideIndex::new(12)));
        assert_eq!(store.get(), SlideIndex::FIRST);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let (store, writer) = ActiveSlideStore::new(12);
        let (seen, cb) = recorder();
        let sub = store.subscribe(cb);
        writer.set(SlideIndex::new(1));
        drop(sub);
        writer.set(SlideIndex::new(2));

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_can_read_the_store_while_notified() {
        let (store, writer) = ActiveSlideStore::new(12);
        let observed = Rc::new(RefCell::new(None));
        let _sub = {
            let reader = store.clone();
            let observed = observed.clone();
            store.subscribe(Callback::from(move |_| {
                *observed.borrow_mut() = Some(reader.get());
            }))
        };
        writer.set(SlideIndex::new(11));
        assert_eq!(*observed.borrow(), Some(SlideIndex::new(11)));
        assert!(store.is_last());
    }
}
