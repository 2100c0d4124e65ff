use std::fmt;

/// Prefix of every slide section's element id (`slide0`, `slide1`, ...).
pub const DEFAULT_PREFIX: &str = "slide";

/// Position of a slide section in the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideIndex(usize);

impl SlideIndex {
    pub const FIRST: SlideIndex = SlideIndex(0);

    pub fn new(index: usize) -> Self {
        SlideIndex(index)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Clamps any requested position, negative ones included, into `[0, slide_count - 1]`.
    /// An empty deck clamps everything to the first slide.
    pub fn clamped(requested: isize, slide_count: usize) -> Self {
        let last = slide_count.saturating_sub(1);
        if requested <= 0 {
            SlideIndex(0)
        } else {
            SlideIndex((requested as usize).min(last))
        }
    }

    /// Parses `<prefix><decimal>` into an index. Anything else (missing prefix,
    /// sign, whitespace, trailing junk) is rejected.
    pub fn from_element_id(id: &str, prefix: &str) -> Option<Self> {
        let digits = id.strip_prefix(prefix)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<usize>().ok().map(SlideIndex)
    }

    pub fn element_id(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }

    /// Human slide number as shown in the deck ("01", "02", ...).
    pub fn label(self) -> String {
        format!("{:02}", self.0 + 1)
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_prefixed_decimal_ids() {
        assert_eq!(SlideIndex::from_element_id("slide0", "slide"), Some(SlideIndex(0)));
        assert_eq!(SlideIndex::from_element_id("slide11", "slide"), Some(SlideIndex(11)));
        assert_eq!(SlideIndex::from_element_id("page3", "page"), Some(SlideIndex(3)));
    }

    #[test]
    fn rejects_ids_that_are_not_slide_ids() {
        for id in ["", "slide", "slide-1", "slide+1", "slide 2", "slide3a", "3", "intro", "Slide3"] {
            assert_eq!(SlideIndex::from_element_id(id, "slide"), None, "id {:?}", id);
        }
    }

    #[test]
    fn element_id_round_trips_through_parse() {
        let id = SlideIndex(7).element_id(DEFAULT_PREFIX);
        assert_eq!(id, "slide7");
        assert_eq!(SlideIndex::from_element_id(&id, DEFAULT_PREFIX), Some(SlideIndex(7)));
    }

    #[test]
    fn clamps_to_deck_bounds() {
        assert_eq!(SlideIndex::clamped(-4, 12), SlideIndex(0));
        assert_eq!(SlideIndex::clamped(5, 12), SlideIndex(5));
        assert_eq!(SlideIndex::clamped(12, 12), SlideIndex(11));
        assert_eq!(SlideIndex::clamped(isize::MAX, 12), SlideIndex(11));
        assert_eq!(SlideIndex::clamped(3, 0), SlideIndex(0));
    }

    #[test]
    fn labels_are_one_based_and_padded() {
        assert_eq!(SlideIndex(0).label(), "01");
        assert_eq!(SlideIndex(11).label(), "12");
    }
}
