use super::slide_id::SlideIndex;

/// A header link covering a contiguous run of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    pub label: &'static str,
    pub first: usize,
    pub last: usize,
}

impl OutlineEntry {
    const fn single(label: &'static str, index: usize) -> Self {
        OutlineEntry { label, first: index, last: index }
    }

    const fn range(label: &'static str, first: usize, last: usize) -> Self {
        OutlineEntry { label, first, last }
    }

    pub fn target(&self) -> SlideIndex {
        SlideIndex::new(self.first)
    }

    pub fn contains(&self, active: SlideIndex) -> bool {
        (self.first..=self.last).contains(&active.get())
    }
}

pub const OUTLINE: [OutlineEntry; 5] = [
    OutlineEntry::single("Overview", 0),
    OutlineEntry::range("Analysis", 1, 2),
    OutlineEntry::range("Strategy", 3, 9),
    OutlineEntry::single("Outcomes", 10),
    OutlineEntry::single("Next Steps", 11),
];

/// The header entry to highlight for `active`, if any.
pub fn section_of(active: SlideIndex) -> Option<&'static OutlineEntry> {
    OUTLINE.iter().find(|entry| entry.contains(active))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_slide_belongs_to_exactly_one_section() {
        for i in 0..12 {
            let matches = OUTLINE.iter().filter(|e| e.contains(SlideIndex::new(i))).count();
            assert_eq!(matches, 1, "slide {}", i);
        }
    }

    #[test]
    fn ranges_highlight_their_whole_run() {
        assert_eq!(section_of(SlideIndex::new(2)).map(|e| e.label), Some("Analysis"));
        assert_eq!(section_of(SlideIndex::new(3)).map(|e| e.label), Some("Strategy"));
        assert_eq!(section_of(SlideIndex::new(9)).map(|e| e.label), Some("Strategy"));
        assert_eq!(section_of(SlideIndex::new(10)).map(|e| e.label), Some("Outcomes"));
        assert_eq!(section_of(SlideIndex::new(12)), None);
    }

    #[test]
    fn links_target_the_start_of_their_range() {
        let targets: Vec<usize> = OUTLINE.iter().map(|e| e.target().get()).collect();
        assert_eq!(targets, vec![0, 1, 3, 10, 11]);
    }
}
