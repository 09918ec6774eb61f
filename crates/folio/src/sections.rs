//! Section layout, visibility tracking and scrolling.
//!
//! Sections are stacked in a virtual document, each at least one viewport
//! tall. A [`SectionObserver`] watches a thin band across the middle of the
//! viewport and reports sections entering or leaving it; the
//! [`ActiveSectionTracker`] turns those reports into the active section.

use folio_core::Section;

/// Fraction of the viewport excluded from the band at the top and bottom.
pub const ROOT_MARGIN: f32 = 0.45;

/// Fraction of the remaining distance covered per frame while scrolling.
const SCROLL_EASE: f32 = 0.2;
/// Distance in rows below which a scroll snaps to its target.
const SCROLL_SNAP: f32 = 0.5;

/// Vertical extent of one section in the document, in rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Positions of all sections for a given viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    spans: Vec<SectionSpan>,
}

impl DocumentLayout {
    /// Stack sections with `content_rows(section)` rows of content, each at
    /// least `viewport_height` rows tall.
    pub fn new(viewport_height: u16, content_rows: impl Fn(Section) -> usize) -> Self {
        let mut top = 0.0;
        let spans = Section::ALL
            .into_iter()
            .map(|section| {
                let height = (viewport_height as f32).max(content_rows(section) as f32).max(1.0);
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top += height;
                span
            })
            .collect();
        Self { spans }
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: Section) -> SectionSpan {
        self.spans[section.index()]
    }

    /// Total document height in rows.
    pub fn height(&self) -> f32 {
        self.spans.last().map_or(0.0, SectionSpan::bottom)
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self, viewport_height: u16) -> f32 {
        (self.height() - viewport_height as f32).max(0.0)
    }
}

/// One visibility report, like an intersection observer entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub section: Section,
    /// Fraction of the section inside the band.
    pub ratio: f32,
    pub is_intersecting: bool,
}

/// Reports sections whose visibility in the center band changed.
#[derive(Debug, Clone)]
pub struct SectionObserver {
    root_margin: f32,
    threshold: f32,
    /// Last reported state per section; `None` before the first report.
    last: [Option<bool>; 4],
}

impl Default for SectionObserver {
    fn default() -> Self {
        Self::new(ROOT_MARGIN, 0.0)
    }
}

impl SectionObserver {
    /// `root_margin` shrinks the viewport by that fraction at the top and the
    /// bottom; a section counts as intersecting once more than `threshold`
    /// of it is inside what remains.
    pub fn new(root_margin: f32, threshold: f32) -> Self {
        Self {
            root_margin: root_margin.clamp(0.0, 0.5),
            threshold: threshold.clamp(0.0, 1.0),
            last: [None; 4],
        }
    }

    /// The band `[top, bottom]` in document rows for a scroll position.
    pub fn band(&self, scroll: f32, viewport_height: u16) -> (f32, f32) {
        let h = viewport_height as f32;
        (scroll + h * self.root_margin, scroll + h - h * self.root_margin)
    }

    /// Compare every section against the band and return the entries whose
    /// intersecting state changed. The first call reports every section.
    pub fn observe(
        &mut self,
        layout: &DocumentLayout,
        scroll: f32,
        viewport_height: u16,
    ) -> Vec<IntersectionEntry> {
        let (band_top, band_bottom) = self.band(scroll, viewport_height);
        let mut entries = Vec::new();

        for span in layout.spans() {
            let overlap = (span.bottom().min(band_bottom) - span.top.max(band_top)).max(0.0);
            let ratio = if span.height > 0.0 {
                overlap / span.height
            } else {
                0.0
            };
            let is_intersecting = overlap > 0.0 && ratio >= self.threshold;

            let slot = &mut self.last[span.section.index()];
            if *slot != Some(is_intersecting) {
                *slot = Some(is_intersecting);
                entries.push(IntersectionEntry {
                    section: span.section,
                    ratio,
                    is_intersecting,
                });
            }
        }

        entries
    }

    /// Forget previous reports, e.g. after the layout changed.
    pub fn reset(&mut self) {
        self.last = [None; 4];
    }
}

/// Tracks which section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSectionTracker {
    active: Section,
}

impl ActiveSectionTracker {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Jump straight to `section`, as navigation does.
    pub fn set(&mut self, section: Section) {
        self.active = section;
    }

    /// Apply observer entries. Every entry that is intersecting makes its
    /// section active, so the last one wins. Returns the new section if it
    /// changed.
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> Option<Section> {
        let before = self.active;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            self.active = entry.section;
        }
        (self.active != before).then_some(self.active)
    }
}

/// Eased vertical scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmoothScroll {
    position: f32,
    target: f32,
}

impl SmoothScroll {
    /// Current offset in rows.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Start easing toward `target`, clamped to `[0, max]`.
    pub fn scroll_to(&mut self, target: f32, max: f32) {
        self.target = target.clamp(0.0, max.max(0.0));
    }

    /// Move the target by `delta` rows.
    pub fn scroll_by(&mut self, delta: f32, max: f32) {
        self.scroll_to(self.target + delta, max);
    }

    /// Re-clamp after the document shrank.
    pub fn clamp(&mut self, max: f32) {
        let max = max.max(0.0);
        self.target = self.target.min(max);
        self.position = self.position.min(max);
    }

    /// Advance one frame. Returns `true` while still moving.
    pub fn step(&mut self) -> bool {
        let remaining = self.target - self.position;
        if remaining.abs() < SCROLL_SNAP {
            self.position = self.target;
            return false;
        }
        self.position += remaining * SCROLL_EASE;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(viewport: u16) -> DocumentLayout {
        DocumentLayout::new(viewport, |_| 10)
    }

    #[test]
    fn test_layout_stacks_sections() {
        let layout = DocumentLayout::new(20, |s| if s == Section::Projects { 45 } else { 5 });
        let tops: Vec<f32> = layout.spans().iter().map(|s| s.top).collect();
        assert_eq!(tops, vec![0.0, 20.0, 40.0, 85.0]);
        assert_eq!(layout.height(), 105.0);
        assert_eq!(layout.max_scroll(20), 85.0);
        assert_eq!(layout.span(Section::About).height, 20.0);
    }

    #[test]
    fn test_band_is_center_slice() {
        let observer = SectionObserver::default();
        let (top, bottom) = observer.band(100.0, 20);
        assert!((top - 109.0).abs() < 1e-4);
        assert!((bottom - 111.0).abs() < 1e-4);
    }

    #[test]
    fn test_first_observe_reports_every_section() {
        let mut observer = SectionObserver::default();
        let entries = observer.observe(&layout(20), 0.0, 20);
        assert_eq!(entries.len(), 4);
        let intersecting: Vec<Section> = entries
            .iter()
            .filter(|e| e.is_intersecting)
            .map(|e| e.section)
            .collect();
        assert_eq!(intersecting, vec![Section::Home]);
    }

    #[test]
    fn test_observe_reports_only_changes() {
        let layout = layout(20);
        let mut observer = SectionObserver::default();
        observer.observe(&layout, 0.0, 20);
        assert!(observer.observe(&layout, 1.0, 20).is_empty());

        // Scrolled one viewport down, the band sits inside Skills.
        let entries = observer.observe(&layout, 20.0, 20);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| e.section == Section::Home && !e.is_intersecting));
        assert!(entries.iter().any(|e| e.section == Section::Skills && e.is_intersecting));
    }

    #[test]
    fn test_threshold_requires_ratio() {
        let layout = layout(20);
        let mut observer = SectionObserver::new(ROOT_MARGIN, 0.5);
        let entries = observer.observe(&layout, 0.0, 20);
        assert!(entries.iter().all(|e| !e.is_intersecting));
    }

    #[test]
    fn test_reset_replays_everything() {
        let layout = layout(20);
        let mut observer = SectionObserver::default();
        observer.observe(&layout, 0.0, 20);
        observer.reset();
        assert_eq!(observer.observe(&layout, 0.0, 20).len(), 4);
    }

    #[test]
    fn test_tracker_follows_scroll() {
        let layout = layout(20);
        let mut observer = SectionObserver::default();
        let mut tracker = ActiveSectionTracker::default();

        assert_eq!(tracker.apply(&observer.observe(&layout, 0.0, 20)), None);
        assert_eq!(
            tracker.apply(&observer.observe(&layout, 45.0, 20)),
            Some(Section::Projects)
        );
        assert_eq!(tracker.apply(&observer.observe(&layout, 46.0, 20)), None);
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn test_tracker_last_entry_wins() {
        let mut tracker = ActiveSectionTracker::default();
        let entries = [
            IntersectionEntry {
                section: Section::Skills,
                ratio: 0.1,
                is_intersecting: true,
            },
            IntersectionEntry {
                section: Section::About,
                ratio: 0.1,
                is_intersecting: true,
            },
            IntersectionEntry {
                section: Section::Projects,
                ratio: 0.0,
                is_intersecting: false,
            },
        ];
        assert_eq!(tracker.apply(&entries), Some(Section::About));
    }

    #[test]
    fn test_smooth_scroll_eases_and_snaps() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_to(40.0, 100.0);
        assert!(scroll.step());
        assert!((scroll.position() - 8.0).abs() < 1e-4);

        let mut frames = 1;
        while scroll.step() {
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(scroll.position(), 40.0);
    }

    #[test]
    fn test_smooth_scroll_clamps() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_by(-5.0, 100.0);
        assert_eq!(scroll.target(), 0.0);
        scroll.scroll_to(500.0, 100.0);
        assert_eq!(scroll.target(), 100.0);
        scroll.clamp(30.0);
        assert_eq!(scroll.target(), 30.0);
    }
}
