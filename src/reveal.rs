use tracing::debug;

use crate::constants::REVEAL_THRESHOLD;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealSection {
    /// Page coordinates, pixels.
    pub top: f32,
    pub height: f32,
    /// Inside a tab panel: shown by its tab group, never by scrolling.
    pub in_tab: bool,
    pub visible: bool,
    observed: bool,
}

impl RevealSection {
    pub fn new(top: f32, height: f32, in_tab: bool) -> Self {
        Self {
            top,
            height,
            in_tab,
            visible: false,
            observed: false,
        }
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// Fraction of the section inside `[viewport_top, viewport_top + viewport_height)`.
    pub fn intersection_ratio(&self, viewport_top: f32, viewport_height: f32) -> f32 {
        let viewport_bottom = viewport_top + viewport_height;
        if self.height <= 0.0 {
            let inside = self.top >= viewport_top && self.top <= viewport_bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        let overlap = (self.top + self.height).min(viewport_bottom) - self.top.max(viewport_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f32,
    sections: Vec<RevealSection>,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            sections: Vec::new(),
        }
    }

    pub fn sections(&self) -> &[RevealSection] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [RevealSection] {
        &mut self.sections
    }

    /// Replaces the tracked sections, e.g. after a page switch.
    pub fn set_sections(&mut self, sections: Vec<RevealSection>) {
        self.sections = sections;
    }

    /// Hides and observes every section outside tab panels. Replaces any
    /// observation already in place.
    pub fn observe_all(&mut self) {
        for section in self.sections.iter_mut().filter(|s| !s.in_tab) {
            section.visible = false;
            section.observed = true;
        }
    }

    /// Reveals observed sections that cross the threshold and returns their
    /// indices.
    pub fn update(&mut self, viewport_top: f32, viewport_height: f32) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (i, section) in self.sections.iter_mut().enumerate() {
            if !section.observed {
                continue;
            }
            let ratio = section.intersection_ratio(viewport_top, viewport_height);
            if ratio > 0.0 && ratio >= self.threshold {
                section.visible = true;
                section.observed = false;
                revealed.push(i);
            }
        }
        if !revealed.is_empty() {
            debug!(?revealed, "sections revealed");
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer() -> RevealObserver {
        let mut observer = RevealObserver::default();
        observer.set_sections(vec![
            RevealSection::new(0.0, 400.0, false),
            RevealSection::new(800.0, 500.0, false),
            RevealSection::new(1400.0, 300.0, true),
        ]);
        observer.observe_all();
        observer
    }

    #[test]
    fn test_intersection_ratio() {
        let section = RevealSection::new(100.0, 200.0, false);
        assert_eq!(section.intersection_ratio(0.0, 600.0), 1.0);
        assert_eq!(section.intersection_ratio(250.0, 600.0), 0.25);
        assert_eq!(section.intersection_ratio(400.0, 600.0), 0.0);
    }

    #[test]
    fn test_reveals_on_threshold() {
        let mut o = observer();
        assert_eq!(o.update(0.0, 600.0), vec![0]);

        // 800..1300 shows 50px of 500 at viewport 250..850: 10%
        assert!(o.update(250.0, 600.0).is_empty());
        // 100px of 500 is 20%
        assert_eq!(o.update(300.0, 600.0), vec![1]);
    }

    #[test]
    fn test_revealed_sections_stop_being_observed() {
        let mut o = observer();
        o.update(0.0, 600.0);
        assert!(!o.sections()[0].is_observed());
        assert!(o.update(0.0, 600.0).is_empty());
        assert!(o.sections()[0].visible);
    }

    #[test]
    fn test_tab_sections_untouched() {
        let mut o = observer();
        o.sections_mut()[2].visible = true;
        o.observe_all();
        assert!(o.sections()[2].visible);
        assert!(!o.sections()[2].is_observed());
        assert!(o.update(1400.0, 600.0).is_empty());
    }

    #[test]
    fn test_observe_all_resets_revealed() {
        let mut o = observer();
        o.update(0.0, 600.0);
        o.observe_all();
        assert!(!o.sections()[0].visible);
        assert!(o.sections()[0].is_observed());
    }
}
