/// What a slide widget needs from the layer that renders it.
pub trait SlideSurface {
    /// Rendered width of one slide in pixels. Zero when not laid out yet.
    fn slide_width(&self) -> f32;

    /// Horizontal translation of the slide strip.
    fn set_offset(&mut self, offset: f32);

    /// Toggles eased movement between offsets.
    fn set_transition(&mut self, enabled: bool);

    fn set_slide_active(&mut self, index: usize, active: bool);

    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Accessible position label, e.g. "2 of 5".
    fn set_slide_label(&mut self, index: usize, label: &str);
}

/// Surface without a screen. Keeps the last value pushed for every slide.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    pub width: f32,
    pub offset: f32,
    pub transition: bool,
    pub active_slides: Vec<bool>,
    pub active_indicators: Vec<bool>,
    pub labels: Vec<String>,
    /// Number of `set_offset` calls, to observe re-renders.
    pub offset_writes: usize,
}

impl HeadlessSurface {
    pub fn new(len: usize, width: f32) -> Self {
        Self {
            width,
            offset: 0.0,
            transition: true,
            active_slides: vec![false; len],
            active_indicators: vec![false; len],
            labels: vec![String::new(); len],
            offset_writes: 0,
        }
    }

    pub fn active_indicator_count(&self) -> usize {
        self.active_indicators.iter().filter(|active| **active).count()
    }
}

impl SlideSurface for HeadlessSurface {
    fn slide_width(&self) -> f32 {
        self.width
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.offset_writes += 1;
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.active_slides.get_mut(index) {
            *slot = active;
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.active_indicators.get_mut(index) {
            *slot = active;
        }
    }

    fn set_slide_label(&mut self, index: usize, label: &str) {
        if let Some(slot) = self.labels.get_mut(index) {
            *slot = label.to_string();
        }
    }
}
