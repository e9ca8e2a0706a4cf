use brochure::constants::*;
use brochure::SlideSurface;
use raylib::prelude::*;

use crate::slide::HeroSlide;

/// Eases a value toward a target, like a CSS `transition` on one property.
struct Transition {
    tween: ease::Tween,
    elapsed: f32,
    target: f32,
}

impl Transition {
    fn new(from: f32, to: f32) -> Self {
        Self {
            tween: ease::Tween::new(ease::cubic_in_out, from, to, TRANSITION_DURATION),
            elapsed: 0.0,
            target: to,
        }
    }

    /// Current value, and whether the transition has finished.
    fn advance(&mut self, dt: f32) -> (f32, bool) {
        self.elapsed += dt;
        if self.elapsed >= TRANSITION_DURATION {
            (self.target, true)
        } else {
            (self.tween.apply(dt), false)
        }
    }
}

/// Horizontal strip of testimonial cards.
pub struct StripView {
    bounds: Rectangle,
    transition_enabled: bool,
    target: f32,
    displayed: f32,
    transition: Option<Transition>,
    active_slides: Vec<bool>,
    active_dots: Vec<bool>,
    labels: Vec<String>,
}

impl StripView {
    pub fn new(len: usize) -> Self {
        Self {
            bounds: Rectangle::new(0.0, 0.0, 0.0, 0.0),
            transition_enabled: true,
            target: 0.0,
            displayed: 0.0,
            transition: None,
            active_slides: vec![false; len],
            active_dots: vec![false; len],
            labels: vec![String::new(); len],
        }
    }

    /// Layout pass. The controller only reads the new width once a resize settles.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    /// Offset currently on screen, which trails the target while easing.
    pub fn displayed_offset(&self) -> f32 {
        self.displayed
    }

    pub fn is_slide_active(&self, index: usize) -> bool {
        self.active_slides.get(index).copied().unwrap_or(false)
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        self.active_dots.get(index).copied().unwrap_or(false)
    }

    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", String::as_str)
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(transition) = self.transition.as_mut() {
            let (value, done) = transition.advance(dt);
            self.displayed = value;
            if done {
                self.transition = None;
            }
        }
    }
}

impl SlideSurface for StripView {
    fn slide_width(&self) -> f32 {
        self.bounds.width
    }

    fn set_offset(&mut self, offset: f32) {
        self.target = offset;
        if self.transition_enabled && self.displayed != offset {
            self.transition = Some(Transition::new(self.displayed, offset));
        } else {
            self.transition = None;
            self.displayed = offset;
        }
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition_enabled = enabled;
        if !enabled {
            // Like dropping a CSS transition: jump to the value already set
            self.transition = None;
            self.displayed = self.target;
        }
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.active_slides.get_mut(index) {
            *slot = active;
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.active_dots.get_mut(index) {
            *slot = active;
        }
    }

    fn set_slide_label(&mut self, index: usize, label: &str) {
        if let Some(slot) = self.labels.get_mut(index) {
            *slot = label.to_string();
        }
    }
}

/// Hero slides stacked in place, cross-fading on change.
pub struct HeroView {
    slides: Vec<HeroSlide>,
    labels: Vec<String>,
    shown: Option<usize>,
    previous: Option<usize>,
    fade: Option<Transition>,
    fade_progress: f32,
}

impl HeroView {
    pub fn new(slides: Vec<HeroSlide>) -> Self {
        let len = slides.len();
        Self {
            slides,
            labels: vec![String::new(); len],
            shown: None,
            previous: None,
            fade: None,
            fade_progress: 1.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(fade) = self.fade.as_mut() {
            let (value, done) = fade.advance(dt);
            self.fade_progress = value;
            if done {
                self.fade = None;
                self.previous = None;
            }
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, dest: Rectangle) {
        if let Some(slide) = self.previous.and_then(|i| self.slides.get(i)) {
            slide.draw(d, dest, 1.0);
        }
        if let Some(index) = self.shown {
            if let Some(slide) = self.slides.get(index) {
                slide.draw(d, dest, self.fade_progress);
            }
            if let Some(label) = self.labels.get(index) {
                d.draw_text(label, (dest.x + dest.width) as i32 - 90, dest.y as i32 + 16, 18, Color::WHITE);
            }
        }
    }
}

impl SlideSurface for HeroView {
    fn slide_width(&self) -> f32 {
        0.0
    }

    fn set_offset(&mut self, _offset: f32) {}

    fn set_transition(&mut self, _enabled: bool) {}

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if !active || self.shown == Some(index) {
            return;
        }
        self.previous = self.shown;
        self.shown = Some(index);
        if self.previous.is_some() {
            self.fade_progress = 0.0;
            self.fade = Some(Transition::new(0.0, 1.0));
        }
    }

    fn set_indicator_active(&mut self, _index: usize, _active: bool) {}

    fn set_slide_label(&mut self, index: usize, label: &str) {
        if let Some(slot) = self.labels.get_mut(index) {
            *slot = label.to_string();
        }
    }
}

/// Fade-in progress per block, 0 hidden to 1 fully shown.
#[derive(Debug, Default)]
pub struct FadeTracker {
    progress: Vec<f32>,
}

impl FadeTracker {
    pub fn reset(&mut self, len: usize) {
        self.progress = vec![0.0; len];
    }

    /// Moves each entry toward its visibility.
    pub fn update(&mut self, dt: f32, visible: impl Iterator<Item = bool>) {
        for (progress, visible) in self.progress.iter_mut().zip(visible) {
            *progress = if visible {
                (*progress + dt / FADE_IN_DURATION).min(1.0)
            } else {
                0.0
            };
        }
    }

    pub fn progress(&self, index: usize) -> f32 {
        self.progress.get(index).copied().unwrap_or(0.0)
    }
}
