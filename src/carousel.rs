use std::time::Duration;

use tracing::debug;

use crate::constants::*;
use crate::state::DragState;
use crate::surface::SlideSurface;
use crate::timer::{Interval, Timeout};

/// Wraps any index into `0..len` with true modulo, so `-1` is the last slide.
/// Returns `None` for an empty sequence.
pub fn wrap_index(target: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(target.rem_euclid(len as i64) as usize)
}

pub fn slide_label(index: usize, len: usize) -> String {
    format!("{} of {}", index + 1, len)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub swipe_threshold: f32,
    pub auto_advance: Duration,
    pub resize_debounce: Duration,
    pub transition_settle: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            auto_advance: AUTO_ADVANCE_INTERVAL,
            resize_debounce: RESIZE_DEBOUNCE,
            transition_settle: TRANSITION_SETTLE,
        }
    }
}

pub struct Carousel<S: SlideSurface> {
    surface: S,
    len: usize,
    current_index: usize,
    offset: f32,
    drag: DragState,
    swipe_threshold: f32,
    auto_advance: Interval,
    resize: Timeout,
    transition_settle: Timeout,
}

impl<S: SlideSurface> Carousel<S> {
    /// Builds the controller and shows slide 0, which also arms auto-advance.
    pub fn new(surface: S, len: usize, config: CarouselConfig) -> Self {
        let mut carousel = Self {
            surface,
            len,
            current_index: 0,
            offset: 0.0,
            drag: DragState::Idle,
            swipe_threshold: config.swipe_threshold,
            auto_advance: Interval::new(config.auto_advance),
            resize: Timeout::new(config.resize_debounce),
            transition_settle: Timeout::new(config.transition_settle),
        };
        carousel.go_to_slide(0);
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Last offset pushed to the surface.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_active()
    }

    /// Active flag per indicator dot, derived from the current index.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| i == self.current_index)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn go_to_slide(&mut self, target: i64) {
        let Some(index) = wrap_index(target, self.len) else {
            return;
        };
        if index != self.current_index {
            debug!(from = self.current_index, to = index, "carousel slide change");
        }
        self.current_index = index;
        self.render();

        match self.drag {
            // Measure the rest of the drag from the newly shown slide
            DragState::Dragging { last_x, .. } => {
                self.drag = DragState::Dragging {
                    start_x: last_x,
                    baseline: self.offset,
                    last_x,
                };
            }
            DragState::Idle => self.auto_advance.start(),
        }
    }

    pub fn next(&mut self) {
        self.go_to_slide(self.current_index as i64 + 1);
    }

    pub fn previous(&mut self) {
        self.go_to_slide(self.current_index as i64 - 1);
    }

    /// Replaces the auto-advance period and (re)arms the single timer.
    pub fn start_auto_advance(&mut self, interval: Duration) {
        if self.is_empty() {
            return;
        }
        self.auto_advance.set_period(interval);
        if !self.is_dragging() {
            self.auto_advance.start();
        }
    }

    pub fn pause_auto_advance(&mut self) {
        self.auto_advance.cancel();
    }

    pub fn resume_auto_advance(&mut self) {
        if self.is_empty() || self.is_dragging() {
            return;
        }
        self.auto_advance.start();
    }

    pub fn on_hover_enter(&mut self) {
        self.pause_auto_advance();
    }

    pub fn on_hover_leave(&mut self) {
        self.resume_auto_advance();
    }

    /// Begins tracking the pointer. Without a coordinate there is nothing to
    /// measure against, so no drag starts.
    pub fn on_drag_start(&mut self, pointer_x: Option<f32>) {
        if self.is_empty() {
            return;
        }
        let Some(x) = pointer_x else {
            debug!("drag start without pointer position ignored");
            return;
        };

        self.drag = DragState::Dragging {
            start_x: x,
            baseline: self.offset,
            last_x: x,
        };
        self.auto_advance.cancel();
        self.surface.set_transition(false);
    }

    pub fn on_drag_move(&mut self, pointer_x: Option<f32>) {
        let DragState::Dragging { start_x, baseline, .. } = self.drag else {
            return;
        };
        let Some(x) = pointer_x else {
            return;
        };

        self.drag = DragState::Dragging {
            start_x,
            baseline,
            last_x: x,
        };
        self.offset = baseline + (x - start_x);
        self.surface.set_offset(self.offset);
    }

    /// Settles a drag. A missing coordinate falls back to the last pointer
    /// position seen, which is the start position if the pointer never moved.
    pub fn on_drag_end(&mut self, pointer_x: Option<f32>) {
        let DragState::Dragging { start_x, last_x, .. } = self.drag else {
            return;
        };
        self.drag = DragState::Idle;
        self.surface.set_transition(true);

        let delta = pointer_x.unwrap_or(last_x) - start_x;
        debug!(delta, "drag end");

        if delta > self.swipe_threshold {
            self.previous();
        } else if delta < -self.swipe_threshold {
            self.next();
        } else {
            self.render();
        }
        self.auto_advance.start();
    }

    /// Records a layout change. The re-render happens once the resize burst
    /// has been quiet for the debounce delay.
    pub fn on_resize(&mut self) {
        if self.is_empty() {
            return;
        }
        self.resize.schedule();
    }

    /// Advances every timer by one frame.
    pub fn update(&mut self, dt: Duration) {
        if self.is_empty() {
            return;
        }

        // Settle first so a re-render scheduled below waits a full frame
        if self.transition_settle.update(dt) && !self.is_dragging() {
            self.surface.set_transition(true);
        }

        if self.resize.update(dt) {
            self.surface.set_transition(false);
            if !self.is_dragging() {
                self.render();
            }
            self.transition_settle.schedule();
        }

        if !self.is_dragging() && self.auto_advance.update(dt) {
            self.next();
        }
    }

    fn render(&mut self) {
        let width = self.surface.slide_width();
        if width > 0.0 {
            self.offset = -(width * self.current_index as f32).round();
            self.surface.set_offset(self.offset);
        }

        for i in 0..self.len {
            let active = i == self.current_index;
            self.surface.set_slide_active(i, active);
            self.surface.set_indicator_active(i, active);
            self.surface.set_slide_label(i, &slide_label(i, self.len));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    fn carousel(len: usize) -> Carousel<HeadlessSurface> {
        Carousel::new(HeadlessSurface::new(len, 300.0), len, CarouselConfig::default())
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(-1, 3), Some(2));
        assert_eq!(wrap_index(3, 3), Some(0));
        assert_eq!(wrap_index(-7, 3), Some(2));
        assert_eq!(wrap_index(5, 0), None);
    }

    #[test]
    fn test_initial_render() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.offset(), 0.0);
        assert!(c.is_auto_advancing());
        assert_eq!(c.surface().labels, vec!["1 of 3", "2 of 3", "3 of 3"]);
        assert_eq!(c.surface().active_indicators, vec![true, false, false]);
    }

    #[test]
    fn test_offset_is_rounded() {
        let mut c = Carousel::new(HeadlessSurface::new(4, 333.4), 4, CarouselConfig::default());
        c.go_to_slide(2);
        assert_eq!(c.offset(), -667.0);
        assert_eq!(c.surface().offset, -667.0);
    }

    #[test]
    fn test_unmeasured_width_keeps_offset() {
        let mut c = Carousel::new(HeadlessSurface::new(3, 0.0), 3, CarouselConfig::default());
        c.next();
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.surface().offset_writes, 0);
        assert_eq!(c.surface().active_indicators, vec![false, true, false]);
    }

    #[test]
    fn test_drag_tracks_pointer_without_index_change() {
        let mut c = carousel(3);
        c.go_to_slide(1);
        c.on_drag_start(Some(200.0));
        assert!(!c.surface().transition);
        assert!(!c.is_auto_advancing());

        c.on_drag_move(Some(170.0));
        assert_eq!(c.offset(), -330.0);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_drag_end_without_pointer_uses_last_move() {
        let mut c = carousel(3);
        c.on_drag_start(Some(300.0));
        c.on_drag_move(Some(200.0));
        c.on_drag_end(None);
        assert_eq!(c.current_index(), 1);
        assert!(c.surface().transition);
        assert!(c.is_auto_advancing());
    }

    #[test]
    fn test_drag_start_without_pointer_is_ignored() {
        let mut c = carousel(3);
        c.on_drag_start(None);
        assert!(!c.is_dragging());
        assert!(c.is_auto_advancing());
    }

    #[test]
    fn test_timer_does_not_fire_mid_drag() {
        let mut c = carousel(3);
        c.on_drag_start(Some(100.0));
        c.on_drag_move(Some(90.0));
        c.update(Duration::from_secs(30));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.offset(), -10.0);
    }

    #[test]
    fn test_navigation_mid_drag_rebases_drag() {
        let mut c = carousel(3);
        c.on_drag_start(Some(100.0));
        c.next();
        assert_eq!(c.offset(), -300.0);

        c.on_drag_move(Some(110.0));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.offset(), -290.0, "drag continues around slide 1");
        assert!(!c.is_auto_advancing());

        // Only the displacement after the navigation counts toward a swipe
        c.on_drag_end(Some(140.0));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.offset(), -300.0);
        assert!(c.is_auto_advancing());
    }

    #[test]
    fn test_zero_interval_advances_every_frame() {
        let mut c = carousel(3);
        c.start_auto_advance(Duration::ZERO);
        c.update(Duration::from_millis(16));
        assert_eq!(c.current_index(), 1);
        c.update(Duration::from_millis(16));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_auto_advance_after_interval() {
        let mut c = carousel(3);
        c.update(Duration::from_millis(4999));
        assert_eq!(c.current_index(), 0);
        c.update(Duration::from_millis(1));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_hover_pauses_and_resumes() {
        let mut c = carousel(3);
        c.on_hover_enter();
        c.update(Duration::from_secs(20));
        assert_eq!(c.current_index(), 0);

        c.on_hover_leave();
        c.update(AUTO_ADVANCE_INTERVAL);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut c = carousel(3);
        c.go_to_slide(2);
        let writes = c.surface().offset_writes;

        c.surface_mut().width = 200.0;
        for _ in 0..5 {
            c.on_resize();
            c.update(Duration::from_millis(40));
        }
        assert_eq!(c.surface().offset_writes, writes, "no re-render while resizing");

        c.update(Duration::from_millis(60));
        assert_eq!(c.surface().offset_writes, writes + 1);
        assert_eq!(c.offset(), -400.0);
        assert!(!c.surface().transition);

        c.update(Duration::from_millis(50));
        assert!(c.surface().transition);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = carousel(0);
        c.next();
        c.previous();
        c.on_drag_start(Some(10.0));
        c.on_drag_end(Some(500.0));
        c.on_resize();
        c.update(Duration::from_secs(60));
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_dragging());
        assert!(!c.is_auto_advancing());
        assert_eq!(c.surface().offset_writes, 0);
    }
}
