use tracing::debug;

use crate::carousel::{slide_label, wrap_index};
use crate::surface::SlideSurface;

pub struct ImageSlider<S: SlideSurface> {
    surface: S,
    len: usize,
    current_index: usize,
}

impl<S: SlideSurface> ImageSlider<S> {
    pub fn new(surface: S, len: usize) -> Self {
        let mut slider = Self {
            surface,
            len,
            current_index: 0,
        };
        slider.show(0);
        slider
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

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn show(&mut self, index: i64) {
        let Some(index) = wrap_index(index, self.len) else {
            return;
        };
        debug!(index, "hero slide");
        self.current_index = index;

        for i in 0..self.len {
            self.surface.set_slide_active(i, i == index);
        }
        self.surface.set_slide_label(index, &slide_label(index, self.len));
    }

    pub fn next(&mut self) {
        self.show(self.current_index as i64 + 1);
    }

    pub fn previous(&mut self) {
        self.show(self.current_index as i64 - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    #[test]
    fn test_first_slide_shown() {
        let slider = ImageSlider::new(HeadlessSurface::new(2, 0.0), 2);
        assert_eq!(slider.surface().active_slides, vec![true, false]);
        assert_eq!(slider.surface().labels[0], "1 of 2");
    }

    #[test]
    fn test_buttons_loop() {
        let mut slider = ImageSlider::new(HeadlessSurface::new(3, 0.0), 3);
        slider.previous();
        assert_eq!(slider.current_index(), 2);
        assert_eq!(slider.surface().labels[2], "3 of 3");

        slider.next();
        slider.next();
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.surface().active_slides, vec![false, true, false]);
    }

    #[test]
    fn test_empty_slider() {
        let mut slider = ImageSlider::new(HeadlessSurface::new(0, 0.0), 0);
        slider.next();
        assert_eq!(slider.current_index(), 0);
    }
}
