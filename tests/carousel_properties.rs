use std::time::Duration;

use brochure::carousel::wrap_index;
use brochure::{Carousel, CarouselConfig, HeadlessSurface};
use rand::Rng;

const WIDTH: f32 = 320.0;

fn carousel(len: usize) -> Carousel<HeadlessSurface> {
    Carousel::new(HeadlessSurface::new(len, WIDTH), len, CarouselConfig::default())
}

fn assert_single_indicator(c: &Carousel<HeadlessSurface>) {
    assert_eq!(c.surface().active_indicator_count(), 1);
    assert!(c.surface().active_indicators[c.current_index()]);
    let derived: Vec<bool> = c.indicators().collect();
    assert_eq!(derived, c.surface().active_indicators);
}

#[test]
fn go_to_slide_wraps_any_target() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let len = rng.random_range(1..12usize);
        let target = rng.random_range(-1000..1000i64);
        let mut c = carousel(len);
        c.go_to_slide(target);

        let n = len as i64;
        let expected = (((target % n) + n) % n) as usize;
        assert_eq!(c.current_index(), expected, "len={len} target={target}");
        assert_eq!(wrap_index(target, len), Some(expected));
        assert_single_indicator(&c);
    }
}

#[test]
fn next_then_previous_restores_index() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let len = rng.random_range(1..10usize);
        let mut c = carousel(len);
        c.go_to_slide(rng.random_range(0..len as i64));
        let before = c.current_index();

        c.next();
        c.previous();
        assert_eq!(c.current_index(), before);
    }
}

#[test]
fn short_drag_snaps_back() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let mut c = carousel(5);
        c.go_to_slide(rng.random_range(0..5));
        let index = c.current_index();

        let start = rng.random_range(0.0..1000.0f32);
        let delta = rng.random_range(-49.0..=49.0f32);
        c.on_drag_start(Some(start));
        c.on_drag_move(Some(start + delta * 0.5));
        c.on_drag_end(Some(start + delta));

        assert_eq!(c.current_index(), index);
        assert_eq!(c.offset(), -(WIDTH * index as f32).round());
        assert_eq!(c.surface().offset, c.offset());
        assert!(!c.is_dragging());
        assert_single_indicator(&c);
    }
}

#[test]
fn long_drag_changes_slide() {
    let mut c = carousel(4);

    // Pointer moved right: previous slide
    c.on_drag_start(Some(100.0));
    c.on_drag_end(Some(151.0));
    assert_eq!(c.current_index(), 3);

    // Pointer moved left: next slide
    c.on_drag_start(Some(300.0));
    c.on_drag_end(Some(249.0));
    assert_eq!(c.current_index(), 0);
    assert_single_indicator(&c);
}

#[test]
fn drag_example_advances_one_slide() {
    let mut c = carousel(3);
    c.on_drag_start(Some(100.0));
    c.on_drag_end(Some(40.0));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn navigation_examples_wrap() {
    let mut c = carousel(3);
    c.go_to_slide(2);
    c.next();
    assert_eq!(c.current_index(), 0);

    c.previous();
    assert_eq!(c.current_index(), 2);
}

#[test]
fn restarting_auto_advance_keeps_one_timer() {
    let mut c = carousel(3);
    c.start_auto_advance(Duration::from_millis(1000));
    c.start_auto_advance(Duration::from_millis(1000));

    c.update(Duration::from_millis(1000));
    assert_eq!(c.current_index(), 1, "a duplicate timer would have advanced twice");

    c.update(Duration::from_millis(999));
    assert_eq!(c.current_index(), 1);
    c.update(Duration::from_millis(1));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn navigation_restarts_auto_advance() {
    let mut c = carousel(3);
    c.update(Duration::from_millis(4000));
    c.next();
    c.update(Duration::from_millis(4000));
    assert_eq!(c.current_index(), 1, "timer restarted by the click");
}

#[test]
fn independent_carousels_share_nothing() {
    let mut a = carousel(3);
    let mut b = carousel(5);
    a.next();
    b.previous();
    b.on_drag_start(Some(10.0));

    assert_eq!(a.current_index(), 1);
    assert_eq!(b.current_index(), 4);
    assert!(!a.is_dragging());
    assert!(a.is_auto_advancing());
    assert!(!b.is_auto_advancing());
}

#[test]
fn random_event_sequences_keep_invariants() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let len = rng.random_range(1..8usize);
        let mut c = carousel(len);
        for _ in 0..200 {
            match rng.random_range(0..8) {
                0 => c.next(),
                1 => c.previous(),
                2 => c.go_to_slide(rng.random_range(-50..50)),
                3 => c.on_drag_start(Some(rng.random_range(0.0..800.0))),
                4 => c.on_drag_move(Some(rng.random_range(0.0..800.0))),
                5 => c.on_drag_end(Some(rng.random_range(0.0..800.0))),
                6 => c.on_resize(),
                _ => c.update(Duration::from_millis(rng.random_range(0..3000))),
            }
            assert!(c.current_index() < len);
            assert_single_indicator(&c);
            if c.is_dragging() {
                assert!(!c.is_auto_advancing());
            }
        }
    }
}
