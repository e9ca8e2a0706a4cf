use std::time::Duration;

use brochure::constants::*;
use brochure::content::{self, PageContent, Testimonial};
use brochure::nav::MenuIcon;
use brochure::site::{Block, BlockLayout};
use brochure::{CarouselConfig, Site};
use raylib::prelude::*;
use tracing::debug;

use crate::slide::HeroSlide;
use crate::view::{FadeTracker, HeroView, StripView};

const MARGIN: f32 = 40.0;
const SCROLL_STEP: f32 = 60.0;           // Pixels per wheel notch
const FADE_RISE: f32 = 24.0;             // Fade-in sections slide up by this much
const DOT_SPACING: f32 = 24.0;

const BACKGROUND: Color = Color::new(250, 246, 238, 255);
const INK: Color = Color::new(40, 32, 28, 255);
const ACCENT: Color = Color::new(176, 110, 48, 255);
const CARD: Color = Color::new(255, 255, 255, 255);
const MUTED: Color = Color::new(190, 180, 168, 255);

fn contains(rect: Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * color.a as f32) as u8)
}

struct HeroRegions {
    area: Rectangle,
    prev: Rectangle,
    next: Rectangle,
}

struct TestimonialRegions {
    area: Rectangle,
    strip: Rectangle,
    prev: Rectangle,
    next: Rectangle,
    dots: Vec<Rectangle>,
}

struct TabRegions {
    buttons: Vec<(Rectangle, String)>,
    panel: Rectangle,
}

/// Clickable areas for the current frame, in screen coordinates.
struct Regions {
    logo: Rectangle,
    hamburger: Option<Rectangle>,
    links: Vec<(Rectangle, String)>,
    hero: Option<HeroRegions>,
    testimonials: Option<TestimonialRegions>,
    tabs: Option<TabRegions>,
}

pub struct PreviewApp {
    site: Site<HeroView, StripView>,
    testimonials: Vec<Testimonial>,
    section_fades: FadeTracker,
    highlight_fades: FadeTracker,
    hovering_testimonials: bool,
    shown_page: Option<String>,
}

impl PreviewApp {
    pub fn new(hero_slides: Vec<HeroSlide>, config: CarouselConfig) -> Self {
        let testimonials = content::testimonials();
        let hero_len = hero_slides.len();
        let site = Site::with_builtin_content(
            HeroView::new(hero_slides),
            hero_len,
            StripView::new(testimonials.len()),
            config,
        );

        Self {
            site,
            testimonials,
            section_fades: FadeTracker::default(),
            highlight_fades: FadeTracker::default(),
            hovering_testimonials: false,
            shown_page: None,
        }
    }

    fn block_rect(&self, block: &BlockLayout, width: f32) -> Rectangle {
        Rectangle::new(
            MARGIN,
            HEADER_HEIGHT + block.top - self.site.scroll_y(),
            width - 2.0 * MARGIN,
            block.height,
        )
    }

    fn regions(&self, width: f32) -> Regions {
        let mobile = width < MOBILE_BREAKPOINT;
        let links: Vec<_> = self.site.router().links().to_vec();

        let (hamburger, link_rects): (Option<Rectangle>, Vec<(Rectangle, String)>) = if mobile {
            let hamburger = Rectangle::new(width - MARGIN - 40.0, 16.0, 40.0, 40.0);
            let rects = if self.site.menu().is_open() {
                links
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        let rect = Rectangle::new(0.0, HEADER_HEIGHT + i as f32 * 48.0, width, 48.0);
                        (rect, link.page_id.clone())
                    })
                    .collect()
            } else {
                Vec::new()
            };
            (Some(hamburger), rects)
        } else {
            let start = width - MARGIN - links.len() as f32 * 110.0;
            let rects = links
                .iter()
                .enumerate()
                .map(|(i, link)| {
                    let rect = Rectangle::new(start + i as f32 * 110.0, 20.0, 100.0, 32.0);
                    (rect, link.page_id.clone())
                })
                .collect();
            (None, rects)
        };

        let mut regions = Regions {
            logo: Rectangle::new(MARGIN, 16.0, 280.0, 40.0),
            hamburger,
            links: link_rects,
            hero: None,
            testimonials: None,
            tabs: None,
        };

        for block in self.site.layout() {
            let area = self.block_rect(block, width);
            match block.block {
                Block::Hero => {
                    let mid = area.y + area.height * 0.5 - 24.0;
                    regions.hero = Some(HeroRegions {
                        area,
                        prev: Rectangle::new(area.x + 16.0, mid, 48.0, 48.0),
                        next: Rectangle::new(area.x + area.width - 64.0, mid, 48.0, 48.0),
                    });
                }
                Block::Testimonials => {
                    let strip = Rectangle::new(area.x + 56.0, area.y + 16.0, area.width - 112.0, area.height - 64.0);
                    let mid = strip.y + strip.height * 0.5 - 20.0;
                    let count = self.testimonials.len();
                    let first_dot = area.x + area.width * 0.5 - (count.saturating_sub(1)) as f32 * DOT_SPACING * 0.5;
                    let dots = (0..count)
                        .map(|i| Rectangle::new(first_dot + i as f32 * DOT_SPACING - 8.0, area.y + area.height - 32.0, 16.0, 16.0))
                        .collect();
                    regions.testimonials = Some(TestimonialRegions {
                        area,
                        strip,
                        prev: Rectangle::new(area.x, mid, 40.0, 40.0),
                        next: Rectangle::new(area.x + area.width - 40.0, mid, 40.0, 40.0),
                        dots,
                    });
                }
                Block::Tabs => {
                    let buttons = self
                        .current_tabs()
                        .iter()
                        .enumerate()
                        .map(|(i, tab)| (Rectangle::new(area.x + i as f32 * 150.0, area.y, 140.0, 40.0), tab.id.to_string()))
                        .collect();
                    regions.tabs = Some(TabRegions {
                        buttons,
                        panel: Rectangle::new(area.x, area.y + 56.0, area.width, area.height - 56.0),
                    });
                }
                Block::Title | Block::Section(_) => {}
            }
        }
        regions
    }

    fn current_tabs(&self) -> &[content::TabContent] {
        self.site.current_page().map(|p| p.tabs.as_slice()).unwrap_or(&[])
    }

    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;

        if rl.is_window_resized() {
            self.site.testimonials_mut().on_resize();
        }
        self.site.set_viewport_height(height - HEADER_HEIGHT);

        let regions = self.regions(width);
        if let Some(t) = &regions.testimonials {
            self.site.testimonials_mut().surface_mut().set_bounds(t.strip);
        }

        let mouse = rl.get_mouse_position();
        let on_screen = rl.is_cursor_on_screen();

        // --- Drag in progress ---
        if self.site.testimonials().is_dragging() {
            let carousel = self.site.testimonials_mut();
            if !on_screen {
                carousel.on_drag_end(None);
            } else if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                carousel.on_drag_end(Some(mouse.x));
            } else {
                carousel.on_drag_move(Some(mouse.x));
            }
        }

        // --- Hover pauses auto-advance ---
        let hovering = on_screen && regions.testimonials.as_ref().is_some_and(|t| contains(t.area, mouse));
        if hovering != self.hovering_testimonials {
            self.hovering_testimonials = hovering;
            if hovering {
                self.site.testimonials_mut().on_hover_enter();
            } else {
                self.site.testimonials_mut().on_hover_leave();
            }
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.site.scroll_by(-wheel * SCROLL_STEP);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.site.testimonials_mut().next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.site.testimonials_mut().previous();
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.click(&regions, mouse);
        }
    }

    fn click(&mut self, regions: &Regions, mouse: Vector2) {
        // Header and the open mobile menu sit above the page
        if contains(regions.logo, mouse) {
            self.site.click_logo();
            return;
        }
        if regions.hamburger.is_some_and(|r| contains(r, mouse)) {
            let open = self.site.toggle_menu();
            debug!(aria_expanded = self.site.menu().aria_expanded(), open, "hamburger clicked");
            return;
        }
        if let Some((_, page_id)) = regions.links.iter().find(|(r, _)| contains(*r, mouse)) {
            self.site.click_nav_link(page_id);
            return;
        }
        if mouse.y < HEADER_HEIGHT {
            return;
        }

        if let Some(hero) = &regions.hero {
            if contains(hero.prev, mouse) {
                self.site.hero_mut().previous();
                return;
            }
            if contains(hero.next, mouse) {
                self.site.hero_mut().next();
                return;
            }
        }

        if let Some(t) = &regions.testimonials {
            let carousel = self.site.testimonials_mut();
            if contains(t.strip, mouse) {
                carousel.on_drag_start(Some(mouse.x));
            } else if contains(t.prev, mouse) {
                carousel.previous();
            } else if contains(t.next, mouse) {
                carousel.next();
            } else if let Some(i) = t.dots.iter().position(|r| contains(*r, mouse)) {
                carousel.go_to_slide(i as i64);
            }
        }

        if let Some(tabs) = &regions.tabs {
            if let Some((_, tab_id)) = tabs.buttons.iter().find(|(r, _)| contains(*r, mouse)) {
                self.site.click_tab(tab_id);
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.site.update(Duration::from_secs_f32(dt));
        self.site.testimonials_mut().surface_mut().update(dt);
        self.site.hero_mut().surface_mut().update(dt);

        let page = self.site.router().current_page().map(str::to_string);
        if page != self.shown_page {
            let tab_count = self.current_tabs().len();
            self.section_fades.reset(self.site.reveal().sections().len());
            self.highlight_fades.reset(tab_count);
            self.shown_page = page;
        }

        self.section_fades
            .update(dt, self.site.reveal().sections().iter().map(|s| s.visible));

        let highlights: Vec<bool> = self
            .shown_page
            .as_deref()
            .and_then(|id| self.site.tab_group(id))
            .map(|g| g.panels().iter().map(|p| p.is_highlight_visible()).collect())
            .unwrap_or_default();
        self.highlight_fades.update(dt, highlights.into_iter());
    }

    pub fn render_frame(&self, d: &mut RaylibDrawHandle) {
        let width = d.get_screen_width() as f32;
        let height = d.get_screen_height() as f32;
        d.clear_background(BACKGROUND);

        let Some(page) = self.site.current_page() else {
            return;
        };
        let regions = self.regions(width);

        for block in self.site.layout() {
            let rect = self.block_rect(block, width);
            if rect.y > height || rect.y + rect.height < HEADER_HEIGHT {
                continue;
            }
            match block.block {
                Block::Title => {
                    d.draw_text(page.title, rect.x as i32, rect.y as i32 + 20, 40, INK);
                }
                Block::Hero => {
                    if let Some(hero) = &regions.hero {
                        self.draw_hero(d, hero);
                    }
                }
                Block::Testimonials => {
                    if let Some(t) = &regions.testimonials {
                        self.draw_testimonials(d, t, width);
                    }
                }
                Block::Tabs => {
                    if let Some(tabs) = &regions.tabs {
                        self.draw_tabs(d, page, tabs);
                    }
                }
                Block::Section(i) => self.draw_section(d, page, i, rect),
            }
        }

        self.draw_header(d, &regions, width);
    }

    fn draw_hero(&self, d: &mut RaylibDrawHandle, hero: &HeroRegions) {
        self.site.hero().surface().draw(d, hero.area);
        for (rect, glyph) in [(hero.prev, "<"), (hero.next, ">")] {
            d.draw_rectangle_rec(rect, with_alpha(INK, 0.6));
            d.draw_text(glyph, rect.x as i32 + 17, rect.y as i32 + 12, 24, Color::WHITE);
        }
    }

    fn draw_testimonials(&self, d: &mut RaylibDrawHandle, t: &TestimonialRegions, width: f32) {
        let strip = self.site.testimonials().surface();
        let bounds = t.strip;
        let offset = strip.displayed_offset();

        for (i, testimonial) in self.testimonials.iter().enumerate() {
            let x = bounds.x + offset + i as f32 * bounds.width;
            if x + bounds.width < bounds.x || x > bounds.x + bounds.width {
                continue;
            }
            let card = Rectangle::new(x + 8.0, bounds.y, bounds.width - 16.0, bounds.height);
            let fill = if strip.is_slide_active(i) { CARD } else { with_alpha(CARD, 0.7) };
            d.draw_rectangle_rec(card, fill);
            d.draw_text(testimonial.quote, card.x as i32 + 24, card.y as i32 + 32, 22, INK);
            d.draw_text(
                testimonial.author,
                card.x as i32 + 24,
                (card.y + card.height) as i32 - 48,
                18,
                ACCENT,
            );
            d.draw_text(strip.label(i), (card.x + card.width) as i32 - 70, card.y as i32 + 8, 14, MUTED);
        }

        // Mask cards that slid past the strip edges
        d.draw_rectangle_rec(Rectangle::new(0.0, bounds.y, bounds.x, bounds.height), BACKGROUND);
        let right = bounds.x + bounds.width;
        d.draw_rectangle_rec(Rectangle::new(right, bounds.y, width - right, bounds.height), BACKGROUND);

        for (rect, glyph) in [(t.prev, "<"), (t.next, ">")] {
            d.draw_rectangle_rec(rect, INK);
            d.draw_text(glyph, rect.x as i32 + 14, rect.y as i32 + 10, 20, Color::WHITE);
        }
        for (i, dot) in t.dots.iter().enumerate() {
            let color = if strip.is_dot_active(i) { ACCENT } else { MUTED };
            d.draw_circle((dot.x + 8.0) as i32, (dot.y + 8.0) as i32, 6.0, color);
        }
    }

    fn draw_tabs(&self, d: &mut RaylibDrawHandle, page: &PageContent, tabs: &TabRegions) {
        let Some(group) = self.site.tab_group(page.id) else {
            return;
        };

        for ((rect, _), panel) in tabs.buttons.iter().zip(group.panels()) {
            let (fill, ink) = if panel.active { (ACCENT, Color::WHITE) } else { (CARD, INK) };
            d.draw_rectangle_rec(*rect, fill);
            d.draw_text(&panel.title, rect.x as i32 + 16, rect.y as i32 + 10, 20, ink);
        }

        let Some((index, tab)) = group
            .panels()
            .iter()
            .position(|p| p.active)
            .and_then(|i| page.tabs.get(i).map(|tab| (i, tab)))
        else {
            return;
        };

        let panel = tabs.panel;
        d.draw_rectangle_rec(panel, CARD);
        d.draw_text(tab.body, panel.x as i32 + 24, panel.y as i32 + 24, 22, INK);

        if let Some(highlight) = tab.highlight {
            let progress = self.highlight_fades.progress(index);
            let y = panel.y + 96.0 + (1.0 - progress) * FADE_RISE;
            d.draw_text(highlight, panel.x as i32 + 24, y as i32, 20, with_alpha(ACCENT, progress));
        }
    }

    fn draw_section(&self, d: &mut RaylibDrawHandle, page: &PageContent, index: usize, rect: Rectangle) {
        let Some(section) = page.sections.get(index) else {
            return;
        };
        let progress = self.section_fades.progress(index);
        if progress <= 0.0 {
            return;
        }

        let rect = Rectangle::new(rect.x, rect.y + (1.0 - progress) * FADE_RISE, rect.width, rect.height);
        d.draw_rectangle_rec(rect, with_alpha(CARD, progress));
        d.draw_text(section.heading, rect.x as i32 + 24, rect.y as i32 + 24, 28, with_alpha(INK, progress));
        d.draw_text(section.body, rect.x as i32 + 24, rect.y as i32 + 72, 20, with_alpha(INK, progress));
    }

    fn draw_header(&self, d: &mut RaylibDrawHandle, regions: &Regions, width: f32) {
        d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, width, HEADER_HEIGHT), INK);
        d.draw_text("Highland Still House", regions.logo.x as i32, regions.logo.y as i32 + 8, 26, Color::WHITE);

        let router = self.site.router();
        let active_page = router.active_link().map(|l| l.page_id.as_str());
        let labels = router.links();

        if let Some(hamburger) = regions.hamburger {
            match self.site.menu().icon() {
                MenuIcon::Bars => {
                    for row in 0..3 {
                        let y = hamburger.y + 8.0 + row as f32 * 10.0;
                        d.draw_rectangle_rec(Rectangle::new(hamburger.x + 6.0, y, 28.0, 4.0), Color::WHITE);
                    }
                }
                MenuIcon::Times => {
                    d.draw_text("X", hamburger.x as i32 + 12, hamburger.y as i32 + 8, 28, Color::WHITE);
                }
            }
            if !regions.links.is_empty() {
                let last = regions.links.len() as f32 * 48.0;
                d.draw_rectangle_rec(Rectangle::new(0.0, HEADER_HEIGHT, width, last), INK);
            }
        }

        for ((rect, page_id), link) in regions.links.iter().zip(labels) {
            let color = if active_page == Some(page_id.as_str()) { ACCENT } else { Color::WHITE };
            d.draw_text(&link.label, rect.x as i32 + 12, rect.y as i32 + 8, 20, color);
            if active_page == Some(page_id.as_str()) {
                d.draw_rectangle_rec(Rectangle::new(rect.x + 12.0, rect.y + rect.height - 4.0, 40.0, 3.0), ACCENT);
            }
        }
    }
}
