use std::time::Duration;

use tracing::{debug, info};

use crate::carousel::{Carousel, CarouselConfig};
use crate::constants::*;
use crate::content::{self, PageContent};
use crate::image_slider::ImageSlider;
use crate::nav::{MobileMenu, NavLink, PageRouter};
use crate::reveal::{RevealObserver, RevealSection};
use crate::surface::SlideSurface;
use crate::tabs::{TabGroup, TabPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Title,
    Hero,
    Testimonials,
    Tabs,
    Section(usize),
}

/// Vertical placement of a block in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    pub block: Block,
    pub top: f32,
    pub height: f32,
}

impl BlockLayout {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Stacks the blocks of a page top to bottom.
pub fn layout_page(page: &PageContent) -> Vec<BlockLayout> {
    let mut blocks = vec![(Block::Title, TITLE_HEIGHT)];
    if page.hero {
        blocks.push((Block::Hero, HERO_HEIGHT));
    }
    if page.testimonials {
        blocks.push((Block::Testimonials, TESTIMONIALS_HEIGHT));
    }
    if !page.tabs.is_empty() {
        blocks.push((Block::Tabs, TABS_HEIGHT));
    }
    blocks.extend(page.sections.iter().enumerate().map(|(i, s)| (Block::Section(i), s.height)));

    let mut top = 0.0;
    blocks
        .into_iter()
        .map(|(block, height)| {
            let layout = BlockLayout { block, top, height };
            top += height + BLOCK_GAP;
            layout
        })
        .collect()
}

pub struct Site<H: SlideSurface, T: SlideSurface> {
    pages: Vec<PageContent>,
    menu: MobileMenu,
    router: PageRouter,
    tab_groups: Vec<(&'static str, TabGroup)>,
    reveal: RevealObserver,
    hero: ImageSlider<H>,
    testimonials: Carousel<T>,
    layout: Vec<BlockLayout>,
    scroll_y: f32,
    viewport_height: f32,
}

impl<H: SlideSurface, T: SlideSurface> Site<H, T> {
    pub fn new(
        pages: Vec<PageContent>,
        hero_surface: H,
        hero_len: usize,
        testimonial_surface: T,
        testimonial_len: usize,
        config: CarouselConfig,
    ) -> Self {
        let links = pages
            .iter()
            .filter_map(|p| p.nav_label.map(|label| NavLink::new(label, p.id)))
            .collect();
        let router = PageRouter::new(pages.iter().map(|p| p.id.to_string()).collect(), links, HOME_PAGE_ID);

        let mut tab_groups: Vec<(&'static str, TabGroup)> = pages
            .iter()
            .filter(|p| !p.tabs.is_empty())
            .map(|p| {
                let panels = p
                    .tabs
                    .iter()
                    .map(|t| TabPanel::new(t.id, t.title, t.highlight.is_some()))
                    .collect();
                (p.id, TabGroup::new(panels))
            })
            .collect();
        for (_, group) in tab_groups.iter_mut() {
            group.reveal(DEFAULT_TAB_ID);
        }

        let mut site = Self {
            pages,
            menu: MobileMenu::new(),
            router,
            tab_groups,
            reveal: RevealObserver::default(),
            hero: ImageSlider::new(hero_surface, hero_len),
            testimonials: Carousel::new(testimonial_surface, testimonial_len, config),
            layout: Vec::new(),
            scroll_y: 0.0,
            viewport_height: 0.0,
        };
        site.after_page_switch();
        info!(pages = site.pages.len(), hero_len, testimonial_len, "site ready");
        site
    }

    /// The preview site with the built-in copy.
    pub fn with_builtin_content(
        hero_surface: H,
        hero_len: usize,
        testimonial_surface: T,
        config: CarouselConfig,
    ) -> Self {
        let testimonial_len = content::testimonials().len();
        Self::new(content::pages(), hero_surface, hero_len, testimonial_surface, testimonial_len, config)
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    pub fn hero(&self) -> &ImageSlider<H> {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut ImageSlider<H> {
        &mut self.hero
    }

    pub fn testimonials(&self) -> &Carousel<T> {
        &self.testimonials
    }

    pub fn testimonials_mut(&mut self) -> &mut Carousel<T> {
        &mut self.testimonials
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    pub fn layout(&self) -> &[BlockLayout] {
        &self.layout
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn current_page(&self) -> Option<&PageContent> {
        let id = self.router.current_page()?;
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn tab_group(&self, page_id: &str) -> Option<&TabGroup> {
        self.tab_groups.iter().find(|(id, _)| *id == page_id).map(|(_, g)| g)
    }

    /// Whether the `section`-th fade-in section of the current page is showing.
    pub fn section_visible(&self, section: usize) -> bool {
        self.reveal.sections().get(section).is_some_and(|s| s.visible)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    /// Nav link click. The menu closes whether or not the page exists.
    pub fn click_nav_link(&mut self, page_id: &str) {
        if self.router.switch_to_page(page_id) {
            self.after_page_switch();
        }
        self.menu.close();
    }

    pub fn click_logo(&mut self) {
        if self.router.go_home() {
            self.after_page_switch();
            self.menu.close();
        }
    }

    /// Activates a tab in whichever group of the current page owns it.
    pub fn click_tab(&mut self, tab_id: &str) -> bool {
        let Some(page_id) = self.router.current_page() else {
            return false;
        };
        let activated = self
            .tab_groups
            .iter_mut()
            .filter(|(id, _)| *id == page_id)
            .any(|(_, group)| group.activate(tab_id));
        if activated {
            self.sync_tab_sections();
        }
        activated
    }

    pub fn page_height(&self) -> f32 {
        self.layout.last().map_or(0.0, |b| b.bottom() + BLOCK_GAP)
    }

    pub fn max_scroll(&self) -> f32 {
        (self.page_height() - self.viewport_height).max(0.0)
    }

    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll_y = (self.scroll_y + dy).clamp(0.0, self.max_scroll());
        self.reveal.update(self.scroll_y, self.viewport_height);
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// One frame: carousel timers plus a reveal pass over the viewport.
    pub fn update(&mut self, dt: Duration) {
        self.testimonials.update(dt);
        self.reveal.update(self.scroll_y, self.viewport_height);
    }

    fn after_page_switch(&mut self) {
        self.scroll_y = 0.0;
        self.layout = self.current_page().map(layout_page).unwrap_or_default();

        // Page sections first so their indices match `Block::Section`
        let mut sections: Vec<RevealSection> = self
            .layout
            .iter()
            .filter(|b| matches!(b.block, Block::Section(_)))
            .map(|b| RevealSection::new(b.top, b.height, false))
            .collect();
        sections.extend(
            self.layout
                .iter()
                .filter(|b| b.block == Block::Tabs)
                .map(|b| RevealSection::new(b.top, b.height, true)),
        );
        self.reveal.set_sections(sections);
        self.reveal.observe_all();
        self.sync_tab_sections();
        debug!(blocks = self.layout.len(), "page laid out");
    }

    /// Tab highlight sections follow their tab group, never the scroll position.
    fn sync_tab_sections(&mut self) {
        let visible = self
            .router
            .current_page()
            .and_then(|id| self.tab_group(id))
            .and_then(TabGroup::active)
            .is_some_and(TabPanel::is_highlight_visible);
        for section in self.reveal.sections_mut().iter_mut().filter(|s| s.in_tab) {
            section.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    fn site() -> Site<HeadlessSurface, HeadlessSurface> {
        let len = content::testimonials().len();
        let mut site = Site::with_builtin_content(
            HeadlessSurface::new(3, 800.0),
            3,
            HeadlessSurface::new(len, 600.0),
            CarouselConfig::default(),
        );
        site.set_viewport_height(600.0);
        site
    }

    #[test]
    fn test_layout_stacks_blocks() {
        let pages = content::pages();
        let layout = layout_page(&pages[0]);
        let kinds: Vec<Block> = layout.iter().map(|b| b.block).collect();
        assert_eq!(
            kinds,
            vec![Block::Title, Block::Hero, Block::Testimonials, Block::Section(0), Block::Section(1)]
        );
        assert_eq!(layout[1].top, TITLE_HEIGHT + BLOCK_GAP);
        for pair in layout.windows(2) {
            assert_eq!(pair[1].top, pair[0].bottom() + BLOCK_GAP);
        }
    }

    #[test]
    fn test_starts_on_home() {
        let site = site();
        assert_eq!(site.router().current_page(), Some(HOME_PAGE_ID));
        assert_eq!(site.reveal().sections().len(), 2);
        assert!(site.reveal().sections().iter().all(|s| s.is_observed()));
    }

    #[test]
    fn test_default_tab_highlight_revealed() {
        let site = site();
        let group = site.tab_group("spirits-page").map(|g| g.panels()[0].is_highlight_visible());
        assert_eq!(group, Some(true));
    }

    #[test]
    fn test_nav_link_switches_and_closes_menu() {
        let mut site = site();
        site.toggle_menu();
        site.scroll_by(300.0);

        site.click_nav_link("about-page");
        assert_eq!(site.router().current_page(), Some("about-page"));
        assert!(!site.menu().is_open());
        assert_eq!(site.scroll_y(), 0.0);
        assert_eq!(site.reveal().sections().len(), 3);
    }

    #[test]
    fn test_logo_returns_home() {
        let mut site = site();
        site.click_nav_link("contact-page");
        site.toggle_menu();
        site.click_logo();
        assert_eq!(site.router().current_page(), Some(HOME_PAGE_ID));
        assert!(!site.menu().is_open());
    }

    #[test]
    fn test_logo_on_home_keeps_menu() {
        let mut site = site();
        site.toggle_menu();
        site.click_logo();
        assert!(site.menu().is_open());
    }

    #[test]
    fn test_tabs_scoped_to_current_page() {
        let mut site = site();
        assert!(!site.click_tab("gin-content"), "spirits page not showing");

        site.click_nav_link("spirits-page");
        assert!(site.click_tab("gin-content"));
        let group = site.tab_group("spirits-page").map(|g| g.active().map(|p| p.id.clone()));
        assert_eq!(group, Some(Some("gin-content".to_string())));
    }

    #[test]
    fn test_scroll_reveals_sections() {
        let mut site = site();
        site.update(Duration::from_millis(16));
        assert!(!site.section_visible(0), "first section sits below the fold");

        site.scroll_by(400.0);
        assert!(site.section_visible(0));
    }

    #[test]
    fn test_tab_highlight_section_follows_tabs() {
        let mut site = site();
        site.click_nav_link("spirits-page");
        let sections = site.reveal().sections();
        assert_eq!(sections.len(), 2);
        assert!(sections[1].in_tab);
        assert!(sections[1].visible, "default tab highlight");
        assert!(!sections[1].is_observed());

        site.click_tab("liqueur-content");
        assert!(!site.reveal().sections()[1].visible, "liqueur has no highlight");
        site.scroll_by(100_000.0);
        site.update(Duration::from_millis(16));
        assert!(!site.reveal().sections()[1].visible);
        assert!(site.section_visible(0));

        site.click_tab("gin-content");
        assert!(site.reveal().sections()[1].visible);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut site = site();
        site.scroll_by(-50.0);
        assert_eq!(site.scroll_y(), 0.0);
        site.scroll_by(100_000.0);
        assert_eq!(site.scroll_y(), site.max_scroll());
    }
}
