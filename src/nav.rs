use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,  // Menu closed
    Times, // Menu open
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the menu and returns whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "mobile menu toggled");
        self.open
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            debug!("mobile menu closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open { MenuIcon::Times } else { MenuIcon::Bars }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub page_id: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            page_id: page_id.into(),
        }
    }
}

/// Shows exactly one page at a time and tracks which nav link is active.
#[derive(Debug, Clone)]
pub struct PageRouter {
    pages: Vec<String>,
    links: Vec<NavLink>,
    home: String,
    current: Option<usize>,
    active_link: Option<usize>,
}

impl PageRouter {
    /// Starts on `home` when it is one of `pages`, otherwise with nothing shown.
    pub fn new(pages: Vec<String>, links: Vec<NavLink>, home: impl Into<String>) -> Self {
        let home = home.into();
        let mut router = Self {
            pages,
            links,
            home,
            current: None,
            active_link: None,
        };
        let home = router.home.clone();
        router.switch_to_page(&home);
        router
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn current_page(&self) -> Option<&str> {
        self.current.map(|i| self.pages[i].as_str())
    }

    pub fn is_visible(&self, page_id: &str) -> bool {
        self.current_page() == Some(page_id)
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.active_link.map(|i| &self.links[i])
    }

    /// Returns `false` and changes nothing when no page has this id.
    pub fn switch_to_page(&mut self, page_id: &str) -> bool {
        let Some(index) = self.pages.iter().position(|p| p == page_id) else {
            warn!(page_id, "no such page");
            return false;
        };
        self.current = Some(index);
        self.active_link = self.links.iter().position(|l| l.page_id == page_id);
        debug!(page_id, "page switched");
        true
    }

    /// Logo click. Only navigates when a page is showing and it isn't home.
    pub fn go_home(&mut self) -> bool {
        match self.current_page() {
            Some(current) if current != self.home => {
                let home = self.home.clone();
                self.switch_to_page(&home)
            }
            _ => false,
        }
    }
}
