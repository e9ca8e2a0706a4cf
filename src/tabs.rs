use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct TabPanel {
    pub id: String,
    pub title: String,
    pub active: bool,
    /// `Some(visible)` when the panel has a highlight section.
    pub highlight: Option<bool>,
}

impl TabPanel {
    pub fn new(id: impl Into<String>, title: impl Into<String>, has_highlight: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            active: false,
            highlight: has_highlight.then_some(false),
        }
    }

    pub fn is_highlight_visible(&self) -> bool {
        self.highlight == Some(true)
    }
}

#[derive(Debug, Clone)]
pub struct TabGroup {
    panels: Vec<TabPanel>,
}

impl TabGroup {
    /// The first panel starts active, as the markup ships it.
    pub fn new(mut panels: Vec<TabPanel>) -> Self {
        if let Some(first) = panels.first_mut() {
            first.active = true;
        }
        Self { panels }
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn active(&self) -> Option<&TabPanel> {
        self.panels.iter().find(|p| p.active)
    }

    /// Returns `false` when the id belongs to another group.
    pub fn activate(&mut self, tab_id: &str) -> bool {
        if !self.panels.iter().any(|p| p.id == tab_id) {
            return false;
        }
        for panel in self.panels.iter_mut() {
            panel.active = panel.id == tab_id;
            if let Some(visible) = panel.highlight.as_mut() {
                *visible = panel.active;
            }
        }
        debug!(tab_id, "tab activated");
        true
    }

    /// Reveals the highlight of `tab_id` without touching which tab is active.
    /// Used once at startup for the tab the page opens on.
    pub fn reveal(&mut self, tab_id: &str) -> bool {
        match self.panels.iter_mut().find(|p| p.id == tab_id) {
            Some(TabPanel { highlight: Some(visible), .. }) => {
                *visible = true;
                true
            }
            _ => false,
        }
    }
}
