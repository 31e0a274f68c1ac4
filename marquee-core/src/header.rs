//! Page header: scroll styling, active section, search box and menus.

use std::time::{Duration, Instant};

use marquee_contracts::notify::Notifier;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, is_searchable};
use crate::constants::{page, timing};
use crate::timing::Debouncer;

/// A page section the nav links point at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Id of the section the page is scrolled into, `home` when none.
pub fn active_section(sections: &[Section], scroll_y: f32) -> &str {
    let mut current = page::DEFAULT_SECTION;
    for section in sections {
        let top = section.top - page::SECTION_ACTIVATION_MARGIN;
        if scroll_y >= top && scroll_y < top + section.height {
            current = section.id.as_str();
        }
    }
    current
}

#[derive(Debug)]
pub struct SearchBox {
    open: bool,
    query: String,
    debounce: Debouncer<String>,
}

impl SearchBox {
    pub fn new(wait: Duration) -> Self {
        Self {
            open: false,
            query: String::new(),
            debounce: Debouncer::new(wait),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and clear, dropping any pending search.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.debounce.cancel();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        self.debounce.call(self.query.clone(), now);
    }

    /// Query due for searching, once input has settled.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.debounce.poll(now)
    }
}

#[derive(Debug)]
pub struct HeaderState {
    scrolled: bool,
    hidden: bool,
    last_scroll_y: f32,
    active_section: String,
    pub search: SearchBox,
    profile_open: bool,
    browse_open: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new(timing::SEARCH_DEBOUNCE)
    }
}

impl HeaderState {
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            scrolled: false,
            hidden: false,
            last_scroll_y: 0.0,
            active_section: page::DEFAULT_SECTION.to_string(),
            search: SearchBox::new(search_debounce),
            profile_open: false,
            browse_open: false,
        }
    }

    /// Apply a (throttled) page scroll.
    pub fn on_scroll(&mut self, scroll_y: f32, sections: &[Section]) {
        self.scrolled = scroll_y > page::HEADER_SOLID_AFTER;
        self.hidden =
            scroll_y > self.last_scroll_y && scroll_y > page::HEADER_HIDE_AFTER;
        let active = active_section(sections, scroll_y);
        if active != self.active_section {
            debug!(section = active, "active section");
            self.active_section = active.to_string();
        }
        self.last_scroll_y = scroll_y;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// CSS transform for the header bar.
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    pub fn is_profile_open(&self) -> bool {
        self.profile_open
    }

    pub fn set_browse_hover(&mut self, hovered: bool) {
        self.browse_open = hovered;
    }

    pub fn is_browse_open(&self) -> bool {
        self.browse_open
    }

    /// A click anywhere outside the header menus.
    pub fn on_outside_click(&mut self, inside_search: bool) {
        self.profile_open = false;
        if self.search.is_open() && !inside_search {
            self.search.close();
        }
    }

    pub fn on_escape(&mut self) -> bool {
        if self.search.is_open() {
            self.search.close();
            true
        } else {
            false
        }
    }

    pub fn on_notifications(&self, notifier: &mut dyn Notifier) {
        notifier.info("No new notifications");
    }

    /// Run the debounced search if due, reporting the hit count.
    pub fn poll_search(
        &mut self,
        now: Instant,
        catalog: &Catalog,
        notifier: &mut dyn Notifier,
    ) -> Option<usize> {
        let query = self.search.poll(now)?;
        if !is_searchable(&query) {
            return None;
        }
        let hits = catalog.search(&query).len();
        debug!(%query, hits, "search");
        match hits {
            0 => notifier.info("No results found"),
            1 => notifier.success("Found 1 result"),
            n => notifier.success(&format!("Found {n} results")),
        }
        Some(hits)
    }
}
