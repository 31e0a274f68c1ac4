//! Browse page wiring
//!
//! [`BrowsePage`] owns every piece of page state and routes host events to
//! it. It is the only place that knows how the pieces relate: a preference
//! change refreshes card state, a resize re-measures every row, and so on.

use std::time::{Duration, Instant};

use marquee_contracts::catalog_like::CatalogSource;
use marquee_contracts::detail::DetailPanel;
use marquee_contracts::layout::LayoutProbe;
use marquee_model::{CategoryKey, ContentId};
use tracing::{debug, info, warn};

use crate::actions::{ActionContext, ActionOutcome, CardAction, perform};
use crate::carousel::{
    CarouselConfig, RenderFrame, SliderController, SliderMessage,
    SliderUpdate, handle_slider_message, recalculate_bounds,
};
use crate::catalog::Catalog;
use crate::constants::timing;
use crate::detail::DetailPanelState;
use crate::feedback::ToastQueue;
use crate::header::{HeaderState, Section};
use crate::hero::HeroState;
use crate::preferences::{KeyValueStore, Preferences};
use crate::timing::{Debouncer, Throttle};
use crate::view::{RowContainer, populate_row};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowseSettings {
    pub carousel: CarouselConfig,
    pub resize_debounce: Duration,
    pub scroll_throttle: Duration,
    pub search_debounce: Duration,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            resize_debounce: timing::RESIZE_DEBOUNCE,
            scroll_throttle: timing::SCROLL_THROTTLE,
            search_debounce: timing::SEARCH_DEBOUNCE,
        }
    }
}

#[derive(Debug)]
pub struct BrowsePage<S> {
    catalog: Catalog,
    sliders: SliderController,
    rows: Vec<RowContainer>,
    preferences: Preferences<S>,
    toasts: ToastQueue,
    detail: DetailPanelState,
    header: HeaderState,
    hero: Option<HeroState>,
    sections: Vec<Section>,
    resize: Debouncer<()>,
    scroll: Throttle,
}

impl<S: KeyValueStore> BrowsePage<S> {
    pub fn new(
        catalog: Catalog,
        preferences: Preferences<S>,
        settings: BrowseSettings,
    ) -> Self {
        Self {
            catalog,
            sliders: SliderController::new(settings.carousel),
            rows: Vec::new(),
            preferences,
            toasts: ToastQueue::new(),
            detail: DetailPanelState::new(),
            header: HeaderState::new(settings.search_debounce),
            hero: None,
            sections: Vec::new(),
            resize: Debouncer::new(settings.resize_debounce),
            scroll: Throttle::new(settings.scroll_throttle),
        }
    }

    pub fn with_hero(mut self, hero: HeroState) -> Self {
        self.hero = Some(hero);
        self
    }

    /// Page sections used to highlight the active nav link.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Populate and wire every discovered row container.
    ///
    /// Containers whose key the catalog does not know, and containers
    /// missing a navigation control, are logged and left without a slider.
    /// A second container for an already wired key is logged and dropped.
    /// Returns the initial frame of every wired row.
    pub fn init(
        &mut self,
        containers: Vec<RowContainer>,
        probe: &dyn LayoutProbe,
    ) -> Vec<RenderFrame> {
        for mut container in containers {
            let key = container.key.clone();
            if self.rows.iter().any(|row| row.key == key) {
                warn!(row = %key, "duplicate row container; skipping");
                continue;
            }
            let Some(items) = self.catalog.items(&key) else {
                warn!(row = %key, "no catalog category for row; skipping");
                self.rows.push(container);
                continue;
            };
            populate_row(&mut container, items, &self.preferences);

            if !container.has_prev_control() || !container.has_next_control() {
                warn!(row = %key, "row is missing a navigation control; slider disabled");
            } else {
                let ids = items.iter().map(|item| item.id).collect();
                self.sliders.register(key, ids);
            }
            self.rows.push(container);
        }

        for key in self.catalog.category_keys() {
            if !self.rows.iter().any(|row| row.key == *key) {
                debug!(row = %key, "catalog category has no row container");
            }
        }

        let frames = recalculate_bounds(&mut self.sliders, probe);
        self.apply_frames(&frames);
        info!(
            rows = self.rows.len(),
            sliders = self.sliders.len(),
            "browse page initialized"
        );
        frames
    }

    fn apply_frames(&mut self, frames: &[RenderFrame]) {
        for frame in frames {
            if let Some(row) = self.rows.iter_mut().find(|r| r.key == frame.key)
            {
                row.apply_frame(frame.clone());
            }
        }
    }

    pub fn handle_slider(&mut self, message: SliderMessage) -> SliderUpdate {
        let update = handle_slider_message(&mut self.sliders, message);
        self.apply_frames(&update.frames);
        update
    }

    /// Record a viewport resize; bounds follow once resizing settles.
    pub fn on_resize(&mut self, now: Instant) {
        self.resize.call((), now);
    }

    /// Recompute bounds if a resize has settled by `now`.
    pub fn poll_resize(
        &mut self,
        now: Instant,
        probe: &dyn LayoutProbe,
    ) -> Option<Vec<RenderFrame>> {
        self.resize.poll(now)?;
        let frames = recalculate_bounds(&mut self.sliders, probe);
        self.apply_frames(&frames);
        debug!(rows = frames.len(), "bounds recalculated after resize");
        Some(frames)
    }

    /// Page scroll; returns `false` when throttled away.
    pub fn on_page_scroll(&mut self, scroll_y: f32, now: Instant) -> bool {
        if !self.scroll.try_fire(now) {
            return false;
        }
        self.header.on_scroll(scroll_y, &self.sections);
        if let Some(hero) = self.hero.as_mut() {
            hero.on_scroll(scroll_y);
        }
        true
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            info!("Page hidden");
        } else {
            info!("Page visible");
        }
    }

    /// Escape closes the topmost overlay: detail panel, trailer popup, then
    /// search.
    pub fn on_escape(&mut self) -> bool {
        if self.detail.on_escape() {
            return true;
        }
        if let Some(hero) = self.hero.as_mut()
            && hero.on_escape()
        {
            return true;
        }
        self.header.on_escape()
    }

    pub fn card_action(&mut self, action: CardAction) -> ActionOutcome {
        let outcome = {
            let mut ctx = ActionContext {
                catalog: &self.catalog,
                prefs: &mut self.preferences,
                notifier: &mut self.toasts,
                detail: &mut self.detail,
            };
            perform(action, &mut ctx)
        };
        match outcome {
            ActionOutcome::DetailOpened(_) => {
                self.detail.populate_similar(
                    &self.catalog,
                    &self.preferences,
                    &mut rand::rng(),
                );
                self.detail.refresh_actions(&self.preferences);
            }
            _ if action.mutates_preferences() => self.refresh_card_states(),
            _ => {}
        }
        outcome
    }

    /// Action triggered from inside the detail panel. Play also closes it.
    pub fn detail_action(&mut self, action: CardAction) -> ActionOutcome {
        let outcome = self.card_action(action);
        if matches!(outcome, ActionOutcome::Played { .. }) {
            self.detail.close();
        }
        outcome
    }

    pub fn open_similar(&mut self, id: ContentId) -> bool {
        self.detail.open_similar(id, &self.catalog, &self.preferences)
    }

    /// Re-derive every card's action state from stored preferences.
    pub fn refresh_card_states(&mut self) {
        for row in &mut self.rows {
            if let Some(track) = row.track_mut() {
                for card in &mut track.cards {
                    card.refresh_actions(&self.preferences);
                }
            }
        }
        self.detail.refresh_actions(&self.preferences);
    }

    /// Advance time-based state: expire toasts and run a settled search.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        self.toasts.expire(now);
        self.header
            .poll_search(now, &self.catalog, &mut self.toasts)
    }

    pub fn on_notifications(&mut self) {
        self.header.on_notifications(&mut self.toasts);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sliders(&self) -> &SliderController {
        &self.sliders
    }

    pub fn rows(&self) -> &[RowContainer] {
        &self.rows
    }

    pub fn row(&self, key: &CategoryKey) -> Option<&RowContainer> {
        self.rows.iter().find(|r| r.key == *key)
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn detail(&self) -> &DetailPanelState {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailPanelState {
        &mut self.detail
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderState {
        &mut self.header
    }

    pub fn hero(&self) -> Option<&HeroState> {
        self.hero.as_ref()
    }

    pub fn hero_mut(&mut self) -> Option<&mut HeroState> {
        self.hero.as_mut()
    }

    /// Open the detail panel on the hero's featured entry.
    pub fn hero_more_info(&mut self) -> bool {
        let Some(featured) = self.hero.as_ref().map(|h| h.featured().clone())
        else {
            return false;
        };
        self.detail.show(&featured, &self.catalog, &self.preferences);
        true
    }
}
