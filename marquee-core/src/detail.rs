//! Detail panel model
//!
//! Opening the panel snapshots the entry into a [`DetailView`]; the similar
//! grid is filled separately because it needs the catalog and preferences.

use marquee_contracts::catalog_like::CatalogSource;
use marquee_contracts::detail::DetailPanel;
use marquee_contracts::preferences::PreferencesStore;
use marquee_model::{Content, ContentId};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, genre_list};
use crate::constants::detail::SIMILAR_COUNT;
use crate::embed::{EmbedOptions, embed_url};
use crate::view::CardActions;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarView {
    pub id: ContentId,
    pub title: String,
    pub image: String,
    pub match_label: String,
    pub year: Option<i32>,
    pub rating: String,
    pub description: String,
    pub genres: String,
    pub in_list: bool,
}

impl SimilarView {
    fn project(item: &Content, prefs: &dyn PreferencesStore) -> Self {
        Self {
            id: item.id,
            title: item.title_or_default().to_string(),
            image: item.image_or_default().to_string(),
            match_label: format!("{}% Match", item.match_or_default()),
            year: item.year,
            rating: item.rating_or_default().to_string(),
            description: item.description_or_default().to_string(),
            genres: genre_list(item.genres_or_default()),
            in_list: prefs.is_in_list(item.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub item: Content,
    pub title: String,
    pub match_label: String,
    pub year: Option<i32>,
    pub rating: String,
    pub duration: String,
    pub description: String,
    pub cast: String,
    pub genres: String,
    pub tags: String,
    /// Muted looping backdrop trailer.
    pub trailer_url: Option<String>,
    pub actions: CardActions,
    pub similar: Vec<SimilarView>,
}

impl DetailView {
    fn project(item: &Content) -> Self {
        Self {
            item: item.clone(),
            title: item.title_or_default().to_string(),
            match_label: format!("{}% Match", item.match_or_default()),
            year: item.year,
            rating: item.rating_or_default().to_string(),
            duration: item.duration_or_default().to_string(),
            description: item.description_or_default().to_string(),
            cast: item.cast_or_default().to_string(),
            genres: item.genres_or_default().to_string(),
            tags: item.tags_or_default().to_string(),
            trailer_url: item
                .trailer_id()
                .map(|id| embed_url(id, EmbedOptions::backdrop())),
            actions: CardActions::default(),
            similar: Vec::new(),
        }
    }
}

/// Scroll position of the panel body, for the wheel edge guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_height - self.scroll_top <= self.client_height
    }
}

#[derive(Debug)]
pub struct DetailPanelState {
    view: Option<DetailView>,
    muted: bool,
}

impl Default for DetailPanelState {
    fn default() -> Self {
        Self {
            view: None,
            muted: true,
        }
    }
}

impl DetailPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }

    pub fn current_id(&self) -> Option<ContentId> {
        self.view.as_ref().map(|v| v.item.id)
    }

    /// Open `item` with its similar grid and action state filled in.
    pub fn show_with<R: Rng + ?Sized>(
        &mut self,
        item: &Content,
        catalog: &Catalog,
        prefs: &dyn PreferencesStore,
        rng: &mut R,
    ) {
        self.open(item);
        self.populate_similar(catalog, prefs, rng);
        self.refresh_actions(prefs);
    }

    pub fn show(
        &mut self,
        item: &Content,
        catalog: &Catalog,
        prefs: &dyn PreferencesStore,
    ) {
        self.show_with(item, catalog, prefs, &mut rand::rng());
    }

    pub fn populate_similar<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        prefs: &dyn PreferencesStore,
        rng: &mut R,
    ) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        view.similar = catalog
            .similar_with(&view.item, SIMILAR_COUNT, rng)
            .into_iter()
            .map(|c| SimilarView::project(c, prefs))
            .collect();
    }

    /// Re-derive list and like state after a preference change.
    pub fn refresh_actions(&mut self, prefs: &dyn PreferencesStore) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        view.actions = CardActions::for_item(view.item.id, prefs);
        for similar in &mut view.similar {
            similar.in_list = prefs.is_in_list(similar.id);
        }
    }

    /// Open a similar entry in place of the current one.
    pub fn open_similar(
        &mut self,
        id: ContentId,
        catalog: &Catalog,
        prefs: &dyn PreferencesStore,
    ) -> bool {
        match catalog.find_by_id(id) {
            Some(item) => {
                self.show(item, catalog, prefs);
                true
            }
            None => false,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the backdrop mute; returns whether it is now muted.
    pub fn toggle_volume(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Whether a wheel event over the panel must not scroll the page behind
    /// it: at the top scrolling up, or at the bottom scrolling down.
    pub fn should_block_wheel(&self, metrics: ScrollMetrics, delta_y: f32) -> bool {
        self.is_open()
            && ((metrics.at_top() && delta_y < 0.0)
                || (metrics.at_bottom() && delta_y > 0.0))
    }

    /// Escape closes an open panel; returns whether it did.
    pub fn on_escape(&mut self) -> bool {
        if self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }
}

impl DetailPanel for DetailPanelState {
    fn open(&mut self, item: &Content) {
        info!(id = %item.id, title = item.title_or_default(), "detail panel open");
        self.view = Some(DetailView::project(item));
    }

    fn close(&mut self) {
        if self.view.take().is_some() {
            debug!("detail panel closed");
        }
    }

    fn is_open(&self) -> bool {
        self.view.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryStore, Preferences};
    use marquee_model::CategoryKey;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(id: u64, genres: &str) -> Content {
        Content {
            genres: Some(genres.into()),
            match_score: Some(90),
            trailer: Some(format!("vid{id}")),
            ..Content::new(id, format!("Title {id}"))
        }
    }

    fn catalog() -> Catalog {
        Catalog::new().with_category(
            CategoryKey::trending(),
            (1..=9).map(|id| entry(id, "Drama")).collect(),
        )
    }

    #[test]
    fn open_fills_view_and_similar() {
        let catalog = catalog();
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.add_to_list(ContentId(2));
        let mut panel = DetailPanelState::new();
        let mut rng = StdRng::seed_from_u64(1);

        panel.show_with(&entry(1, "Drama"), &catalog, &prefs, &mut rng);
        let view = panel.view().unwrap();
        assert_eq!(view.match_label, "90% Match");
        assert!(view.trailer_url.as_deref().unwrap().contains("loop=1"));
        assert_eq!(view.similar.len(), SIMILAR_COUNT);
        assert!(view.similar.iter().all(|s| s.id != ContentId(1)));
        assert!(view.similar[0].in_list);
    }

    #[test]
    fn escape_and_wheel_guard() {
        let mut panel = DetailPanelState::new();
        let top = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 1000.0,
            client_height: 400.0,
        };
        assert!(!panel.should_block_wheel(top, -10.0));

        panel.open(&entry(1, "Drama"));
        assert!(panel.should_block_wheel(top, -10.0));
        assert!(!panel.should_block_wheel(top, 10.0));
        let bottom = ScrollMetrics {
            scroll_top: 600.0,
            ..top
        };
        assert!(panel.should_block_wheel(bottom, 10.0));

        assert!(panel.on_escape());
        assert!(!panel.is_open());
        assert!(!panel.on_escape());
    }

    #[test]
    fn volume_starts_muted() {
        let mut panel = DetailPanelState::new();
        assert!(panel.is_muted());
        assert!(!panel.toggle_volume());
    }
}
