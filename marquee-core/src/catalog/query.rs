use std::collections::HashSet;

use marquee_contracts::catalog_like::CatalogSource;
use marquee_model::{Content, ContentId};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::Catalog;
use crate::constants::{detail, search};

impl Catalog {
    /// Every distinct entry, first listing wins.
    pub fn unique_items(&self) -> Vec<&Content> {
        let mut seen = HashSet::new();
        self.all_items()
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect()
    }

    /// Entries sharing genres with `item`, best overlap first.
    ///
    /// When fewer than `count` entries share a genre the rest is filled with
    /// random other entries.
    pub fn similar_with<R: Rng + ?Sized>(
        &self,
        item: &Content,
        count: usize,
        rng: &mut R,
    ) -> Vec<&Content> {
        let wanted: HashSet<String> =
            item.genre_names().map(str::to_lowercase).collect();
        let candidates: Vec<&Content> = self
            .unique_items()
            .into_iter()
            .filter(|c| c.id != item.id)
            .collect();

        let mut scored: Vec<(usize, &Content)> = candidates
            .iter()
            .map(|c| {
                let score = c
                    .genre_names()
                    .map(str::to_lowercase)
                    .collect::<HashSet<_>>()
                    .intersection(&wanted)
                    .count();
                (score, *c)
            })
            .filter(|(score, _)| *score > 0)
            .collect();
        // Stable sort keeps catalog order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let mut similar: Vec<&Content> =
            scored.into_iter().take(count).map(|(_, c)| c).collect();

        if similar.len() < count {
            let chosen: HashSet<ContentId> =
                similar.iter().map(|c| c.id).collect();
            let rest: Vec<&Content> = candidates
                .into_iter()
                .filter(|c| !chosen.contains(&c.id))
                .collect();
            similar.extend(rest.choose_multiple(rng, count - similar.len()));
        }
        similar
    }

    /// [`Catalog::similar_with`] using the thread-local rng and the default
    /// count.
    pub fn similar(&self, item: &Content) -> Vec<&Content> {
        self.similar_with(item, detail::SIMILAR_COUNT, &mut rand::rng())
    }

    /// Case-insensitive substring search over title, description, genres
    /// and cast. Queries shorter than two characters match nothing.
    ///
    /// The query is used as typed, surrounding whitespace included.
    pub fn search(&self, query: &str) -> Vec<&Content> {
        if !is_searchable(query) {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.unique_items()
            .into_iter()
            .filter(|item| {
                [
                    item.title.as_deref(),
                    item.description.as_deref(),
                    item.genres.as_deref(),
                    item.cast.as_deref(),
                ]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&query))
            })
            .collect()
    }
}

/// Whether a query is long enough to run, counted as typed.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= search::MIN_QUERY_CHARS
}

/// First three genres joined for display, e.g. `Drama • Crime • Thriller`.
pub fn genre_list(genres: &str) -> String {
    genres
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .take(detail::CARD_GENRES)
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Runtime label for a minute count: `45m`, `2h`, `2h 15m`.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    match minutes % 60 {
        0 => format!("{hours}h"),
        mins => format!("{hours}h {mins}m"),
    }
}
