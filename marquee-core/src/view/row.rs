//! Row container model and the row populator.
//!
//! A row container holds its navigation controls and a wrapper around the
//! scrolling track. Hosts describe their markup with [`RowContainer`]; the
//! populator fills the track and never touches the controls.

use marquee_contracts::preferences::PreferencesStore;
use marquee_model::{CategoryKey, Content};
use serde::Serialize;
use tracing::debug;

use super::card::CardView;
use crate::carousel::RenderFrame;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackWrapper {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowChild {
    PrevControl,
    Wrapper(TrackWrapper),
    NextControl,
    /// Host markup the engine does not know about.
    Other { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowContainer {
    pub key: CategoryKey,
    pub children: Vec<RowChild>,
    /// Last frame applied to this row.
    pub frame: Option<RenderFrame>,
}

impl RowContainer {
    /// Bare container with no children.
    pub fn new(key: CategoryKey) -> Self {
        Self {
            key,
            children: Vec::new(),
            frame: None,
        }
    }

    /// Container with both controls and an empty track between them.
    pub fn standard(key: CategoryKey) -> Self {
        Self {
            children: vec![
                RowChild::PrevControl,
                RowChild::Wrapper(TrackWrapper {
                    track: Some(Track::default()),
                }),
                RowChild::NextControl,
            ],
            ..Self::new(key)
        }
    }

    pub fn with_child(mut self, child: RowChild) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_prev_control(&self) -> bool {
        self.children.contains(&RowChild::PrevControl)
    }

    pub fn has_next_control(&self) -> bool {
        self.children.contains(&RowChild::NextControl)
    }

    pub fn track(&self) -> Option<&Track> {
        self.children.iter().find_map(|child| match child {
            RowChild::Wrapper(wrapper) => wrapper.track.as_ref(),
            _ => None,
        })
    }

    pub fn track_mut(&mut self) -> Option<&mut Track> {
        self.children.iter_mut().find_map(|child| match child {
            RowChild::Wrapper(wrapper) => wrapper.track.as_mut(),
            _ => None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.track().map_or(0, |t| t.cards.len())
    }

    /// Track of this row, creating it (and its wrapper) when missing. A new
    /// wrapper goes right before the next control, or last without one.
    pub fn ensure_track(&mut self) -> &mut Track {
        let wrapper_at = self
            .children
            .iter()
            .position(|c| matches!(c, RowChild::Wrapper(_)));
        let index = match wrapper_at {
            Some(index) => index,
            None => {
                let at = self
                    .children
                    .iter()
                    .position(|c| *c == RowChild::NextControl)
                    .unwrap_or(self.children.len());
                debug!(row = %self.key, "creating track wrapper");
                self.children
                    .insert(at, RowChild::Wrapper(TrackWrapper::default()));
                at
            }
        };
        match &mut self.children[index] {
            RowChild::Wrapper(wrapper) => {
                wrapper.track.get_or_insert_with(Track::default)
            }
            _ => unreachable!("We just located a wrapper at this index"),
        }
    }

    pub fn apply_frame(&mut self, frame: RenderFrame) {
        self.frame = Some(frame);
    }
}

/// Replace the cards of `container` with one card per item.
pub fn populate_row(
    container: &mut RowContainer,
    items: &[Content],
    prefs: &dyn PreferencesStore,
) {
    let track = container.ensure_track();
    track.cards = items
        .iter()
        .map(|item| CardView::project(item, prefs))
        .collect();
    debug!(row = %container.key, cards = items.len(), "row populated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryStore, Preferences};

    fn items(n: u64) -> Vec<Content> {
        (1..=n).map(|id| Content::new(id, format!("Title {id}"))).collect()
    }

    #[test]
    fn populate_is_idempotent() {
        let prefs = Preferences::new(MemoryStore::default());
        let mut row = RowContainer::standard(CategoryKey::trending());
        populate_row(&mut row, &items(5), &prefs);
        populate_row(&mut row, &items(5), &prefs);
        assert_eq!(row.card_count(), 5);
        assert!(row.has_prev_control() && row.has_next_control());
        assert_eq!(row.children.len(), 3);
    }

    #[test]
    fn creates_track_before_next_control() {
        let prefs = Preferences::new(MemoryStore::default());
        let mut row = RowContainer::new(CategoryKey::popular())
            .with_child(RowChild::PrevControl)
            .with_child(RowChild::NextControl);
        populate_row(&mut row, &items(2), &prefs);
        assert!(matches!(row.children[1], RowChild::Wrapper(_)));
        assert_eq!(row.children[2], RowChild::NextControl);
        assert_eq!(row.card_count(), 2);
    }

    #[test]
    fn fills_empty_wrapper() {
        let prefs = Preferences::new(MemoryStore::default());
        let mut row = RowContainer::new(CategoryKey::action())
            .with_child(RowChild::Wrapper(TrackWrapper::default()));
        populate_row(&mut row, &items(3), &prefs);
        assert_eq!(row.children.len(), 1);
        assert_eq!(row.card_count(), 3);
    }
}
