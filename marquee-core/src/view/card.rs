//! Card view model
//!
//! Everything a card shows is derived from the catalog entry plus the
//! current preferences on every projection; nothing here is stored back.

use marquee_contracts::preferences::PreferencesStore;
use marquee_model::{Badge, Content, ContentId};
use serde::Serialize;

use crate::catalog::genre_list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub kind: Badge,
    pub label: String,
}

impl BadgeView {
    /// Badge shown for an entry. A top-10 badge needs a rank.
    pub fn for_item(item: &Content) -> Option<Self> {
        let label = match (item.badge?, item.rank) {
            (Badge::New, _) => "NEW".to_string(),
            (Badge::Trending, _) => "TRENDING".to_string(),
            (Badge::Top10, Some(rank)) => format!("#{rank}"),
            (Badge::Top10, None) | (Badge::Unknown, _) => return None,
        };
        Some(Self {
            kind: item.badge?,
            label,
        })
    }
}

/// Icon and label of a card action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonFace {
    pub icon: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CardActions {
    pub in_list: bool,
    pub liked: bool,
    pub disliked: bool,
}

impl CardActions {
    pub fn for_item(id: ContentId, prefs: &dyn PreferencesStore) -> Self {
        Self {
            in_list: prefs.is_in_list(id),
            liked: prefs.is_liked(id),
            disliked: prefs.is_disliked(id),
        }
    }

    pub fn add_button(&self) -> ButtonFace {
        if self.in_list {
            ButtonFace {
                icon: "check",
                title: "Remove from My List",
            }
        } else {
            ButtonFace {
                icon: "plus",
                title: "Add to My List",
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: ContentId,
    pub title: String,
    pub image: String,
    pub match_label: String,
    pub rating: String,
    pub genres: String,
    pub badge: Option<BadgeView>,
    pub actions: CardActions,
}

impl CardView {
    pub fn project(item: &Content, prefs: &dyn PreferencesStore) -> Self {
        Self {
            id: item.id,
            title: item.title_or_default().to_string(),
            image: item.image_or_default().to_string(),
            match_label: format!("{}% Match", item.match_or_default()),
            rating: item.rating_or_default().to_string(),
            genres: genre_list(item.genres_or_default()),
            badge: BadgeView::for_item(item),
            actions: CardActions::for_item(item.id, prefs),
        }
    }

    /// Re-derive action state after a preference change.
    pub fn refresh_actions(&mut self, prefs: &dyn PreferencesStore) {
        self.actions = CardActions::for_item(self.id, prefs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryStore, Preferences};
    use marquee_model::prelude::{PLACEHOLDER_IMAGE, UNKNOWN_TITLE};

    #[test]
    fn missing_fields_use_defaults() {
        let prefs = Preferences::new(MemoryStore::default());
        let card = CardView::project(
            &Content {
                id: ContentId(9),
                ..Default::default()
            },
            &prefs,
        );
        assert_eq!(card.title, UNKNOWN_TITLE);
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.match_label, "0% Match");
        assert_eq!(card.rating, "NR");
        assert_eq!(card.genres, "");
        assert_eq!(card.badge, None);
        assert_eq!(card.actions.add_button().icon, "plus");
    }

    #[test]
    fn badges() {
        let mut item = Content::new(1u64, "Squid Game");
        item.badge = Some(Badge::Top10);
        assert_eq!(BadgeView::for_item(&item), None);
        item.rank = Some(2);
        assert_eq!(BadgeView::for_item(&item).unwrap().label, "#2");
        item.badge = Some(Badge::Trending);
        assert_eq!(BadgeView::for_item(&item).unwrap().label, "TRENDING");
    }

    #[test]
    fn actions_follow_preferences() {
        let mut prefs = Preferences::new(MemoryStore::default());
        prefs.add_to_list(ContentId(4));
        prefs.toggle_like(ContentId(4));
        let card = CardView::project(&Content::new(4u64, "Ozark"), &prefs);
        assert!(card.actions.in_list && card.actions.liked);
        assert_eq!(card.actions.add_button().title, "Remove from My List");
    }
}
