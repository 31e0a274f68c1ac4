use crate::ids::ContentId;

/// Poster shown when an entry has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x450?text=Poster";
/// Title shown when an entry has none.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Rating shown when an entry has none.
pub const UNRATED: &str = "NR";

/// Promotional badge attached to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Badge {
    New,
    Trending,
    Top10,
    /// Any badge this build does not know how to render.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::New => write!(f, "new"),
            Badge::Trending => write!(f, "trending"),
            Badge::Top10 => write!(f, "top10"),
            Badge::Unknown => write!(f, "unknown"),
        }
    }
}

/// One media catalog entry.
///
/// Only `id` is required. Every other field may be missing from the source
/// catalog; the `*_or_default` accessors apply the documented fallbacks so
/// presentation code never has to.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Content {
    pub id: ContentId,
    pub title: Option<String>,
    pub image: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<String>,
    /// Free-form runtime label, e.g. "2h 15m" or "4 Seasons".
    pub duration: Option<String>,
    /// Audience match percentage, 0-100.
    #[cfg_attr(feature = "serde", serde(rename = "match"))]
    pub match_score: Option<u8>,
    pub description: Option<String>,
    pub cast: Option<String>,
    /// Comma separated genre names.
    pub genres: Option<String>,
    pub tags: Option<String>,
    /// External video id of the trailer.
    pub trailer: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub badge: Option<Badge>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub rank: Option<u32>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Content {
    pub fn new(id: impl Into<ContentId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn title_or_default(&self) -> &str {
        present(&self.title).unwrap_or(UNKNOWN_TITLE)
    }

    pub fn image_or_default(&self) -> &str {
        present(&self.image).unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn rating_or_default(&self) -> &str {
        present(&self.rating).unwrap_or(UNRATED)
    }

    /// Match percentage, clamped to 100. Missing scores read as 0.
    pub fn match_or_default(&self) -> u8 {
        self.match_score.unwrap_or(0).min(100)
    }

    pub fn description_or_default(&self) -> &str {
        present(&self.description).unwrap_or("")
    }

    pub fn cast_or_default(&self) -> &str {
        present(&self.cast).unwrap_or("")
    }

    pub fn genres_or_default(&self) -> &str {
        present(&self.genres).unwrap_or("")
    }

    pub fn tags_or_default(&self) -> &str {
        present(&self.tags).unwrap_or("")
    }

    pub fn duration_or_default(&self) -> &str {
        present(&self.duration).unwrap_or("")
    }

    pub fn trailer_id(&self) -> Option<&str> {
        present(&self.trailer)
    }

    /// Trimmed, non-empty genre names in catalog order.
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres_or_default()
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_missing_fields() {
        let item = Content {
            id: ContentId(9),
            title: Some("   ".into()),
            match_score: Some(140),
            ..Default::default()
        };
        assert_eq!(item.title_or_default(), UNKNOWN_TITLE);
        assert_eq!(item.image_or_default(), PLACEHOLDER_IMAGE);
        assert_eq!(item.rating_or_default(), UNRATED);
        assert_eq!(item.match_or_default(), 100);
        assert_eq!(item.trailer_id(), None);
    }

    #[test]
    fn genre_names_are_trimmed() {
        let item = Content {
            genres: Some("Sci-Fi, Horror ,, Drama".into()),
            ..Content::new(1u64, "x")
        };
        let names: Vec<_> = item.genre_names().collect();
        assert_eq!(names, vec!["Sci-Fi", "Horror", "Drama"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_records() {
        let raw = r#"{"id": 3, "title": "Dark", "match": 97, "badge": "top10", "rank": 2}"#;
        let item: Content = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, ContentId(3));
        assert_eq!(item.match_or_default(), 97);
        assert_eq!(item.badge, Some(Badge::Top10));
        assert_eq!(item.rank, Some(2));
        assert_eq!(item.rating_or_default(), UNRATED);

        let odd: Content =
            serde_json::from_str(r#"{"id": 4, "badge": "limited"}"#).unwrap();
        assert_eq!(odd.badge, Some(Badge::Unknown));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_id_is_rejected() {
        let err = serde_json::from_str::<Content>(r#"{"title": "Dark"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }
}
