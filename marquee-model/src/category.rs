use crate::error::ModelError;
use std::fmt::{self, Display};

/// Key of one catalog category, which is also the id of the row that shows it.
///
/// Keys are free-form so catalogs can introduce new rows without a model
/// change; the well-known keys of the default home layout are exposed as
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub const TRENDING: &'static str = "trending";
    pub const POPULAR: &'static str = "popular";
    pub const TOP10: &'static str = "top10";
    pub const ORIGINALS: &'static str = "originals";
    pub const ACTION: &'static str = "action";

    /// Build a key, rejecting blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCategory(raw));
        }
        Ok(CategoryKey(trimmed.to_string()))
    }

    pub fn trending() -> Self {
        CategoryKey(Self::TRENDING.to_string())
    }

    pub fn popular() -> Self {
        CategoryKey(Self::POPULAR.to_string())
    }

    pub fn top10() -> Self {
        CategoryKey(Self::TOP10.to_string())
    }

    pub fn originals() -> Self {
        CategoryKey(Self::ORIGINALS.to_string())
    }

    pub fn action() -> Self {
        CategoryKey(Self::ACTION.to_string())
    }

    /// Rows of the default home layout, top to bottom.
    pub fn home_layout() -> Vec<CategoryKey> {
        vec![
            Self::trending(),
            Self::popular(),
            Self::top10(),
            Self::originals(),
            Self::action(),
        ]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ranked rows render their cards with rank badges.
    pub fn is_ranked(&self) -> bool {
        self.0 == Self::TOP10
    }
}

impl Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CategoryKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_rejected() {
        assert!(CategoryKey::new("   ").is_err());
        assert_eq!(CategoryKey::new(" action ").unwrap(), CategoryKey::action());
    }

    #[test]
    fn only_top10_is_ranked() {
        assert!(CategoryKey::top10().is_ranked());
        assert!(!CategoryKey::trending().is_ranked());
    }
}
