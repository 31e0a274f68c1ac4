use crate::error::ModelError;
use std::str::FromStr;

/// Catalog-assigned identifier of a single media entry.
///
/// Ids are plain integers in catalog files and in the preference store, so
/// the newtype is transparent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ContentId(pub u64);

impl ContentId {
    pub const fn new(raw: u64) -> Self {
        ContentId(raw)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContentId {
    fn from(raw: u64) -> Self {
        ContentId(raw)
    }
}

impl FromStr for ContentId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ContentId)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}
