//! Lenient decoding of catalog entries.
//!
//! A bad field never costs more than itself: it reads as missing and the
//! `*_or_default` accessors take over. Entries without a usable id are
//! skipped.

use marquee_model::{CategoryKey, Content, ContentId};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Decode one category's entries, skipping the ones that cannot be kept.
pub(super) fn decode_entries(
    key: &CategoryKey,
    entries: Vec<Value>,
) -> Vec<Content> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| decode_entry(key, index, entry))
        .collect()
}

fn decode_entry(
    key: &CategoryKey,
    index: usize,
    entry: Value,
) -> Option<Content> {
    let Value::Object(mut fields) = entry else {
        warn!(category = %key, index, "skipping non-object catalog entry");
        return None;
    };
    let Some(id) = fields.get("id").and_then(Value::as_u64).map(ContentId)
    else {
        warn!(category = %key, index, "skipping catalog entry without an id");
        return None;
    };

    Some(Content {
        id,
        title: field(&mut fields, "title", id),
        image: field(&mut fields, "image", id),
        year: field(&mut fields, "year", id),
        rating: field(&mut fields, "rating", id),
        duration: field(&mut fields, "duration", id),
        match_score: match_score(&mut fields, id),
        description: field(&mut fields, "description", id),
        cast: field(&mut fields, "cast", id),
        genres: field(&mut fields, "genres", id),
        tags: field(&mut fields, "tags", id),
        trailer: field(&mut fields, "trailer", id),
        badge: field(&mut fields, "badge", id),
        rank: field(&mut fields, "rank", id),
    })
}

fn field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    name: &'static str,
    id: ContentId,
) -> Option<T> {
    let value = fields.remove(name).filter(|v| !v.is_null())?;
    serde_json::from_value(value)
        .inspect_err(|err| {
            warn!(%id, field = name, error = %err, "ignoring malformed field");
        })
        .ok()
}

/// Whole numbers clamp into 0-100; anything else reads as missing.
fn match_score(fields: &mut Map<String, Value>, id: ContentId) -> Option<u8> {
    let value = fields.remove("match").filter(|v| !v.is_null())?;
    let score = match (value.as_i64(), value.as_u64()) {
        (Some(n), _) => n.clamp(0, 100),
        (None, Some(_)) => 100,
        (None, None) => {
            warn!(%id, field = "match", %value, "ignoring malformed field");
            return None;
        }
    };
    u8::try_from(score).ok()
}
