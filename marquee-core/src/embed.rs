//! Trailer embed URLs.

use url::{Url, form_urlencoded};

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Playback flags of an inline (background) trailer embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub mute: bool,
    pub loop_playback: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            mute: true,
            loop_playback: false,
        }
    }
}

impl EmbedOptions {
    /// Muted, autoplaying, looping: the detail panel backdrop.
    pub const fn backdrop() -> Self {
        Self {
            autoplay: true,
            mute: true,
            loop_playback: true,
        }
    }
}

fn flag(on: bool) -> &'static str {
    if on { "1" } else { "0" }
}

fn embed_path(video_id: &str) -> String {
    let id: String = form_urlencoded::byte_serialize(video_id.as_bytes()).collect();
    format!("{EMBED_BASE}{id}")
}

/// Chrome-less inline player URL.
pub fn embed_url(video_id: &str, options: EmbedOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("autoplay", flag(options.autoplay))
        .append_pair("mute", flag(options.mute))
        .append_pair("controls", "0")
        .append_pair("showinfo", "0")
        .append_pair("rel", "0")
        .append_pair("modestbranding", "1")
        .append_pair("playsinline", "1");
    if options.loop_playback {
        query
            .append_pair("loop", "1")
            .append_pair("playlist", video_id);
    }
    format!("{}?{}", embed_path(video_id), query.finish())
}

/// Full player URL for the trailer popup: autoplay with sound and controls.
pub fn popup_url(video_id: &str) -> String {
    format!(
        "{}?autoplay=1&mute=0&controls=1&rel=0&modestbranding=1",
        embed_path(video_id)
    )
}

/// Replace the first `key` pair in place (dropping later duplicates), append
/// it when absent, or remove every `key` pair when `value` is `None`.
fn set_param(pairs: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    let Some(value) = value else {
        pairs.retain(|(k, _)| k != key);
        return;
    };
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = k != key || index == first;
                index += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

/// Make an existing embed `src` usable with the player JS API from
/// `page_origin`.
///
/// Enables the JS API and inline playback, and points `origin` at the page
/// when it is served over http(s), removing it otherwise. Sources that are
/// not YouTube URLs, or do not parse, come back unchanged.
pub fn normalize_embed_src(src: &str, page_origin: Option<&str>) -> String {
    let Ok(mut url) = Url::parse(src) else {
        return src.to_string();
    };
    if !url.host_str().is_some_and(|h| h.ends_with("youtube.com")) {
        return src.to_string();
    }

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let origin = page_origin
        .filter(|o| o.starts_with("http://") || o.starts_with("https://"));
    set_param(&mut pairs, "enablejsapi", Some("1"));
    set_param(&mut pairs, "playsinline", Some("1"));
    set_param(&mut pairs, "origin", origin);

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(&pairs);
    }
    url.to_string()
}
