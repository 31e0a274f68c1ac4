//! Hero banner: background trailer mute, scroll fade and trailer popup.

use marquee_model::Content;
use serde::Serialize;
use tracing::debug;

use crate::constants::page::HERO_FADE_DISTANCE;
use crate::embed::{normalize_embed_src, popup_url};

/// Visibility of the hero controls for a page offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroControls {
    pub opacity: f32,
    pub pointer_events: bool,
}

impl HeroControls {
    pub fn at_scroll(scroll_y: f32) -> Self {
        if scroll_y > HERO_FADE_DISTANCE {
            return Self {
                opacity: 0.0,
                pointer_events: false,
            };
        }
        Self {
            opacity: (1.0 - scroll_y / HERO_FADE_DISTANCE).clamp(0.0, 1.0),
            pointer_events: true,
        }
    }
}

#[derive(Debug)]
pub struct HeroState {
    featured: Content,
    background_src: Option<String>,
    muted: bool,
    controls: HeroControls,
    popup: Option<String>,
}

impl HeroState {
    pub fn new(featured: Content) -> Self {
        Self {
            featured,
            background_src: None,
            muted: true,
            controls: HeroControls::at_scroll(0.0),
            popup: None,
        }
    }

    /// Adopt the host's background embed, fixed up for `page_origin`.
    pub fn with_background(
        mut self,
        src: &str,
        page_origin: Option<&str>,
    ) -> Self {
        self.background_src = Some(normalize_embed_src(src, page_origin));
        self
    }

    pub fn featured(&self) -> &Content {
        &self.featured
    }

    pub fn background_src(&self) -> Option<&str> {
        self.background_src.as_deref()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        debug!(muted = self.muted, "hero mute");
        self.muted
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.controls = HeroControls::at_scroll(scroll_y);
    }

    pub fn controls(&self) -> HeroControls {
        self.controls
    }

    /// Open the popup on the featured trailer. Returns the player URL, or
    /// `None` when the featured entry has no trailer.
    pub fn play(&mut self) -> Option<&str> {
        let id = self.featured.trailer_id()?;
        self.popup = Some(popup_url(id));
        self.popup.as_deref()
    }

    pub fn popup_src(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    pub fn close_popup(&mut self) -> bool {
        self.popup.take().is_some()
    }

    pub fn on_escape(&mut self) -> bool {
        self.close_popup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn featured() -> Content {
        Content {
            trailer: Some("b9EkMc79ZSU".into()),
            ..Content::new(1u64, "Stranger Things")
        }
    }

    #[test]
    fn controls_fade_then_disable() {
        assert_eq!(HeroControls::at_scroll(0.0).opacity, 1.0);
        assert_eq!(HeroControls::at_scroll(150.0).opacity, 0.5);
        assert!(HeroControls::at_scroll(300.0).pointer_events);
        let gone = HeroControls::at_scroll(301.0);
        assert_eq!(gone.opacity, 0.0);
        assert!(!gone.pointer_events);
    }

    #[test]
    fn popup_lifecycle() {
        let mut hero = HeroState::new(featured());
        assert!(hero.is_muted());
        assert!(hero.play().unwrap().contains("autoplay=1&mute=0"));
        assert!(hero.on_escape());
        assert!(hero.popup_src().is_none());
        assert!(!hero.close_popup());

        let mut silent = HeroState::new(Content::new(2u64, "No trailer"));
        assert!(silent.play().is_none());
    }

    #[test]
    fn background_is_normalized() {
        let hero = HeroState::new(featured()).with_background(
            "https://www.youtube.com/embed/b9EkMc79ZSU?mute=1",
            Some("http://localhost:8080"),
        );
        let src = hero.background_src().unwrap();
        assert!(src.contains("enablejsapi=1"));
        assert!(src.contains("origin=http%3A%2F%2Flocalhost%3A8080"));
    }
}
