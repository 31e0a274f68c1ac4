//! Card and detail panel actions.

use marquee_contracts::catalog_like::CatalogSource;
use marquee_contracts::detail::DetailPanel;
use marquee_contracts::notify::Notifier;
use marquee_contracts::preferences::PreferencesStore;
use marquee_model::ContentId;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Play(ContentId),
    ToggleList(ContentId),
    ToggleLike(ContentId),
    ToggleDislike(ContentId),
    /// Info button or a click on the card body.
    OpenDetail(ContentId),
}

impl CardAction {
    pub fn id(&self) -> ContentId {
        match *self {
            CardAction::Play(id)
            | CardAction::ToggleList(id)
            | CardAction::ToggleLike(id)
            | CardAction::ToggleDislike(id)
            | CardAction::OpenDetail(id) => id,
        }
    }

    /// Whether the action changes stored preferences.
    pub fn mutates_preferences(&self) -> bool {
        matches!(
            self,
            CardAction::ToggleList(_)
                | CardAction::ToggleLike(_)
                | CardAction::ToggleDislike(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Played { title: String },
    ListChanged { id: ContentId, in_list: bool },
    LikeChanged { id: ContentId, liked: bool },
    DislikeChanged { id: ContentId, disliked: bool },
    DetailOpened(ContentId),
    UnknownItem(ContentId),
}

/// Collaborators an action may touch.
pub struct ActionContext<'a> {
    pub catalog: &'a dyn CatalogSource,
    pub prefs: &'a mut dyn PreferencesStore,
    pub notifier: &'a mut dyn Notifier,
    pub detail: &'a mut dyn DetailPanel,
}

impl std::fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("detail_open", &self.detail.is_open())
            .finish_non_exhaustive()
    }
}

pub fn perform(action: CardAction, ctx: &mut ActionContext<'_>) -> ActionOutcome {
    let id = action.id();
    let catalog = ctx.catalog;
    let Some(item) = catalog.find_by_id(id) else {
        warn!(%id, ?action, "action for unknown item");
        return ActionOutcome::UnknownItem(id);
    };

    match action {
        CardAction::Play(_) => {
            let title = item.title_or_default().to_string();
            ctx.notifier.success(&format!("Playing {title}..."));
            ActionOutcome::Played { title }
        }
        CardAction::ToggleList(_) => {
            if ctx.prefs.is_in_list(id) {
                ctx.prefs.remove_from_list(id);
                ctx.notifier.info("Removed from My List");
            } else {
                ctx.prefs.add_to_list(id);
                ctx.notifier.success("Added to My List");
            }
            ActionOutcome::ListChanged {
                id,
                in_list: ctx.prefs.is_in_list(id),
            }
        }
        CardAction::ToggleLike(_) => {
            let liked = ctx.prefs.toggle_like(id);
            if liked {
                ctx.notifier.success("Thanks for rating!");
            } else {
                ctx.notifier.info("Rating removed");
            }
            ActionOutcome::LikeChanged { id, liked }
        }
        CardAction::ToggleDislike(_) => {
            let disliked = ctx.prefs.toggle_dislike(id);
            if disliked {
                ctx.notifier.success("Thanks for your feedback!");
            } else {
                ctx.notifier.info("Rating removed");
            }
            ActionOutcome::DislikeChanged { id, disliked }
        }
        CardAction::OpenDetail(_) => {
            ctx.detail.open(item);
            ActionOutcome::DetailOpened(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::detail::DetailPanelState;
    use crate::feedback::ToastQueue;
    use crate::preferences::{MemoryStore, Preferences};
    use marquee_model::{CategoryKey, Content, Severity};

    struct Fixture {
        catalog: Catalog,
        prefs: Preferences<MemoryStore>,
        toasts: ToastQueue,
        detail: DetailPanelState,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: Catalog::new().with_category(
                    CategoryKey::trending(),
                    vec![Content::new(5u64, "Ozark")],
                ),
                prefs: Preferences::new(MemoryStore::new()),
                toasts: ToastQueue::new(),
                detail: DetailPanelState::new(),
            }
        }

        fn run(&mut self, action: CardAction) -> ActionOutcome {
            let mut ctx = ActionContext {
                catalog: &self.catalog,
                prefs: &mut self.prefs,
                notifier: &mut self.toasts,
                detail: &mut self.detail,
            };
            perform(action, &mut ctx)
        }

        fn last_toast(&self) -> (&str, Severity) {
            let t = self.toasts.latest().unwrap();
            (t.message.as_str(), t.severity)
        }
    }

    #[test]
    fn list_toggle_messages() {
        let mut f = Fixture::new();
        let id = ContentId(5);
        assert_eq!(
            f.run(CardAction::ToggleList(id)),
            ActionOutcome::ListChanged { id, in_list: true }
        );
        assert_eq!(f.last_toast(), ("Added to My List", Severity::Success));
        f.run(CardAction::ToggleList(id));
        assert_eq!(f.last_toast(), ("Removed from My List", Severity::Info));
    }

    #[test]
    fn ratings_and_play() {
        let mut f = Fixture::new();
        let id = ContentId(5);
        f.run(CardAction::ToggleLike(id));
        assert_eq!(f.last_toast().0, "Thanks for rating!");
        f.run(CardAction::ToggleLike(id));
        assert_eq!(f.last_toast().0, "Rating removed");
        f.run(CardAction::ToggleDislike(id));
        assert_eq!(f.last_toast().0, "Thanks for your feedback!");
        f.run(CardAction::Play(id));
        assert_eq!(f.last_toast(), ("Playing Ozark...", Severity::Success));
    }

    #[test]
    fn detail_and_unknown() {
        let mut f = Fixture::new();
        f.run(CardAction::OpenDetail(ContentId(5)));
        assert_eq!(f.detail.current_id(), Some(ContentId(5)));

        let before = f.toasts.active().len();
        assert_eq!(
            f.run(CardAction::Play(ContentId(77))),
            ActionOutcome::UnknownItem(ContentId(77))
        );
        assert_eq!(f.toasts.active().len(), before);
    }
}
