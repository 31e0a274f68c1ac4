use anyhow::{Result, bail};
use clap::ValueEnum;
use marquee_core::actions::{ActionContext, ActionOutcome, CardAction, perform};
use marquee_core::detail::DetailPanelState;
use marquee_core::feedback::ToastQueue;
use marquee_model::ContentId;

use super::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionKind {
    Play,
    /// Toggle My List membership
    List,
    Like,
    Dislike,
    /// Open the detail panel
    Info,
}

impl ActionKind {
    fn card_action(self, id: ContentId) -> CardAction {
        match self {
            ActionKind::Play => CardAction::Play(id),
            ActionKind::List => CardAction::ToggleList(id),
            ActionKind::Like => CardAction::ToggleLike(id),
            ActionKind::Dislike => CardAction::ToggleDislike(id),
            ActionKind::Info => CardAction::OpenDetail(id),
        }
    }
}

pub fn run(session: &Session, kind: ActionKind, id: u64) -> Result<()> {
    let catalog = session.catalog()?;
    let mut prefs = session.preferences()?;
    let mut toasts = ToastQueue::new();
    let mut detail = DetailPanelState::new();

    let outcome = {
        let mut ctx = ActionContext {
            catalog: &catalog,
            prefs: &mut prefs,
            notifier: &mut toasts,
            detail: &mut detail,
        };
        perform(kind.card_action(ContentId(id)), &mut ctx)
    };

    if let ActionOutcome::UnknownItem(id) = outcome {
        bail!("no catalog entry with id {id}");
    }

    for toast in toasts.active() {
        println!("[{}] {}", toast.severity, toast.message);
    }
    if let Some(view) = detail.view() {
        println!("{}  {}  {}", view.title, view.match_label, view.genres);
    }
    Ok(())
}
