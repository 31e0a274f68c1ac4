use anyhow::Result;
use clap::Subcommand;
use marquee_contracts::preferences::PreferencesStore;
use marquee_model::ContentId;
use serde::Serialize;

use super::{Session, describe, print_json};

#[derive(Debug, Clone, Subcommand)]
pub enum PrefsAction {
    /// Print My List and ratings
    Show,
    /// Add an entry to My List
    Add { id: u64 },
    /// Remove an entry from My List
    Remove { id: u64 },
    /// Toggle the thumbs-up rating
    Like { id: u64 },
    /// Toggle the thumbs-down rating
    Dislike { id: u64 },
    /// Clear both ratings
    Unrate { id: u64 },
}

#[derive(Debug, Serialize)]
struct Snapshot {
    my_list: Vec<ContentId>,
    liked: Vec<ContentId>,
    disliked: Vec<ContentId>,
}

pub fn run(session: &Session, action: PrefsAction) -> Result<()> {
    let mut prefs = session.preferences()?;
    let catalog = session.optional_catalog()?;
    let catalog = catalog.as_ref();

    match action {
        PrefsAction::Show => {
            let snapshot = Snapshot {
                my_list: prefs.my_list(),
                liked: prefs.liked(),
                disliked: prefs.disliked(),
            };
            if session.json {
                return print_json(&snapshot);
            }
            for (label, ids) in [
                ("My List", &snapshot.my_list),
                ("Liked", &snapshot.liked),
                ("Disliked", &snapshot.disliked),
            ] {
                println!("{label} ({})", ids.len());
                for id in ids {
                    println!("  {}", describe(catalog, *id));
                }
            }
        }
        PrefsAction::Add { id } => {
            let id = ContentId(id);
            if prefs.add_to_list(id) {
                println!("Added {} to My List", describe(catalog, id));
            } else if prefs.is_in_list(id) {
                println!("{} is already in My List", describe(catalog, id));
            } else {
                anyhow::bail!("could not save My List");
            }
        }
        PrefsAction::Remove { id } => {
            let id = ContentId(id);
            if prefs.remove_from_list(id) {
                println!("Removed {} from My List", describe(catalog, id));
            } else {
                println!("{} was not in My List", describe(catalog, id));
            }
        }
        PrefsAction::Like { id } => {
            let id = ContentId(id);
            let liked = prefs.toggle_like(id);
            let verb = if liked { "Liked" } else { "Unliked" };
            println!("{verb} {}", describe(catalog, id));
        }
        PrefsAction::Dislike { id } => {
            let id = ContentId(id);
            let disliked = prefs.toggle_dislike(id);
            let verb = if disliked { "Disliked" } else { "Undisliked" };
            println!("{verb} {}", describe(catalog, id));
        }
        PrefsAction::Unrate { id } => {
            let id = ContentId(id);
            prefs.remove_like(id);
            prefs.remove_dislike(id);
            println!("Cleared ratings for {}", describe(catalog, id));
        }
    }
    Ok(())
}
