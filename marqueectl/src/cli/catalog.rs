use anyhow::{Result, anyhow};
use marquee_contracts::catalog_like::CatalogSource;
use marquee_core::detail::DetailPanelState;
use marquee_core::catalog::genre_list;
use marquee_model::ContentId;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use super::{Session, print_json};

#[derive(Debug, Serialize)]
struct RowSummary<'a> {
    key: &'a str,
    items: usize,
    ranked: bool,
}

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    id: ContentId,
    title: &'a str,
    genres: String,
}

pub fn rows(session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let rows: Vec<RowSummary<'_>> = catalog
        .categories()
        .map(|(key, items)| RowSummary {
            key: key.as_str(),
            items: items.len(),
            ranked: key.is_ranked(),
        })
        .collect();

    if session.json {
        return print_json(&rows);
    }
    for row in &rows {
        let marker = if row.ranked { " (ranked)" } else { "" };
        println!("{:<16} {:>4} items{marker}", row.key, row.items);
    }
    Ok(())
}

pub fn search(session: &Session, query: &str) -> Result<()> {
    let catalog = session.catalog()?;
    let hits: Vec<SearchHit<'_>> = catalog
        .search(query)
        .into_iter()
        .map(|item| SearchHit {
            id: item.id,
            title: item.title_or_default(),
            genres: genre_list(item.genres_or_default()),
        })
        .collect();

    if session.json {
        return print_json(&hits);
    }
    match hits.len() {
        0 => println!("No results found"),
        1 => println!("Found 1 result"),
        n => println!("Found {n} results"),
    }
    for hit in &hits {
        println!("  #{:<6} {}  [{}]", hit.id, hit.title, hit.genres);
    }
    Ok(())
}

pub fn detail(session: &Session, id: u64, seed: Option<u64>) -> Result<()> {
    let catalog = session.catalog()?;
    let prefs = session.preferences()?;
    let id = ContentId(id);
    let item = catalog
        .find_by_id(id)
        .ok_or_else(|| anyhow!("no catalog entry with id {id}"))?;

    let mut panel = DetailPanelState::new();
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            panel.show_with(item, &catalog, &prefs, &mut rng);
        }
        None => panel.show(item, &catalog, &prefs),
    }
    let view = panel
        .view()
        .ok_or_else(|| anyhow!("detail panel did not open"))?;

    if session.json {
        return print_json(view);
    }

    println!("{}", view.title);
    let year = view.year.map(|y| y.to_string()).unwrap_or_default();
    println!(
        "{}  {}  {}  {}",
        view.match_label, year, view.rating, view.duration
    );
    println!();
    println!("{}", view.description);
    println!();
    println!("Cast:   {}", view.cast);
    println!("Genres: {}", view.genres);
    println!("Tags:   {}", view.tags);
    if let Some(url) = &view.trailer_url {
        println!("Trailer: {url}");
    }
    println!(
        "My List: {}  Liked: {}  Disliked: {}",
        yes_no(view.actions.in_list),
        yes_no(view.actions.liked),
        yes_no(view.actions.disliked)
    );
    if !view.similar.is_empty() {
        println!();
        println!("More Like This");
        for similar in &view.similar {
            println!(
                "  #{:<6} {}  {}  [{}]",
                similar.id, similar.title, similar.match_label, similar.genres
            );
        }
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
