//! `marqueectl`: command line front end for the Marquee engine.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{
    Session,
    actions::ActionKind,
    prefs::PrefsAction,
    simulate::{SimulateOptions, Step},
};

#[derive(Parser)]
#[command(
    name = "marqueectl",
    about = "Inspect a Marquee catalog, simulate slider rows and manage preferences"
)]
struct Cli {
    /// Catalog JSON: an object of category key to entry array
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Configuration file (defaults to marquee.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Preference store file (overrides the configured location)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog rows in page order
    Rows,
    /// Search titles, descriptions, genres and cast
    Search { query: String },
    /// Show the detail panel for an entry
    Detail {
        id: u64,
        /// Seed for the random part of the similar grid
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replay slider input against one row and print every frame
    Simulate {
        /// Catalog row to use for the item count
        #[arg(long, default_value = "trending")]
        row: String,
        /// Use this many synthetic items instead of a catalog row
        #[arg(long)]
        items: Option<usize>,
        /// Visible row width in pixels
        #[arg(long, default_value_t = 1200.0)]
        viewport: f32,
        /// Steps: next, prev, wheel:<dy>, drag:<from>:<to>,
        /// touch:<from>:<to>, resize:<width>
        #[arg(required = true)]
        steps: Vec<Step>,
    },
    /// Read or change My List and ratings
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Run a card action the way a click would
    Action {
        #[arg(value_enum)]
        kind: ActionKind,
        id: u64,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved configuration as TOML
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let session = Session::open(cli.config, cli.catalog, cli.prefs, cli.json)?;

    match cli.command {
        Command::Rows => cli::catalog::rows(&session),
        Command::Search { query } => cli::catalog::search(&session, &query),
        Command::Detail { id, seed } => cli::catalog::detail(&session, id, seed),
        Command::Simulate {
            row,
            items,
            viewport,
            steps,
        } => cli::simulate::simulate(
            &session,
            SimulateOptions {
                row,
                items,
                viewport,
                steps,
            },
        ),
        Command::Prefs { action } => cli::prefs::run(&session, action),
        Command::Action { kind, id } => cli::actions::run(&session, kind, id),
        Command::Config {
            action: ConfigAction::Show,
        } => cli::config::show(&session),
    }
}
