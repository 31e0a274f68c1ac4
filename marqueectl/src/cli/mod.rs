pub mod actions;
pub mod catalog;
pub mod config;
pub mod prefs;
pub mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use marquee_config::{ConfigLoader, MarqueeConfig};
use marquee_core::{Catalog, JsonFileStore, Preferences};
use marquee_model::ContentId;
use tracing::debug;

/// Everything a command may need, resolved once from the global flags.
#[derive(Debug)]
pub struct Session {
    pub config: MarqueeConfig,
    catalog_path: Option<PathBuf>,
    prefs_path: Option<PathBuf>,
    pub json: bool,
}

impl Session {
    pub fn open(
        config_path: Option<PathBuf>,
        catalog_path: Option<PathBuf>,
        prefs_path: Option<PathBuf>,
        json: bool,
    ) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = config_path {
            loader = loader.with_config_path(path);
        }
        let load = loader.load().context("failed to load configuration")?;

        Ok(Self {
            config: load.config,
            catalog_path,
            prefs_path,
            json,
        })
    }

    pub fn catalog(&self) -> Result<Catalog> {
        let path = self
            .catalog_path
            .as_ref()
            .ok_or_else(|| anyhow!("this command needs --catalog <PATH>"))?;
        Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))
    }

    /// Catalog when one was given; commands that merely decorate output
    /// with titles use this.
    pub fn optional_catalog(&self) -> Result<Option<Catalog>> {
        match self.catalog_path {
            Some(_) => self.catalog().map(Some),
            None => Ok(None),
        }
    }

    pub fn preferences_path(&self) -> Result<PathBuf> {
        match &self.prefs_path {
            Some(path) => Ok(path.clone()),
            None => self
                .config
                .preferences_path()
                .context("failed to resolve the preference store location"),
        }
    }

    pub fn preferences(&self) -> Result<Preferences<JsonFileStore>> {
        let path = self.preferences_path()?;
        debug!(path = %path.display(), "opening preference store");
        let store = JsonFileStore::open(&path).with_context(|| {
            format!("failed to open preference store {}", path.display())
        })?;
        Ok(Preferences::new(store))
    }
}

/// `"Title (#id)"` when the catalog knows the id, else `"#id"`.
pub fn describe(catalog: Option<&Catalog>, id: ContentId) -> String {
    use marquee_contracts::catalog_like::CatalogSource;

    match catalog.and_then(|c| c.find_by_id(id)) {
        Some(item) => format!("{} (#{id})", item.title_or_default()),
        None => format!("#{id}"),
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
