use anyhow::Result;
use marquee_config::{ConfigSource, FileConfig};

use super::Session;

pub fn show(session: &Session) -> Result<()> {
    let config = &session.config;
    let metadata = &config.metadata;

    let source = match &metadata.source {
        ConfigSource::Default => "built-in defaults".to_string(),
        ConfigSource::EnvInline => "MARQUEE_CONFIG_JSON".to_string(),
        ConfigSource::Explicit(path)
        | ConfigSource::EnvPath(path)
        | ConfigSource::File(path) => path.display().to_string(),
    };
    println!("# source: {source}");
    if !metadata.env_overrides.is_empty() {
        println!("# env overrides: {}", metadata.env_overrides.join(", "));
    }
    match session.preferences_path() {
        Ok(path) => println!("# preferences: {}", path.display()),
        Err(err) => println!("# preferences: unavailable ({err})"),
    }
    println!();

    print!("{}", FileConfig::from(config).to_toml_string()?);
    Ok(())
}
