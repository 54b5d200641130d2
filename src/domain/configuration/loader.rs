//! Configuration loading and embedded reference tables.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::assets;
use crate::domain::AppError;
use crate::domain::configuration::ForgeConfig;
use crate::domain::intro::{FlagEntry, PhaseTable};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "memforge.toml";

/// Load configuration from `path`, or from `memforge.toml` in `cwd` when it exists.
///
/// An explicit path must exist. Without one, a missing file means defaults.
pub fn load_config(path: Option<&Path>, cwd: &Path) -> Result<ForgeConfig, AppError> {
    let (config_path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (cwd.join(CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(ForgeConfig::default());
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::debug!(path = %config_path.display(), "loading configuration");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ForgeConfig, AppError> {
    let config: ForgeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// The embedded reference presentation table.
pub fn reference_phase_table() -> Result<PhaseTable, AppError> {
    let content = embedded(assets::REFERENCE_INTRO)?;
    Ok(toml::from_str(content)?)
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NationsRoster {
    flags: Vec<FlagEntry>,
}

/// The embedded flag roster, one entry per nation.
pub fn nations_roster() -> Result<Vec<FlagEntry>, AppError> {
    let content = embedded(assets::NATIONS_ROSTER)?;
    let roster: NationsRoster = toml::from_str(content)?;
    Ok(roster.flags)
}

fn embedded(path: &str) -> Result<&'static str, AppError> {
    assets::text(path)
        .ok_or_else(|| AppError::config_error(format!("Embedded asset missing: {}", path)))
}
