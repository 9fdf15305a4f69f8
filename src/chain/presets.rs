//! Preset connection profiles for well-known networks.
//!
//! Presets are declarative records embedded at build time rather than
//! per-network constructors, so adding a network means adding a table to
//! `presets.toml` and nothing else. Profiles come back with an empty
//! module registry; attach one with [`ModuleRegistry::standard()`] or a
//! custom composition before use.
//!
//! [`ModuleRegistry::standard()`]: crate::modules::ModuleRegistry::standard
use std::collections::BTreeMap;

use tracing::debug;

use crate::{chain::config::ChainClientConfig, error::ConfigError};

const PRESET_PROFILES: &str = include_str!("presets.toml");

const DEFAULT_KEY_DIR: &str = "/.monocle/keys";

/// Builds the connection profile for a preset network.
///
/// # Arguments
///
/// * `chain_name` - A network name from [`preset_names()`], e.g. `cosmoshub`
/// * `key_home` - Key material location; defaults to [`default_key_directory()`]
/// * `debug` - Enables verbose client behavior downstream
pub fn get_config(
    chain_name: &str,
    key_home: Option<&str>,
    debug: bool,
) -> Result<ChainClientConfig, ConfigError> {
    let mut config = preset_table()?.remove(chain_name).ok_or_else(|| {
        ConfigError::UnsupportedChain(format!("no preset profile for chain '{}'", chain_name))
    })?;

    config.key_directory = match key_home {
        Some(path) => path.to_string(),
        None => default_key_directory(),
    };
    config.debug = debug;

    debug!("using preset profile for {}", chain_name);

    Ok(config)
}

/// Names of the networks with embedded preset profiles
pub fn preset_names() -> Result<Vec<String>, ConfigError> {
    Ok(preset_table()?.into_keys().collect())
}

/// Default key material location at '~/<DEFAULT_KEY_DIR>'
pub fn default_key_directory() -> String {
    dirs::home_dir()
        .unwrap()
        .into_os_string()
        .into_string()
        .unwrap()
        + DEFAULT_KEY_DIR
}

fn preset_table() -> Result<BTreeMap<String, ChainClientConfig>, ConfigError> {
    toml::from_str(PRESET_PROFILES).map_err(|e| e.into())
}
