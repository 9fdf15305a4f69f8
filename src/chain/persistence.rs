//! Reading and writing connection profiles on disk.
//!
//! Profiles are stored in the user's home directory by default, one file per
//! chain. The serialized forms never include the module registry, so a loaded
//! profile must have one re-attached before it is handed to a client.
use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{chain::config::ChainClientConfig, error::PersistenceError};

const DEFAULT_CONFIG_DIR: &str = ".monocle";

enum ProfileFormat {
    Toml,
    Json,
    Yaml,
}

/// Reads a profile from `path`, inferring the format from the file extension
/// (`toml`, `json`, `yaml` or `yml`).
pub fn load(path: &Path) -> Result<ChainClientConfig, PersistenceError> {
    let format = profile_format(path)?;
    let contents = fs::read_to_string(path)?;
    let config = match format {
        ProfileFormat::Toml => toml::from_str(&contents)?,
        ProfileFormat::Json => serde_json::from_str(&contents)?,
        ProfileFormat::Yaml => serde_yaml::from_str(&contents)?,
    };

    debug!("loaded chain profile from {}", path.display());

    Ok(config)
}

/// Writes a profile to `path` in the format its extension names, creating
/// parent directories as needed. The module registry is not persisted.
pub fn save(config: &ChainClientConfig, path: &Path) -> Result<(), PersistenceError> {
    let contents = match profile_format(path)? {
        ProfileFormat::Toml => toml::to_string(config)?,
        ProfileFormat::Json => serde_json::to_string_pretty(config)?,
        ProfileFormat::Yaml => serde_yaml::to_string(config)?,
    };

    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, contents)?;

    debug!("wrote chain profile to {}", path.display());

    Ok(())
}

/// Builds the profile directory path in the user's home directory
pub fn default_config_dir() -> PathBuf {
    let mut path = dirs::home_dir().unwrap();
    path.push(DEFAULT_CONFIG_DIR);

    path
}

/// Default on-disk location for a chain's profile, `~/.monocle/<chain>.toml`
pub fn default_profile_path(chain_name: &str) -> PathBuf {
    let mut path = default_config_dir();
    path.push(format!("{}.toml", chain_name));

    path
}

fn profile_format(path: &Path) -> Result<ProfileFormat, PersistenceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension {
        "toml" => Ok(ProfileFormat::Toml),
        "json" => Ok(ProfileFormat::Json),
        "yaml" | "yml" => Ok(ProfileFormat::Yaml),
        _ => Err(PersistenceError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chain::presets, modules::ModuleRegistry};

    fn test_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(name);

        dir
    }

    #[test]
    fn round_trips_through_each_format() {
        let dir = test_dir("monocle_persistence_test");
        let mut config = presets::get_config("cosmoshub", Some("/tmp/keys"), false).unwrap();
        config.modules = ModuleRegistry::standard();

        for file in ["profile.toml", "profile.json", "profile.yaml"] {
            let path = dir.join(file);

            save(&config, &path).unwrap();
            let loaded = load(&path).unwrap();

            assert!(loaded.modules.is_empty());

            let mut expected = config.clone();
            expected.modules = ModuleRegistry::default();
            assert_eq!(loaded, expected);
        }

        std::fs::remove_dir_all(&dir).expect("failed to delete test directory");
    }

    #[test]
    fn rejects_unknown_extension() {
        let config = presets::get_config("osmosis", Some("/tmp/keys"), false).unwrap();
        let path = test_dir("monocle_persistence_test_ext").join("profile.ini");

        let result = save(&config, &path);

        assert!(matches!(
            result,
            Err(PersistenceError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = test_dir("monocle_persistence_test_missing").join("nope.toml");

        assert!(matches!(load(&path), Err(PersistenceError::FileIO(_))));
    }

    #[test]
    fn builds_default_profile_path() {
        let path = default_profile_path("cosmoshub");

        assert!(path.ends_with(".monocle/cosmoshub.toml"));
    }
}
