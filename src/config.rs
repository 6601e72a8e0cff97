//! Optional on-disk configuration (`parceltrack.toml`)
//!
//! The only setting today is the database path; the CLI resolves it as
//! explicit flag → config file → [`DEFAULT_DATABASE`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database file used when neither the flag nor the config names one
pub const DEFAULT_DATABASE: &str = "tracker.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("parceltrack.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TrackerConfig>> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TrackerConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TrackerConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Pick the database path: explicit flag wins, then the config file, then
/// the default next to the working directory.
pub fn resolve_database(flag: Option<PathBuf>, config: Option<&TrackerConfig>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(database) = config.and_then(|c| c.database.as_deref()) {
        return PathBuf::from(database);
    }
    PathBuf::from(DEFAULT_DATABASE)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parceltrack.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_write_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parceltrack.toml");

        let config = TrackerConfig {
            database: Some("data/tracker.db".to_string()),
        };
        write_config(&path, &config, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("data/tracker.db"));

        // A second write without --force must refuse
        assert!(write_config(&path, &config, false).is_err());
        assert!(write_config(&path, &config, true).is_ok());
    }

    #[test]
    fn test_resolve_database_precedence() {
        let config = TrackerConfig {
            database: Some("from-config.db".to_string()),
        };

        let flag = Some(PathBuf::from("from-flag.db"));
        assert_eq!(
            resolve_database(flag, Some(&config)),
            PathBuf::from("from-flag.db")
        );
        assert_eq!(
            resolve_database(None, Some(&config)),
            PathBuf::from("from-config.db")
        );
        assert_eq!(resolve_database(None, None), PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("tracker.db");

        ensure_db_dir(&db_path).unwrap();
        assert!(db_path.parent().unwrap().exists());
    }
}
