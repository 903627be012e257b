//! CLI settings file
//!
//! A small JSON file with per-school defaults so the same flags need not
//! be repeated on every run. Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults applied before command-line flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliSettings {
    /// School name printed in the header
    pub school_name: Option<String>,
    /// School logo printed beside the name
    pub logo_path: Option<PathBuf>,
    /// Compact presentation unless turned off here or with `--normal`
    pub compact: bool,
    /// Directory for auto-named output files
    pub output_dir: Option<PathBuf>,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            school_name: None,
            logo_path: None,
            compact: true,
            output_dir: None,
        }
    }
}

impl CliSettings {
    /// Load settings, falling back to defaults
    ///
    /// No path or a missing file yields defaults silently; a file that
    /// cannot be read or parsed logs a warning and yields defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    "Failed to read settings file {}, using defaults: {}",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match serde_json::from_str::<CliSettings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Directory for auto-named output, defaulting to the working directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_gives_defaults() {
        assert_eq!(CliSettings::load(None), CliSettings::default());

        let dir = tempfile::tempdir().unwrap();
        let settings = CliSettings::load(Some(&dir.path().join("absent.json")));
        assert_eq!(settings, CliSettings::default());
        assert!(settings.compact);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prashna.json");
        std::fs::write(
            &path,
            r#"{ "school_name": "Delhi Public School", "output_dir": "papers" }"#,
        )
        .unwrap();

        let settings = CliSettings::load(Some(&path));
        assert_eq!(settings.school_name.as_deref(), Some("Delhi Public School"));
        assert_eq!(settings.output_dir(), PathBuf::from("papers"));
        assert!(settings.compact);
        assert!(settings.logo_path.is_none());
    }

    #[test]
    fn test_unparsable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prashna.json");
        std::fs::write(&path, "{ compact: nope").unwrap();
        assert_eq!(CliSettings::load(Some(&path)), CliSettings::default());
    }
}
