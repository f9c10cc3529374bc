//! Navigator configuration.
//!
//! A [`NavigatorConfig`] can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "base_directory": "/home/me/photos",
//!   "extensions": ["jpg", ".png"],
//!   "recursive": true,
//!   "exclude_marked": true,
//!   "watch": "live"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, Result};
use crate::filter::normalize_extension;

/// How a snapshot learns that its directory changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchMode {
    /// Subscribe to OS change notifications.
    #[default]
    Live,
    /// Only explicit invalidation and the self-healing refresh.
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    pub base_directory: PathBuf,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default = "default_exclude_marked")]
    pub exclude_marked: bool,
    #[serde(default)]
    pub start_path: Option<PathBuf>,
    #[serde(default)]
    pub watch: WatchMode,
}

fn default_exclude_marked() -> bool {
    true
}

impl NavigatorConfig {
    pub fn new<S: AsRef<str>>(base_directory: impl Into<PathBuf>, extensions: &[S]) -> Self {
        Self {
            base_directory: base_directory.into(),
            extensions: extensions
                .iter()
                .map(|extension| normalize_extension(extension.as_ref()))
                .collect(),
            recursive: false,
            exclude_marked: true,
            start_path: None,
            watch: WatchMode::Live,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn exclude_marked(mut self, exclude_marked: bool) -> Self {
        self.exclude_marked = exclude_marked;
        self
    }

    pub fn start_path(mut self, start_path: impl Into<PathBuf>) -> Self {
        self.start_path = Some(start_path.into());
        self
    }

    pub fn watch(mut self, watch: WatchMode) -> Self {
        self.watch = watch;
        self
    }

    /// Parses a JSON config and normalizes its extension list.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)
            .map_err(|error| NavigationError::Config(error.to_string()))?;
        config.extensions = config
            .extensions
            .iter()
            .map(|extension| normalize_extension(extension))
            .collect();
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json).map_err(|error| match error {
            NavigationError::Config(message) => {
                NavigationError::Config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn json_defaults() {
        let config = NavigatorConfig::from_json_str(r#"{ "base_directory": "/p" }"#).unwrap();
        assert_eq!(config.base_directory, PathBuf::from("/p"));
        assert!(config.extensions.is_empty());
        assert!(!config.recursive);
        assert!(config.exclude_marked);
        assert_eq!(config.start_path, None);
        assert_eq!(config.watch, WatchMode::Live);
    }

    #[test]
    fn json_extensions_are_normalized() {
        let config = NavigatorConfig::from_json_str(
            r#"{ "base_directory": "/p", "extensions": ["JPG", ".Png"], "watch": "manual" }"#,
        )
        .unwrap();
        assert_eq!(config.extensions, vec![".jpg", ".png"]);
        assert_eq!(config.watch, WatchMode::Manual);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let result = NavigatorConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(NavigationError::Config(_))));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nav.json");
        fs::write(&path, r#"{ "base_directory": "/p", "recursive": true }"#).unwrap();

        let config = NavigatorConfig::load(&path).unwrap();
        assert!(config.recursive);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = NavigatorConfig::load(&temp.path().join("missing.json"));
        assert!(matches!(result, Err(NavigationError::Io(_))));
    }

    #[test]
    fn builder_sets_fields() {
        let config = NavigatorConfig::new("/p", &["jpg"])
            .recursive(true)
            .exclude_marked(false)
            .start_path("/p/a.jpg")
            .watch(WatchMode::Manual);
        assert_eq!(config.extensions, vec![".jpg"]);
        assert!(config.recursive);
        assert!(!config.exclude_marked);
        assert_eq!(config.start_path, Some(PathBuf::from("/p/a.jpg")));
        assert_eq!(config.watch, WatchMode::Manual);
    }
}
