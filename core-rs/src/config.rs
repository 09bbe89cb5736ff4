//! Viewer settings.
//!
//! Loaded from `VOCVIEW_*` environment variables or a YAML file. Only the
//! pieces the query core consumes live here: the remote-dereference policy
//! and the deployment sub-URL for link building. Store choice and harvest
//! scheduling belong to the hosting application.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Site title shown by the rendering layer.
    pub title: String,
    /// Site description, used in DCAT metadata.
    pub description: String,
    /// Deployment subdirectory, e.g. "/corveg". Empty for root.
    pub sub_url: String,
    /// Whether label resolution may dereference unknown URIs.
    pub allow_remote: bool,
    /// Timeout for a single remote dereference, in seconds.
    pub dereference_timeout_secs: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "VocView".to_string(),
            description: "SKOS controlled vocabulary viewer".to_string(),
            sub_url: String::new(),
            allow_remote: true,
            dereference_timeout_secs: 5,
        }
    }
}

impl ViewerConfig {
    /// Read settings from `VOCVIEW_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            title: env::var("VOCVIEW_TITLE").unwrap_or(defaults.title),
            description: env::var("VOCVIEW_DESCRIPTION").unwrap_or(defaults.description),
            sub_url: env::var("VOCVIEW_SUB_URL").unwrap_or(defaults.sub_url),
            allow_remote: env::var("VOCVIEW_ALLOW_REMOTE")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(defaults.allow_remote),
            dereference_timeout_secs: env::var("VOCVIEW_DEREF_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.dereference_timeout_secs),
        }
    }

    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn dereference_timeout(&self) -> Duration {
        Duration::from_secs(self.dereference_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: defaults match the shipped viewer
    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.title, "VocView");
        assert!(config.allow_remote);
        assert_eq!(config.dereference_timeout(), Duration::from_secs(5));
    }

    /// Test: partial YAML keeps defaults for omitted keys
    #[test]
    fn test_partial_yaml() {
        let config: ViewerConfig =
            serde_yaml::from_str("title: Corveg Vocabularies\nallow_remote: false\n").unwrap();
        assert_eq!(config.title, "Corveg Vocabularies");
        assert!(!config.allow_remote);
        assert_eq!(config.sub_url, "");
        assert_eq!(config.dereference_timeout_secs, 5);
    }

    /// Test: YAML file round-trip
    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocview.yaml");
        fs::write(&path, "sub_url: /corveg\ndereference_timeout_secs: 2\n").unwrap();
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.sub_url, "/corveg");
        assert_eq!(config.dereference_timeout(), Duration::from_secs(2));
    }
}
