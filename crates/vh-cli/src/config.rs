//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default file name of the visualization document.
pub const DEFAULT_JSON_FILE_NAME: &str = "data-to-visualize.json";

/// Default file name of the HTML report.
pub const DEFAULT_HTML_FILE_NAME: &str = "index.html";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File name of the visualization document inside the output directory.
    pub json_file_name: String,

    /// File name of the HTML report inside the output directory.
    pub html_file_name: String,

    /// Report template. The built-in template is used when unset.
    pub template_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_file_name: DEFAULT_JSON_FILE_NAME.to_string(),
            html_file_name: DEFAULT_HTML_FILE_NAME.to_string(),
            template_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from default locations, optionally merging a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (VH_*)
        figment = figment.merge(Env::prefixed("VH_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for vh.
///
/// On Linux: `~/.config/vh`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("vh"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn test_dirs_config_path_ends_with_vh() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "vh");
    }

    #[test]
    fn test_default_config_file_names() {
        let config = Config::default();
        assert_eq!(config.json_file_name, "data-to-visualize.json");
        assert_eq!(config.html_file_name, "index.html");
        assert_eq!(config.template_path, None);
    }

    #[test]
    fn test_explicit_config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vh.toml");
        fs::write(
            &path,
            "json_file_name = \"tree.json\"\ntemplate_path = \"/srv/report.html\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.json_file_name, "tree.json");
        assert_eq!(config.html_file_name, "index.html");
        assert_eq!(config.template_path, Some(PathBuf::from("/srv/report.html")));
    }
}
