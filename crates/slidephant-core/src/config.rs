//! Configuration management for slidephant.
//!
//! Loads configuration from ${SLIDEPHANT_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Theme colors, as names or hex strings understood by the terminal UI
/// ("cyan", "light magenta", "#ffcc00"). Unknown values fall back to the
/// built-in defaults at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Heading text color.
    pub heading: String,
    /// Inline and fenced code color.
    pub code: String,
    /// List bullets, emphasis accents, and the go-to prompt.
    pub accent: String,
    /// Footer hints and the position display.
    pub footer: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            heading: "cyan".to_string(),
            code: "yellow".to_string(),
            accent: "green".to_string(),
            footer: "gray".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme colors used when rendering slides.
    pub theme: ThemeConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("parse config from {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Initializes the config file.
    ///
    /// Writes the commented default template when the file is absent. When it
    /// already exists, merges the user's values into the latest template so
    /// new sections and comments show up without losing customizations.
    pub fn init(path: &Path) -> Result<()> {
        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };
        write_config(path, &contents)
    }

    /// Saves one theme color to the config file.
    pub fn save_theme_color(field: &str, color: &str) -> Result<()> {
        Self::save_theme_color_to(&paths::config_path(), field, color)
    }

    /// Saves one theme color to a specific config file path.
    ///
    /// Creates the file with the default template if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_theme_color_to(path: &Path, field: &str, color: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        anyhow::ensure!(
            matches!(field, "heading" | "code" | "accent" | "footer"),
            "unknown theme field `{field}` (expected heading, code, accent, or footer)"
        );

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("parse config from {}", path.display()))?;
        doc["theme"][field] = value(color);

        write_config(path, &doc.to_string())
    }
}

/// The default config template with comments, embedded at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

fn write_config(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write config to {}", path.display()))
}

/// Overlays user config values onto the default template.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from the source table into the target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for slidephant configuration and data directories.
    //!
    //! SLIDEPHANT_HOME resolution order:
    //! 1. SLIDEPHANT_HOME environment variable (if set)
    //! 2. ~/.config/slidephant (default)

    use std::path::PathBuf;

    /// Returns the slidephant home directory.
    pub fn slidephant_home() -> PathBuf {
        if let Ok(home) = std::env::var("SLIDEPHANT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("slidephant"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        slidephant_home().join("config.toml")
    }

    /// Returns the path to the log directory.
    pub fn logs_dir() -> PathBuf {
        slidephant_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme.heading, "cyan");
        assert_eq!(config.theme.footer, "gray");
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nheading = \"magenta\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme.heading, "magenta");
        assert_eq!(config.theme.code, "yellow");
    }

    #[test]
    fn test_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[theme]"));
        assert!(contents.contains("heading"));
        // The written template parses back to the defaults.
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme.heading, "cyan");
    }

    #[test]
    fn test_init_preserves_user_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nheading = \"magenta\"\n").unwrap();
        Config::init(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme.heading, "magenta");
        // Template comments came back in.
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains('#'));
    }

    #[test]
    fn test_save_theme_color_creates_file_from_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::save_theme_color_to(&path, "heading", "magenta").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme.heading, "magenta");
        assert_eq!(config.theme.code, "yellow");
        // Template comments are present in the created file.
        assert!(fs::read_to_string(&path).unwrap().contains('#'));
    }

    #[test]
    fn test_save_theme_color_preserves_other_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\ncode = \"blue\"\n").unwrap();
        Config::save_theme_color_to(&path, "footer", "white").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme.footer, "white");
        assert_eq!(config.theme.code, "blue");
    }

    #[test]
    fn test_save_theme_color_rejects_unknown_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let err = Config::save_theme_color_to(&path, "background", "red").unwrap_err();
        assert!(err.to_string().contains("unknown theme field"));
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = 3").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
