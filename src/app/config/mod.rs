// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences
//! loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[preview]` - Defaults shared by every preview widget (key attribute, limits)
//! - `[form]` - Title and fields of the upload form; one widget per field
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `IMAGE_PREVIEW_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_preview::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//!
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::image_preview::PreviewOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Defaults applied to every preview widget of the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewSection {
    /// Attribute identifying an input in the selection cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_attribute: Option<String>,

    /// Largest accepted file, in kibibytes.
    #[serde(
        default = "default_max_file_kb",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_file_kb: Option<u64>,

    /// Read timeout in seconds; `0` disables it.
    #[serde(
        default = "default_read_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_timeout_secs: Option<u64>,
}

impl Default for PreviewSection {
    fn default() -> Self {
        Self {
            key_attribute: None,
            max_file_kb: default_max_file_kb(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl PreviewSection {
    /// Widget options for the form field `field`, with limits clamped to
    /// their valid ranges.
    ///
    /// Selectors follow the element naming of the upload form: the input is
    /// `[name="<field>"]`, the reset button `[id="<field>-reset"]` and the
    /// preview container `[id="<field>-preview"]`. Attribute selectors keep
    /// names such as `user.avatar` or `images[0]` literal.
    #[must_use]
    pub fn options_for(&self, field: &str) -> PreviewOptions {
        PreviewOptions {
            key_attribute: self.key_attribute.clone(),
            input: Some(format!(r#"[name="{field}"]"#)),
            reset: Some(format!(r#"[id="{field}-reset"]"#)),
            preview: Some(format!(r#"[id="{field}-preview"]"#)),
            max_file_kb: self
                .max_file_kb
                .map(|kb| kb.clamp(MIN_MAX_FILE_KB, MAX_MAX_FILE_KB)),
            read_timeout_secs: self
                .read_timeout_secs
                .map(|secs| secs.min(MAX_READ_TIMEOUT_SECS)),
        }
    }
}

/// One file field of the upload form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldConfig {
    /// Value of the input's `name` attribute.
    pub name: String,

    /// Label shown next to the input; a translated default is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Upload form layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    /// Window and form title; a translated default is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: None,
            fields: default_fields(),
        }
    }
}

impl FormConfig {
    /// Fields with a usable name, first occurrence of each name only.
    #[must_use]
    pub fn valid_fields(&self) -> Vec<&FieldConfig> {
        let mut fields: Vec<&FieldConfig> = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let name = field.name.trim();
            if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == '"') {
                log::warn!("Ignoring form field with invalid name {:?}", field.name);
                continue;
            }
            if fields.iter().any(|kept| kept.name.trim() == name) {
                log::warn!("Ignoring duplicate form field '{name}'");
                continue;
            }
            fields.push(field);
        }
        fields
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub preview: PreviewSection,

    #[serde(default)]
    pub form: FormConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_file_kb() -> Option<u64> {
    Some(DEFAULT_MAX_FILE_KB)
}

fn default_read_timeout_secs() -> Option<u64> {
    Some(DEFAULT_READ_TIMEOUT_SECS)
}

fn default_fields() -> Vec<FieldConfig> {
    DEFAULT_FORM_FIELDS
        .iter()
        .map(|(name, _)| FieldConfig {
            name: (*name).to_string(),
            label: None,
        })
        .collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Falling back to default settings, {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::image_preview::PreviewConfig;
    use tempfile::tempdir;

    fn field(name: &str) -> FieldConfig {
        FieldConfig {
            name: name.to_string(),
            label: None,
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            preview: PreviewSection {
                key_attribute: Some("id".to_string()),
                max_file_kb: Some(512),
                read_timeout_secs: Some(0),
            },
            form: FormConfig {
                title: Some("Profile".to_string()),
                fields: vec![FieldConfig {
                    name: "testimage1".to_string(),
                    label: Some("Cover".to_string()),
                }],
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_invalid_file_returns_defaults_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[preview]\nmax_file_kb = \"lots\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_without_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"").expect("valid toml");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.preview, PreviewSection::default());
        assert_eq!(config.form.fields.len(), DEFAULT_FORM_FIELDS.len());
    }

    #[test]
    fn form_fields_parse_from_array_of_tables() {
        let config: Config = toml::from_str(
            r#"
            [form]
            title = "Gallery"

            [[form.fields]]
            name = "testimage1"
            label = "First image"

            [[form.fields]]
            name = "testimage2"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.form.title.as_deref(), Some("Gallery"));
        assert_eq!(config.form.fields.len(), 2);
        assert_eq!(config.form.fields[0].label.as_deref(), Some("First image"));
        assert_eq!(config.form.fields[1].label, None);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.preview.key_attribute, None);
        assert_eq!(config.preview.max_file_kb, Some(DEFAULT_MAX_FILE_KB));
        assert_eq!(config.preview.read_timeout_secs, Some(DEFAULT_READ_TIMEOUT_SECS));
        assert_eq!(
            config.form.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["avatar", "banner"]
        );
    }

    #[test]
    fn options_for_builds_form_selectors() {
        let options = PreviewSection::default().options_for("avatar");

        assert_eq!(options.input.as_deref(), Some(r#"[name="avatar"]"#));
        assert_eq!(options.reset.as_deref(), Some(r#"[id="avatar-reset"]"#));
        assert_eq!(options.preview.as_deref(), Some(r#"[id="avatar-preview"]"#));
        assert!(PreviewConfig::from_options(&options).is_ok());
    }

    #[test]
    fn options_for_clamps_limits() {
        let section = PreviewSection {
            key_attribute: None,
            max_file_kb: Some(0),
            read_timeout_secs: Some(100_000),
        };
        let options = section.options_for("avatar");

        assert_eq!(options.max_file_kb, Some(MIN_MAX_FILE_KB));
        assert_eq!(options.read_timeout_secs, Some(MAX_READ_TIMEOUT_SECS));
    }

    #[test]
    fn valid_fields_skips_blank_and_duplicate_names() {
        let form = FormConfig {
            title: None,
            fields: vec![field("avatar"), field(" "), field("avatar"), field("bad name"), field("banner")],
        };

        let names: Vec<_> = form.valid_fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["avatar", "banner"]);
    }
}
