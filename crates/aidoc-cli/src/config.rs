//! Configuration file
//!
//! Settings are loaded from `aidoc.toml` (or `.aidoc.toml`) in the current
//! directory, or from the path given with `--config`:
//!
//! ```toml
//! [export]
//! default_theme = "modern_dark"
//!
//! [meta]
//! author = "Research Team"
//! locale = "en-GB"
//!
//! [deck]
//! subtitle = "Quarterly Briefing"
//! ```

use std::fs;
use std::path::Path;

use aidoc_pptx::deck_settings::{DeckMeta, DeckOptions};
use aidoc_pptx::DeckSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// File names searched when no config path is given
pub const CONFIG_CANDIDATES: [&str; 2] = ["aidoc.toml", ".aidoc.toml"];

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Export defaults
    pub export: ExportSettings,
    /// Document metadata
    pub meta: DeckMeta,
    /// Deck presentation options
    pub deck: DeckOptions,
}

/// Export defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Theme used when a request names none
    pub default_theme: Option<String>,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Settings handed to the slide renderer
    pub fn deck_settings(&self) -> DeckSettings {
        DeckSettings {
            meta: self.meta.clone(),
            deck: self.deck.clone(),
        }
    }
}

/// Load settings from a config file or use defaults
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Settings::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        }
        None => {
            for candidate in CONFIG_CANDIDATES {
                if Path::new(candidate).exists() {
                    let content = fs::read_to_string(candidate)
                        .with_context(|| format!("Failed to read config: {}", candidate))?;
                    match Settings::from_toml_str(&content) {
                        Ok(settings) => {
                            debug!("Loaded config from {}", candidate);
                            return Ok(settings);
                        }
                        Err(err) => warn!("Ignoring {}: {}", candidate, err),
                    }
                }
            }
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.export.default_theme, None);
        assert_eq!(settings.meta.locale, "en-US");
        assert_eq!(settings.meta.author, None);
        assert_eq!(settings.deck.subtitle, "AI-Generated Presentation");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_all_sections() {
        let settings = Settings::from_toml_str(
            r#"
[export]
default_theme = "modern_dark"

[meta]
author = "Research Team"

[deck]
subtitle = "Briefing"
"#,
        )
        .unwrap();
        assert_eq!(settings.export.default_theme.as_deref(), Some("modern_dark"));
        assert_eq!(settings.meta.author.as_deref(), Some("Research Team"));
        // Unset fields inside a present table keep their defaults
        assert_eq!(settings.meta.locale, "en-US");

        let deck = settings.deck_settings();
        assert_eq!(deck.deck.subtitle, "Briefing");
        assert_eq!(deck.meta.author.as_deref(), Some("Research Team"));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[export]\ndefault_theme = \"nature_green\"").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.export.default_theme.as_deref(), Some("nature_green"));
    }

    #[test]
    fn test_load_missing_path_fails() {
        let err = load_settings(Some(Path::new("/nonexistent/aidoc.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_malformed_path_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[export\n").unwrap();
        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
