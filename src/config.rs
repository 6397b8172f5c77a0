//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/asmdoc/asmdoc.toml`
//! 3. Local config: `./asmdoc.toml` (or `-C <dir>/asmdoc.toml`)
//! 4. Environment variables: `ASMDOC_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Title of the generated documentation page
    pub title: String,
    /// First source-text column of listing lines (0-based, in chars)
    pub source_column: usize,
    /// Default output path for `generate`
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Assembler documentation".to_string(),
            source_column: 24,
            output: PathBuf::from("asmdoc.html"),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }

        let local = local_dir
            .unwrap_or_else(|| Path::new("."))
            .join("asmdoc.toml");
        builder = builder.add_source(File::from(local).required(false));

        builder = builder.add_source(Environment::with_prefix("ASMDOC"));

        builder.build()?.try_deserialize()
    }

    /// Path of the global config file, if a home directory exists.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "asmdoc").map(|dirs| dirs.config_dir().join("asmdoc.toml"))
    }

    /// TOML template with the compiled defaults, for `config init`.
    pub fn template() -> String {
        toml::to_string_pretty(&Settings::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_files_when_loading_then_defaults_apply() {
        let settings = Settings::load(Some(Path::new("/nonexistent"))).unwrap();
        assert_eq!(settings.source_column, 24);
        assert_eq!(settings.output, PathBuf::from("asmdoc.html"));
    }

    #[test]
    fn given_template_when_parsing_back_then_round_trips() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
