// File: src/config.rs
// Purpose: Configuration parsing from phoneword.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Dictionary source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Newline-delimited word list (default: "dictionary.txt")
    #[serde(default = "default_dictionary_path")]
    pub path: PathBuf,

    /// The file is already uppercase and sorted; verify instead of normalizing
    #[serde(default)]
    pub presorted: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, grouped by split
    #[default]
    Text,
    /// JSON document
    Json,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("dictionary.txt")
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
            presorted: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the defaults. A relative dictionary
    /// path read from the file is taken relative to the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = ?path, "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config file: {:?}", path))
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if let Some(dir) = path.parent() {
            config.dictionary.path = resolve(dir, &config.dictionary.path);
        }

        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
