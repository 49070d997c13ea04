pub mod convert;
pub mod expand;
pub mod lookup;

use anyhow::{Context, Result};
use phoneword::Dictionary;
use std::sync::Arc;

use crate::config::Config;

/// Load the configured dictionary once for the lifetime of the command
pub fn load_dictionary(config: &Config) -> Result<Arc<Dictionary>> {
    let path = &config.dictionary.path;

    let dictionary = if config.dictionary.presorted {
        Dictionary::load_sorted(path)
    } else {
        Dictionary::load(path)
    }
    .with_context(|| format!("Failed to load dictionary: {:?}", path))?;

    if dictionary.is_empty() {
        tracing::warn!(path = ?path, "dictionary is empty; no words can match");
    }

    Ok(Arc::new(dictionary))
}
