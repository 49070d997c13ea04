use anyhow::Result;
use colored::Colorize;
use phoneword::Dictionary;

use crate::commands::load_dictionary;
use crate::config::Config;

pub fn execute(config: &Config, words: &[String]) -> Result<()> {
    let dictionary = load_dictionary(config)?;

    for (word, found) in lookup(&dictionary, words) {
        if found {
            println!("  {} {}", "✓".green(), word.bold());
        } else {
            println!("  {} {}", "✗".red(), word);
        }
    }

    Ok(())
}

/// Membership of each word after the same normalization the loader applies
fn lookup(dictionary: &Dictionary, words: &[String]) -> Vec<(String, bool)> {
    words
        .iter()
        .map(|w| {
            let word = w.trim().to_uppercase();
            let found = dictionary.contains(&word);
            (word, found)
        })
        .collect()
}
