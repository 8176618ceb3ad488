//! Command-line configuration and validation
//!
//! Configuration for the anagram finder: which dictionary to scan, which
//! map backend to index it with, and the output format.

use std::path::PathBuf;

use clap::Parser;

use crate::types::MapKind;

/// Configuration for one anagram-finding run
#[derive(Parser, Debug, Clone)]
#[command(
    name = "anagram-index",
    about = "Find the largest groups of anagrams in a dictionary"
)]
pub struct Config {
    /// Dictionary file, one word per line, arbitrary case
    pub dictionary: PathBuf,

    /// Backing map implementation
    #[arg(value_enum)]
    pub backend: MapKind,

    /// Emit the report as pretty-printed JSON instead of text
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Config {
    /// Validate the configuration at startup, before any map is built
    pub fn validate(&self) -> Result<(), String> {
        if !self.dictionary.exists() {
            return Err(format!(
                "cannot open file '{}' for input",
                self.dictionary.display()
            ));
        }
        Ok(())
    }
}
