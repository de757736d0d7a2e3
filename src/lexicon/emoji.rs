//! Emoji descriptions.
//!
//! Descriptions are turned into words before being scored, so both CLDR names
//! (`face with tears of joy`) and short codes (`:face_with_tears_of_joy:`) work.
//! Names come from the Unicode emoji catalog of the [emojis] crate,
//! optionally overridden by a TSV file (`emoji<TAB>name`).
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Error;

use super::EmojiNames;

#[derive(Debug, Clone, Default)]
pub struct EmojiTable {
    names: HashMap<String, String>,
    /// Fall back to the Unicode emoji catalog for unlisted emojis.
    catalog: bool,
}

impl EmojiTable {
    /// Every emoji of the Unicode catalog.
    pub fn builtin() -> Self {
        Self {
            names: HashMap::new(),
            catalog: true,
        }
    }

    /// Only the given emojis.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            catalog: false,
        }
    }

    /// Load a `emoji<TAB>name` file. Unlisted emojis keep their catalog name.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let mut names = HashMap::new();
        for (nb, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once('\t') {
                Some((emoji, name)) => {
                    names.insert(emoji.to_string(), name.trim().to_string());
                }
                None => {
                    return Err(Error::Lexicon {
                        path: path.to_path_buf(),
                        line: nb + 1,
                    })
                }
            }
        }
        info!("loaded {} emoji names from {:?}", names.len(), path);
        Ok(Self {
            names,
            catalog: true,
        })
    }

    /// Number of explicitly named emojis.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl EmojiNames for EmojiTable {
    fn name(&self, emoji: &str) -> Option<&str> {
        match self.names.get(emoji) {
            Some(name) => Some(name.as_str()),
            None if self.catalog => emojis::get(emoji).map(|e| e.name()),
            None => None,
        }
    }
}
