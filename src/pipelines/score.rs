//! Scoring stage.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::{read_table, write_table};
use crate::lexicon::{EmojiTable, SentiWordNet, Vader};
use crate::transformers::{Scorer, Transform};
use crate::types::TweetTable;

use super::Pipeline;

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
    /// `vader_lexicon.txt`
    pub vader: PathBuf,
    /// `SentiWordNet_3.0.0.txt`
    pub swn: PathBuf,
    /// Tab-separated emoji names, overriding Unicode catalog names.
    pub emojis: Option<PathBuf>,
}

pub struct Score {
    config: ScoreConfig,
}

impl Score {
    pub fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    fn scorer(&self) -> Result<Scorer, Error> {
        let vader = Vader::from_path(&self.config.vader)?;
        let swn = SentiWordNet::from_path(&self.config.swn)?;
        let emojis = match &self.config.emojis {
            Some(path) => EmojiTable::from_path(path)?,
            None => EmojiTable::builtin(),
        };
        Ok(Scorer::new(Box::new(vader), Box::new(swn), Box::new(emojis)))
    }
}

impl Pipeline<TweetTable> for Score {
    fn run(&self) -> Result<TweetTable, Error> {
        let scorer = self.scorer()?;
        let table = read_table(&self.config.src)?;
        let table = scorer.transform_own(table)?;

        write_table(&table, &self.config.dst)?;
        info!("wrote {} scores to {:?}", table.len(), self.config.dst);
        Ok(table)
    }
}
