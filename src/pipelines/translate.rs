//! Translation stage.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::{read_table, write_table};
use crate::lexicon::{Lemmatizer, SentiWordNet, Snowball};
use crate::transformers::{TextTranslator, Transform};
use crate::translation::{GoogleTranslate, Translator};
use crate::types::TweetTable;

use super::Pipeline;

#[derive(Debug, Clone)]
pub struct TranslateConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
    /// SentiWordNet file used for lemmatization. Snowball stemming is used otherwise.
    pub lemmas: Option<PathBuf>,
    pub dest: String,
    pub limit: Option<usize>,
}

pub struct Translate {
    config: TranslateConfig,
}

impl Translate {
    pub fn new(config: TranslateConfig) -> Self {
        Self { config }
    }

    /// Run with another translation service.
    pub fn run_with(&self, translator: Box<dyn Translator>) -> Result<TweetTable, Error> {
        let lemmatizer: Box<dyn Lemmatizer> = match &self.config.lemmas {
            Some(path) => Box::new(SentiWordNet::from_path(path)?),
            None => {
                info!("no lemma file, using snowball stemming");
                Box::new(Snowball::default())
            }
        };

        let table = read_table(&self.config.src)?;
        let table = TextTranslator::new(translator, lemmatizer, self.config.dest.clone())
            .with_limit(self.config.limit)
            .transform_own(table)?;

        write_table(&table, &self.config.dst)?;
        info!("wrote {} translated tweets to {:?}", table.len(), self.config.dst);
        Ok(table)
    }
}

impl Pipeline<TweetTable> for Translate {
    fn run(&self) -> Result<TweetTable, Error> {
        self.run_with(Box::new(GoogleTranslate::new()?))
    }
}
