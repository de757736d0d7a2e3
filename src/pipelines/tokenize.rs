//! Tokenization stage.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::{read_table, write_table};
use crate::transformers::{Tokenizer, Transform};
use crate::types::TweetTable;

use super::Pipeline;

#[derive(Debug, Clone)]
pub struct TokenizeConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
}

pub struct Tokenize {
    config: TokenizeConfig,
}

impl Tokenize {
    pub fn new(config: TokenizeConfig) -> Self {
        Self { config }
    }
}

impl Pipeline<TweetTable> for Tokenize {
    fn run(&self) -> Result<TweetTable, Error> {
        let table = read_table(&self.config.src)?;
        let table = Tokenizer.transform_own(table)?;

        write_table(&table, &self.config.dst)?;
        info!("wrote {} tokenized tweets to {:?}", table.len(), self.config.dst);
        Ok(table)
    }
}
