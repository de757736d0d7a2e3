//! Raw dump preprocessing.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::write_table;
use crate::processing::reconstruct;
use crate::types::TweetTable;

use super::Pipeline;

#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
}

/// Reads a raw dump, reconstructs its tweets and writes them as a table
/// indexed by tweet id.
pub struct Preprocess {
    config: PreprocessConfig,
}

impl Preprocess {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }
}

impl Pipeline<TweetTable> for Preprocess {
    fn run(&self) -> Result<TweetTable, Error> {
        info!("preprocessing {:?}", self.config.src);
        let data = std::fs::read_to_string(&self.config.src)?;
        let table = reconstruct(&data)?;

        write_table(&table, &self.config.dst)?;
        info!("wrote {} tweets to {:?}", table.len(), self.config.dst);
        Ok(table)
    }
}
