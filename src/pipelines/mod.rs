//! Pipelines.
//!
//! One pipeline per stage, each reading its input from disk and writing a CSV table:
//!
//! 1. [Preprocess]: raw dump to tweet table,
//! 1. [Tokenize]: tweet table to tokenized table,
//! 1. [Translate]: tokenized table to translated table,
//! 1. [Score]: tokenized (or translated) table to score table.
//!
//! Every stage implements the light [Pipeline] trait.
#[allow(clippy::module_inception)]
mod pipeline;
mod preprocess;
mod score;
mod tokenize;
mod translate;

pub use pipeline::Pipeline;
pub use preprocess::{Preprocess, PreprocessConfig};
pub use score::{Score, ScoreConfig};
pub use tokenize::{Tokenize, TokenizeConfig};
pub use translate::{Translate, TranslateConfig};

/// Default output locations of each stage.
pub const PREPROCESS_DST: &str = "data/csv/tweets.csv";
pub const TOKENIZE_DST: &str = "data/csv/tkn_tweets.csv";
pub const TRANSLATE_DST: &str = "data/csv/trsl_tweets.csv";
pub const SCORE_DST: &str = "data/csv/score.csv";
