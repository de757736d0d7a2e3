//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use tweetsent::pipelines::{
    PreprocessConfig, ScoreConfig, TokenizeConfig, TranslateConfig, PREPROCESS_DST, SCORE_DST,
    TOKENIZE_DST, TRANSLATE_DST,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "tweetsent", about = "tweet sentiment pipeline.")]
/// Holds every command that is callable by the `tweetsent` command.
pub enum Tweetsent {
    #[structopt(about = "Rebuild a tweet table from a raw dump")]
    Preprocess(Preprocess),
    #[structopt(about = "Tokenize tweets")]
    Tokenize(Tokenize),
    #[structopt(about = "Translate and lemmatize tweets")]
    Translate(Translate),
    #[structopt(about = "Compute sentiment scores")]
    Score(Score),
}

#[derive(Debug, StructOpt)]
/// Preprocess command and parameters.
///
/// ```sh
/// USAGE:
///     tweetsent preprocess <src> [dst]
///
/// ARGS:
///     <src>    raw tweet dump
///     <dst>    tweet table destination [default: data/csv/tweets.csv]
/// ```
pub struct Preprocess {
    #[structopt(parse(from_os_str), help = "raw tweet dump")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "tweet table destination", default_value = PREPROCESS_DST)]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Tokenize {
    #[structopt(parse(from_os_str), help = "tweet table")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "tokenized table destination", default_value = TOKENIZE_DST)]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Translate {
    #[structopt(parse(from_os_str), help = "tweet table")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "translated table destination", default_value = TRANSLATE_DST)]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lemmas",
        help = "Path to SentiWordNet_3.0.0.txt, used for lemmatization. Snowball stemming is used if absent."
    )]
    pub lemmas: Option<PathBuf>,
    #[structopt(long = "dest", help = "destination language", default_value = "en")]
    pub dest: String,
    #[structopt(long = "limit", help = "only translate the first n tweets")]
    pub limit: Option<usize>,
}

#[derive(Debug, StructOpt)]
pub struct Score {
    #[structopt(parse(from_os_str), help = "tokenized table")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "score table destination", default_value = SCORE_DST)]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "vader",
        help = "Path to vader_lexicon.txt",
        default_value = "vader_lexicon.txt"
    )]
    pub vader: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "swn",
        help = "Path to SentiWordNet_3.0.0.txt",
        default_value = "SentiWordNet_3.0.0.txt"
    )]
    pub swn: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "emojis",
        help = "Path to a tab-separated emoji name file, overriding Unicode emoji names."
    )]
    pub emojis: Option<PathBuf>,
}

impl From<Preprocess> for PreprocessConfig {
    fn from(p: Preprocess) -> Self {
        Self {
            src: p.src,
            dst: p.dst,
        }
    }
}

impl From<Tokenize> for TokenizeConfig {
    fn from(t: Tokenize) -> Self {
        Self {
            src: t.src,
            dst: t.dst,
        }
    }
}

impl From<Translate> for TranslateConfig {
    fn from(t: Translate) -> Self {
        Self {
            src: t.src,
            dst: t.dst,
            lemmas: t.lemmas,
            dest: t.dest,
            limit: t.limit,
        }
    }
}

impl From<Score> for ScoreConfig {
    fn from(s: Score) -> Self {
        Self {
            src: s.src,
            dst: s.dst,
            vader: s.vader,
            swn: s.swn,
            emojis: s.emojis,
        }
    }
}
