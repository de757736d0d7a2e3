//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Reqwest(reqwest::Error),
    Custom(String),
    /// The raw dump does not contain a single start sentinel.
    NoSentinel(&'static str),
    MissingColumn(String),
    DuplicateTweetid(String),
    /// A lexical resource file has a malformed line.
    Lexicon { path: PathBuf, line: usize },
    Translation(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Reqwest(e) => write!(f, "http error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::NoSentinel(s) => write!(f, "input does not contain any {:?} marker", s),
            Error::MissingColumn(c) => write!(f, "missing column {:?}", c),
            Error::DuplicateTweetid(id) => write!(f, "duplicate Tweetid {:?}", id),
            Error::Lexicon { path, line } => {
                write!(f, "malformed lexicon entry at {:?}:{}", path, line)
            }
            Error::Translation(s) => write!(f, "translation failed: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
