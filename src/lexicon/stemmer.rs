//! Snowball stemming, used as lemmatizer when no WordNet data is available.
use rust_stemmers::{Algorithm, Stemmer};

use super::Lemmatizer;

pub struct Snowball {
    stemmer: Stemmer,
}

impl Default for Snowball {
    /// English stemmer.
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Lemmatizer for Snowball {
    fn lemmatize(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::Snowball;
    use crate::lexicon::Lemmatizer;

    #[test]
    fn english() {
        let s = Snowball::default();
        assert_eq!(s.lemmatize("running"), "run");
        assert_eq!(s.lemmatize("cats"), "cat");
    }
}
