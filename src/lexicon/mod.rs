/*! Lexical resources

Sentiment scoring and lemmatization rely on lexical resources.
Each resource is accessed through a small trait so that stages can be run
with file-backed resources or with deterministic stand-ins.

- [Polarity]: text polarity ([Vader] reads a `vader_lexicon.txt` file),
- [SenseLexicon]: first word sense scores ([SentiWordNet] reads a `SentiWordNet_3.0.0.txt` file),
- [EmojiNames]: emoji descriptions ([EmojiTable]),
- [Lemmatizer]: word base forms ([SentiWordNet] lemmas, or [Snowball] stemming).
!*/
mod emoji;
mod sentiwordnet;
mod stemmer;
pub mod stopwords;
mod vader;

pub use emoji::EmojiTable;
pub use sentiwordnet::SentiWordNet;
pub use stemmer::Snowball;
pub use vader::Vader;

/// Positive and negative scores of a word sense.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SenseScore {
    pub pos: f64,
    pub neg: f64,
}

impl SenseScore {
    pub fn new(pos: f64, neg: f64) -> Self {
        Self { pos, neg }
    }
}

/// Polarity of a whole text, in `[-1, 1]`.
pub trait Polarity {
    fn compound(&self, text: &str) -> f64;
}

/// Scores of the most common sense of a word, if the word is known.
pub trait SenseLexicon {
    fn first_sense(&self, word: &str) -> Option<SenseScore>;
}

/// Textual description of an emoji, if known.
pub trait EmojiNames {
    fn name(&self, emoji: &str) -> Option<&str>;
}

/// Base form of a word.
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str) -> String;
}
