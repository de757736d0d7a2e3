/*! Table transformers.

Each stage after preprocessing is a [Transform] over a [crate::types::TweetTable]:
it checks the columns it needs, then adds (or replaces) the columns it produces.

- [Tokenizer] splits tweet text into hashtags, plain text, emojis and emoticons,
- [TextTranslator] translates and lemmatizes text,
- [Scorer] computes sentiment scores.
!*/
mod emoji;
mod hashtag;
mod html;
mod negation;
mod scorer;
mod tokenizer;
mod transform;
mod translate;

pub use emoji::find_emojis;
pub use hashtag::split_hashtag;
pub use html::html2unicode;
pub use negation::{mark_negation, NEG_SUFFIX};
pub use scorer::{parse_datetime, Scorer, Scores};
pub use tokenizer::{is_emoticon, tokenize, Tokenizer, Tokens};
pub use transform::Transform;
pub use translate::TextTranslator;
