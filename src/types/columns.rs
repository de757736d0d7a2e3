//! Column names shared by the pipeline stages.
pub const TWEETID: &str = "Tweetid";
pub const TEXT: &str = "Texttw";
pub const PLACE: &str = "Place";
pub const RETWEET: &str = "Retweet";
pub const CREATED_AT: &str = "Created_At";
pub const LANG: &str = "Lang";

pub const HASHTAGS: &str = "Hashtags";
pub const PLAIN_TEXT: &str = "Plain_Text";
pub const EMOJIS: &str = "Emojis";
pub const EMOTICONS: &str = "Emoticons";

pub const TRANSLATED_TEXT: &str = "Translated_Text";
pub const STEMMED_TEXT: &str = "Stemmed_Text";

pub const DATETIME: &str = "DATETIME";
pub const SWN: &str = "SWN";
pub const VADER: &str = "VADER";
pub const MIX: &str = "MIX";

/// Boolean values as persisted in tables.
pub const TRUE: &str = "True";
pub const FALSE: &str = "False";
