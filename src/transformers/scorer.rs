/*! Sentiment scoring

Computes three scores per tweet:

- `SWN`: mean polarity of the first sense of each non-stopword of [PLAIN_TEXT], negation-aware,
- `VADER`: text polarity, averaged with the polarity of each emoji description,
- `MIX`: `SWN`, averaged with the mean emoji polarity and the mean emoticon polarity.

The output table is keyed by the tweet creation date.
!*/
use chrono::DateTime;
use lazy_static::lazy_static;
use log::{info, warn};
use rayon::prelude::*;
use regex::Regex;

use crate::error::Error;
use crate::lexicon::stopwords::is_stopword;
use crate::lexicon::{EmojiNames, Polarity, SenseLexicon};
use crate::types::columns::{
    CREATED_AT, DATETIME, EMOJIS, EMOTICONS, MIX, PLAIN_TEXT, SWN, VADER,
};
use crate::types::{Record, TweetTable};

use super::negation::{mark_negation, NEG_SUFFIX};
use super::Transform;

/// Creation date format of the scraped tweets (`wed oct 10 20:19:24 +0000 2018`).
const TWITTER_DATE: &str = "%a %b %d %H:%M:%S %z %Y";
const OUTPUT_DATE: &str = "%Y-%m-%d %H:%M:%S%:z";

lazy_static! {
    static ref NOT_LETTER: Regex = Regex::new(r"[^A-Za-z]").unwrap();
}

/// Scores of a single tweet.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    pub datetime: String,
    pub swn: f64,
    pub vader: f64,
    pub mix: f64,
}

impl From<Scores> for Record {
    fn from(s: Scores) -> Record {
        [
            (DATETIME, s.datetime),
            (SWN, format!("{:?}", s.swn)),
            (VADER, format!("{:?}", s.vader)),
            (MIX, format!("{:?}", s.mix)),
        ]
        .into_iter()
        .collect()
    }
}

/// Normalize a creation date. Unparseable dates are kept as is.
pub fn parse_datetime(raw: &str) -> String {
    DateTime::parse_from_str(raw.trim(), TWITTER_DATE)
        .or_else(|_| DateTime::parse_from_rfc3339(raw.trim()))
        .map(|dt| dt.format(OUTPUT_DATE).to_string())
        .unwrap_or_else(|_| {
            warn!("unparseable date {:?}", raw);
            raw.to_string()
        })
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Scorer holding the lexical resources it needs.
pub struct Scorer {
    polarity: Box<dyn Polarity + Sync + Send>,
    senses: Box<dyn SenseLexicon + Sync + Send>,
    emojis: Box<dyn EmojiNames + Sync + Send>,
}

impl Scorer {
    pub fn new(
        polarity: Box<dyn Polarity + Sync + Send>,
        senses: Box<dyn SenseLexicon + Sync + Send>,
        emojis: Box<dyn EmojiNames + Sync + Send>,
    ) -> Self {
        Self {
            polarity,
            senses,
            emojis,
        }
    }

    /// Lexicon-based score of a text.
    pub fn swn_score(&self, text: &str) -> f64 {
        let words: Vec<&str> = text.split_whitespace().collect();
        let marked = mark_negation(&words);

        let mut scored: Vec<&str> = Vec::new();
        let mut sum = 0.0;
        for word in marked.iter().filter(|w| !is_stopword(w)) {
            if scored.contains(&word.as_str()) {
                continue;
            }
            let negated = word.contains(NEG_SUFFIX);
            let clean = word.replace(NEG_SUFFIX, "");
            if let Some(sense) = self.senses.first_sense(&clean) {
                let (pos, neg) = if negated {
                    (sense.neg, sense.pos)
                } else {
                    (sense.pos, sense.neg)
                };
                sum += pos - neg;
                scored.push(word);
            }
        }

        mean(sum, scored.len())
    }

    /// Polarity of an emoji description, 0 for unknown emojis.
    pub fn emoji_score(&self, emoji: &str) -> f64 {
        match self.emojis.name(emoji) {
            Some(name) => self.polarity.compound(&NOT_LETTER.replace_all(name, " ")),
            None => 0.0,
        }
    }

    /// Mean emoji polarity.
    pub fn emojis_score(&self, emojis: &[&str]) -> f64 {
        let sum: f64 = emojis.iter().map(|e| self.emoji_score(e)).sum();
        mean(sum, emojis.len())
    }

    /// Mean emoticon polarity.
    pub fn emoticons_score(&self, emoticons: &[&str]) -> f64 {
        let sum: f64 = emoticons.iter().map(|e| self.polarity.compound(e)).sum();
        mean(sum, emoticons.len())
    }

    /// Text polarity averaged with each emoji polarity.
    pub fn vader_score(&self, text: &str, emojis: &[&str]) -> f64 {
        let score = self.polarity.compound(text);
        if emojis.is_empty() {
            return score;
        }
        let emojis_sum: f64 = emojis.iter().map(|e| self.emoji_score(e)).sum();
        (score + emojis_sum) / (emojis.len() + 1) as f64
    }

    /// Lexicon-based score, averaged with emoji and emoticon polarities.
    pub fn mix_score(&self, text: &str, emojis: &[&str], emoticons: &[&str]) -> f64 {
        let mut score = self.swn_score(text);
        if !emojis.is_empty() {
            score = (score + self.emojis_score(emojis)) / 2.0;
        }
        if !emoticons.is_empty() {
            score = (score + self.emoticons_score(emoticons)) / 2.0;
        }
        score
    }

    pub fn score(&self, row: &Record) -> Scores {
        let text = row.get_or_empty(PLAIN_TEXT);
        let emojis: Vec<&str> = row.get_or_empty(EMOJIS).split_whitespace().collect();
        let emoticons: Vec<&str> = row.get_or_empty(EMOTICONS).split_whitespace().collect();

        Scores {
            datetime: parse_datetime(row.get_or_empty(CREATED_AT)),
            swn: self.swn_score(text),
            vader: self.vader_score(text, &emojis),
            mix: self.mix_score(text, &emojis, &emoticons),
        }
    }
}

impl Transform for Scorer {
    fn transform_own(&self, table: TweetTable) -> Result<TweetTable, Error> {
        table.require(&[CREATED_AT, PLAIN_TEXT, EMOJIS, EMOTICONS])?;
        info!("scoring {} tweets", table.len());

        let scores: Vec<Scores> = table.rows().par_iter().map(|row| self.score(row)).collect();

        let mut out = TweetTable::new(vec![
            DATETIME.to_string(),
            SWN.to_string(),
            VADER.to_string(),
            MIX.to_string(),
        ]);
        for s in scores {
            out.push(s.into());
        }
        out.set_index(DATETIME)?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::lexicon::{EmojiTable, SenseScore};

    /// Polarity stand-in: sum of per-word values, clamped.
    struct WordSum(HashMap<&'static str, f64>);

    impl Polarity for WordSum {
        fn compound(&self, text: &str) -> f64 {
            text.split_whitespace()
                .filter_map(|w| self.0.get(w))
                .sum::<f64>()
                .clamp(-1.0, 1.0)
        }
    }

    struct Senses(HashMap<&'static str, SenseScore>);

    impl SenseLexicon for Senses {
        fn first_sense(&self, word: &str) -> Option<SenseScore> {
            self.0.get(word).copied()
        }
    }

    fn scorer() -> Scorer {
        let polarity = WordSum(
            [("good", 0.5), ("bad", -0.5), ("joy", 0.8), (":)", 0.4), (":(", -0.4)]
                .into_iter()
                .collect(),
        );
        let senses = Senses(
            [
                ("good", SenseScore::new(0.5, 0.125)),
                ("movie", SenseScore::new(0.0, 0.0)),
                ("bad", SenseScore::new(0.0, 0.75)),
            ]
            .into_iter()
            .collect(),
        );
        let emojis = EmojiTable::from_entries([("😂", ":face_with_tears_of_joy:")]);
        Scorer::new(Box::new(polarity), Box::new(senses), Box::new(emojis))
    }

    #[test]
    fn swn() {
        let s = scorer();
        assert_eq!(s.swn_score(""), 0.0);
        assert_eq!(s.swn_score("good movie"), 0.375 / 2.0);
        assert_eq!(s.swn_score("good good"), 0.375);
        assert_eq!(s.swn_score("not good"), -0.375);
        assert_eq!(s.swn_score("the unknown"), 0.0);
    }

    #[test]
    fn emoji_names_are_scored() {
        let s = scorer();
        assert_eq!(s.emoji_score("😂"), 0.8);
        assert_eq!(s.emoji_score("🦀"), 0.0);
        assert_eq!(s.emojis_score(&["😂", "🦀"]), 0.4);
    }

    #[test]
    fn vader() {
        let s = scorer();
        assert_eq!(s.vader_score("good", &[]), 0.5);
        assert_eq!(s.vader_score("good", &["😂"]), (0.5 + 0.8) / 2.0);
        assert_eq!(s.vader_score("good", &["🦀", "🦀"]), 0.5 / 3.0);
    }

    #[test]
    fn mix() {
        let s = scorer();
        assert_eq!(s.mix_score("bad", &[], &[]), -0.75);
        assert_eq!(s.mix_score("bad", &["😂"], &[]), (-0.75 + 0.8) / 2.0);
        assert_eq!(
            s.mix_score("bad", &["😂"], &[":("]),
            ((-0.75 + 0.8) / 2.0 - 0.4) / 2.0
        );
    }

    #[test]
    fn dates() {
        assert_eq!(
            parse_datetime("wed oct 10 20:19:24 +0000 2018"),
            "2018-10-10 20:19:24+00:00"
        );
        assert_eq!(parse_datetime("yesterday"), "yesterday");
    }

    #[test]
    fn transform_keys_by_date() {
        let table = TweetTable::from_records(vec![[
            (CREATED_AT, "wed oct 10 20:19:24 +0000 2018"),
            (PLAIN_TEXT, "good movie :)"),
            (EMOJIS, "😂"),
            (EMOTICONS, ":)"),
        ]
        .into_iter()
        .collect()]);
        let out = scorer().transform_own(table).unwrap();

        assert_eq!(out.index(), Some(DATETIME));
        assert_eq!(out.columns(), &[DATETIME, SWN, VADER, MIX]);
        assert_eq!(out.column(DATETIME), vec!["2018-10-10 20:19:24+00:00"]);
        assert_eq!(out.column(SWN), vec!["0.1875"]);
    }

    #[test]
    fn transform_requires_columns() {
        let table = TweetTable::from_records(vec![[(PLAIN_TEXT, "x")].into_iter().collect()]);
        assert!(matches!(
            scorer().transform_own(table),
            Err(Error::MissingColumn(_))
        ));
    }
}
