//! Rule-based polarity scoring, following the VADER approach.
//!
//! Word valences come from a `vader_lexicon.txt` file (`token<TAB>mean<TAB>...`).
//! Valences are adjusted by booster words, negations, capitalization, `but`
//! and punctuation emphasis, then summed and normalized in `[-1, 1]`.
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use log::info;

use crate::error::Error;

use super::Polarity;

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const ALPHA: f64 = 15.0;

lazy_static! {
    static ref BOOSTERS: HashMap<&'static str, f64> = {
        let incr = [
            "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
            "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
            "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping",
            "flippin", "frackin", "fracking", "fricking", "frickin", "frigging", "friggin",
            "fully", "fuckin", "fucking", "fuggin", "fugging", "greatly", "hella", "highly",
            "hugely", "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
            "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
            "thoroughly", "total", "totally", "tremendous", "tremendously", "uber",
            "unbelievably", "unusually", "utter", "utterly", "very",
        ];
        let decr = [
            "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little",
            "marginal", "marginally", "occasional", "occasionally", "partly", "scarce",
            "scarcely", "slight", "slightly", "somewhat", "sorta", "sortof", "sort-of",
        ];
        incr.iter()
            .map(|w| (*w, B_INCR))
            .chain(decr.iter().map(|w| (*w, B_DECR)))
            .collect()
    };
    static ref NEGATIONS: HashSet<&'static str> = [
        "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
        "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
        "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't",
        "haven't", "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope",
        "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt",
        "werent", "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without",
        "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
    ]
    .into_iter()
    .collect();
}

/// Lexicon-backed polarity scorer.
#[derive(Debug, Clone, Default)]
pub struct Vader {
    lexicon: HashMap<String, f64>,
}

impl Vader {
    /// Load a `vader_lexicon.txt` file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let mut lexicon = HashMap::new();
        for (nb, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next();
            let valence = fields.next().and_then(|v| v.trim().parse::<f64>().ok());
            match (token, valence) {
                (Some(token), Some(valence)) => {
                    lexicon.insert(token.to_string(), valence);
                }
                _ => {
                    return Err(Error::Lexicon {
                        path: path.to_path_buf(),
                        line: nb + 1,
                    })
                }
            }
        }
        info!("loaded {} vader entries from {:?}", lexicon.len(), path);
        Ok(Self { lexicon })
    }

    /// Build a scorer from `(token, valence)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            lexicon: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Valence of the word at `idx`, adjusted by the three preceding words.
    fn valence(&self, words: &[&str], lowered: &[String], idx: usize, cap_diff: bool) -> f64 {
        let mut valence = match self.lexicon.get(&lowered[idx]) {
            Some(v) => *v,
            None => return 0.0,
        };

        if cap_diff && is_upper(words[idx]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start in 0..3 {
            if idx <= start {
                break;
            }
            let prev = idx - start - 1;
            if self.lexicon.contains_key(&lowered[prev]) {
                continue;
            }
            let mut scalar = scalar_inc_dec(words[prev], &lowered[prev], valence, cap_diff);
            match start {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => (),
            }
            valence += scalar;
            if is_negated(&lowered[prev]) {
                valence *= N_SCALAR;
            }
        }

        valence
    }
}

impl Polarity for Vader {
    fn compound(&self, text: &str) -> f64 {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let nb_upper = words.iter().filter(|w| is_upper(w)).count();
        let cap_diff = nb_upper > 0 && nb_upper < words.len();

        let mut sentiments = Vec::with_capacity(words.len());
        for (idx, word) in lowered.iter().enumerate() {
            let kind_of = word == "kind" && lowered.get(idx + 1).map(String::as_str) == Some("of");
            if BOOSTERS.contains_key(word.as_str()) || kind_of {
                sentiments.push(0.0);
            } else {
                sentiments.push(self.valence(&words, &lowered, idx, cap_diff));
            }
        }

        // sentiment before "but" is halved, after it is increased
        if let Some(but) = lowered.iter().position(|w| w == "but") {
            for (idx, s) in sentiments.iter_mut().enumerate() {
                if idx < but {
                    *s *= 0.5;
                } else if idx > but {
                    *s *= 1.5;
                }
            }
        }

        score_valence(&sentiments, text)
    }
}

/// Strip punctuation around a word, unless it leaves two characters or less (emoticons).
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// At least one cased character, and no lower case one.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn is_negated(word: &str) -> bool {
    NEGATIONS.contains(word) || word.contains("n't")
}

fn scalar_inc_dec(word: &str, lowered: &str, valence: f64, cap_diff: bool) -> f64 {
    let mut scalar = match BOOSTERS.get(lowered) {
        Some(s) => *s,
        None => return 0.0,
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_upper(word) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + questions
}

fn score_valence(sentiments: &[f64], text: &str) -> f64 {
    if sentiments.is_empty() {
        return 0.0;
    }
    let mut sum: f64 = sentiments.iter().sum();
    let emphasis = punctuation_emphasis(text);
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }

    let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);
    (compound * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vader() -> Vader {
        Vader::from_entries([("good", 1.9), ("bad", -2.5), (":)", 2.0), ("happy", 2.7)])
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn single_word() {
        assert!(close(vader().compound("good"), 0.4404));
        assert!(close(vader().compound("bad"), -0.5423));
    }

    #[test]
    fn neutral() {
        assert_eq!(vader().compound(""), 0.0);
        assert_eq!(vader().compound("a table"), 0.0);
    }

    #[test]
    fn negation() {
        assert!(close(vader().compound("not good"), -0.3412));
        assert!(vader().compound("isn't good") < 0.0);
    }

    #[test]
    fn boosters_and_emphasis() {
        let v = vader();
        assert!(v.compound("very good") > v.compound("good"));
        assert!(v.compound("slightly good") < v.compound("good"));
        assert!(v.compound("good!!!") > v.compound("good"));
        assert!(v.compound("GOOD day") > v.compound("good day"));
    }

    #[test]
    fn but_shifts_weight() {
        assert!(vader().compound("good but bad") < 0.0);
        assert!(vader().compound("bad but good") > 0.0);
    }

    #[test]
    fn punctuation_kept_for_emoticons() {
        assert!(vader().compound(":)") > 0.0);
        assert!(close(vader().compound("good."), vader().compound("good")));
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vader_lexicon.txt");
        std::fs::write(&path, "good\t1.9\t0.9\t[2, 2]\n\nbad\t-2.5\t0.7\t[-3]\n").unwrap();
        let v = Vader::from_path(&path).unwrap();
        assert_eq!(v.len(), 2);

        std::fs::write(&path, "good\tnope\n").unwrap();
        assert!(matches!(
            Vader::from_path(&path),
            Err(Error::Lexicon { line: 1, .. })
        ));
    }
}
