/*! SentiWordNet lexicon

Reads a `SentiWordNet_3.0.0.txt` file:

```text
# POS	ID	PosScore	NegScore	SynsetTerms	Gloss
a	00001740	0.125	0	able#1	(usually followed by `to') having the necessary means...
```

Words are looked up the way WordNet does: parts of speech are tried in order
(noun, verb, adjective, adverb) and inflected forms are reduced with WordNet's
detachment rules. The first sense of the first matching part of speech wins.

Since the file lists every WordNet lemma, it also backs a noun [Lemmatizer].
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Error;

use super::{Lemmatizer, SenseLexicon, SenseScore};

const NB_POS: usize = 4;
const NOUN: usize = 0;

/// Detachment rules, per part of speech (noun, verb, adjective, adverb).
const SUBSTITUTIONS: [&[(&str, &str)]; NB_POS] = [
    &[
        ("s", ""),
        ("ses", "s"),
        ("ves", "f"),
        ("xes", "x"),
        ("zes", "z"),
        ("ches", "ch"),
        ("shes", "sh"),
        ("men", "man"),
        ("ies", "y"),
    ],
    &[
        ("s", ""),
        ("ies", "y"),
        ("es", "e"),
        ("es", ""),
        ("ed", "e"),
        ("ed", ""),
        ("ing", "e"),
        ("ing", ""),
    ],
    &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
    &[],
];

/// Map a SentiWordNet POS tag to a part of speech slot.
/// Satellite adjectives (`s`) are adjectives.
fn pos_slot(tag: &str) -> Option<usize> {
    match tag {
        "n" => Some(0),
        "v" => Some(1),
        "a" | "s" => Some(2),
        "r" => Some(3),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
struct Sense {
    number: u32,
    score: SenseScore,
}

#[derive(Debug, Clone, Default)]
pub struct SentiWordNet {
    senses: HashMap<String, [Option<Sense>; NB_POS]>,
}

impl SentiWordNet {
    /// Load a SentiWordNet file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let mut swn = Self::default();
        for (nb, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let malformed = || Error::Lexicon {
                path: path.to_path_buf(),
                line: nb + 1,
            };

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 5 {
                return Err(malformed());
            }
            let pos = pos_slot(fields[0]).ok_or_else(malformed)?;
            let pos_score = fields[2].trim().parse::<f64>().map_err(|_| malformed())?;
            let neg_score = fields[3].trim().parse::<f64>().map_err(|_| malformed())?;
            let score = SenseScore::new(pos_score, neg_score);

            for term in fields[4].split_whitespace() {
                let (word, number) = term
                    .rsplit_once('#')
                    .and_then(|(w, n)| n.parse::<u32>().ok().map(|n| (w, n)))
                    .ok_or_else(malformed)?;
                swn.insert(word, pos, number, score);
            }
        }
        info!("loaded {} sentiwordnet lemmas from {:?}", swn.len(), path);
        Ok(swn)
    }

    /// Register sense `number` of `word` for part of speech `pos`
    /// (0: noun, 1: verb, 2: adjective, 3: adverb).
    ///
    /// Only the lowest sense number is kept.
    pub fn insert(&mut self, word: &str, pos: usize, number: u32, score: SenseScore) {
        if pos >= NB_POS {
            return;
        }
        let slots = self
            .senses
            .entry(word.to_lowercase())
            .or_insert([None; NB_POS]);
        match slots[pos] {
            Some(sense) if sense.number <= number => (),
            _ => slots[pos] = Some(Sense { number, score }),
        }
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    fn sense(&self, form: &str, pos: usize) -> Option<Sense> {
        self.senses.get(form).and_then(|slots| slots[pos])
    }

    /// Forms of `word` known for `pos`: the word itself, then detached forms.
    fn forms(&self, word: &str, pos: usize) -> Vec<String> {
        let mut forms = vec![word.to_string()];
        for (suffix, ending) in SUBSTITUTIONS[pos] {
            if let Some(stem) = word.strip_suffix(suffix) {
                forms.push(format!("{}{}", stem, ending));
            }
        }

        let mut known: Vec<String> = Vec::with_capacity(forms.len());
        for form in forms {
            if self.sense(&form, pos).is_some() && !known.contains(&form) {
                known.push(form);
            }
        }
        known
    }
}

impl SenseLexicon for SentiWordNet {
    fn first_sense(&self, word: &str) -> Option<SenseScore> {
        let word = word.to_lowercase().replace(' ', "_");
        (0..NB_POS).find_map(|pos| {
            self.forms(&word, pos)
                .first()
                .and_then(|form| self.sense(form, pos))
                .map(|sense| sense.score)
        })
    }
}

impl Lemmatizer for SentiWordNet {
    /// Shortest known noun form, or the word itself.
    fn lemmatize(&self, word: &str) -> String {
        self.forms(word, NOUN)
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "# SentiWordNet
a\t00001740\t0.125\t0\table#1 good#4\tgloss
n\t00002000\t0.5\t0.125\tgood#1 goodness#1\tgloss
a\t00003000\t0.75\t0\tgood#1\tgloss
n\t00004000\t0\t0.625\tdog#1\tgloss
v\t00005000\t0\t0.25\trun#1\tgloss
n\t00006000\t0.25\t0\tdog#2 hot_dog#1\tgloss
";

    fn swn() -> SentiWordNet {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swn.txt");
        std::fs::write(&path, DATA).unwrap();
        SentiWordNet::from_path(&path).unwrap()
    }

    #[test]
    fn noun_before_adjective() {
        assert_eq!(swn().first_sense("good"), Some(SenseScore::new(0.5, 0.125)));
    }

    #[test]
    fn lowest_sense_wins() {
        assert_eq!(swn().first_sense("dog"), Some(SenseScore::new(0.0, 0.625)));
    }

    #[test]
    fn inflected_forms() {
        let swn = swn();
        assert_eq!(swn.first_sense("dogs"), Some(SenseScore::new(0.0, 0.625)));
        assert_eq!(swn.first_sense("runs"), Some(SenseScore::new(0.0, 0.25)));
        assert_eq!(swn.first_sense("hot dog"), Some(SenseScore::new(0.25, 0.0)));
        assert_eq!(swn.first_sense("cat"), None);
    }

    #[test]
    fn noun_lemmas() {
        let swn = swn();
        assert_eq!(swn.lemmatize("dogs"), "dog");
        assert_eq!(swn.lemmatize("runs"), "runs");
        assert_eq!(swn.lemmatize("cats"), "cats");
    }

    #[test]
    fn malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swn.txt");
        std::fs::write(&path, "# header\nn\t1\tx\t0\tdog#1\tgloss\n").unwrap();
        assert!(matches!(
            SentiWordNet::from_path(&path),
            Err(Error::Lexicon { line: 2, .. })
        ));
    }
}
