/*! Record extraction

Recovers tweet records from a raw text dump.

The dump is a sequence of chunks, each starting with the [START] sentinel.
Inside a chunk, fields are introduced by labels (`\nName : `) and run until the next label.

```text
TextTW : some tweet text
that may span lines
Tweetid : 1234
Lang : en
```

Chunks lacking a [TWEETID_LABEL] are dropped.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;
use crate::types::Record;

/// Start sentinel, also the implicit first label of every chunk.
pub const START: &str = "TextTW : ";

/// Label of the mandatory identifier field.
pub const TWEETID_LABEL: &str = "Tweetid : ";

lazy_static! {
    static ref LABEL: Regex = Regex::new(r"\n([A-Z][a-zA-Z_\-]+ : )").unwrap();
}

/// A label occurrence inside a chunk.
///
/// `start` is where the content of the previous label stops,
/// `end` is where the content of this label begins.
#[derive(Debug, Clone, PartialEq)]
struct Label<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

/// Records extracted from a dump, along with the number of dropped chunks.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub dropped: usize,
}

impl Extraction {
    /// Number of chunks found in the dump.
    pub fn nb_chunks(&self) -> usize {
        self.records.len() + self.dropped
    }
}

/// Extract records from a raw dump.
///
/// The text preceding the first [START] is discarded.
/// Fails if the dump does not contain any [START].
pub fn extract(data: &str) -> Result<Extraction, Error> {
    if !data.contains(START) {
        return Err(Error::NoSentinel(START));
    }

    let mut extraction = Extraction::default();
    for chunk in data.split(START).skip(1) {
        match parse_chunk(chunk) {
            Some(record) => extraction.records.push(record),
            None => extraction.dropped += 1,
        }
    }

    Ok(extraction)
}

/// Parse a single chunk (without its leading [START]).
///
/// Returns [None] if the chunk has no identifier label.
pub fn parse_chunk(chunk: &str) -> Option<Record> {
    let mut labels = vec![Label {
        text: START,
        start: 0,
        end: 0,
    }];
    labels.extend(LABEL.captures_iter(chunk).filter_map(|caps| {
        let whole = caps.get(0)?;
        let label = caps.get(1)?;
        Some(Label {
            text: label.as_str(),
            start: whole.start(),
            end: whole.end(),
        })
    }));

    suppress_spurious_label(&mut labels);

    if !labels.iter().any(|l| l.text == TWEETID_LABEL) {
        return None;
    }

    let mut record = Record::new();
    for (idx, label) in labels.iter().enumerate() {
        let stop = labels.get(idx + 1).map_or(chunk.len(), |next| next.start);
        record.insert(field_name(label.text), clean(&chunk[label.end..stop]));
    }

    Some(record)
}

/// Suppress spurious pre-identifier label match.
///
/// The slot right after the start sentinel belongs to the identifier.
/// When the identifier label appears later, the label at that slot is a piece of
/// tweet text that happens to look like a label, and is removed so that it stays
/// part of the text.
///
/// This is a quirk of the one dump format we read, not a general parsing rule.
fn suppress_spurious_label(labels: &mut Vec<Label>) {
    if let Some(pos) = labels.iter().position(|l| l.text == TWEETID_LABEL) {
        if pos != 1 {
            labels.remove(1);
        }
    }
}

/// Normalize a label into a field name.
///
/// `"Created-at : "` becomes `"Created_At"`, `"TextTW : "` becomes `"Texttw"`.
pub fn field_name(label: &str) -> String {
    let name = label.replace(" : ", "").replace('-', "_").to_lowercase();

    // title case: upper case after any non-letter, lower case otherwise
    let mut after_letter = false;
    let mut titled = String::with_capacity(name.len());
    for c in name.chars() {
        if after_letter {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    titled
}

/// Line breaks become spaces, trailing whitespace is removed, and the content is lower-cased.
fn clean(content: &str) -> String {
    content.replace('\n', " ").trim_end().to_lowercase()
}
