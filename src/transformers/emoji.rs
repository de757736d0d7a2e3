//! Emoji extraction.
//!
//! An emoji is a grapheme cluster holding a pictographic or regional indicator
//! code point, so that skin tones, ZWJ sequences and flags stay whole.
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref PICTOGRAPHIC: Regex =
        Regex::new(r"[\p{Extended_Pictographic}\p{Regional_Indicator}]").unwrap();
}

/// Split `text` into its emojis and the remaining text.
pub fn find_emojis(text: &str) -> (String, Vec<String>) {
    let mut rest = String::with_capacity(text.len());
    let mut emojis = Vec::new();
    for grapheme in text.graphemes(true) {
        if PICTOGRAPHIC.is_match(grapheme) {
            emojis.push(grapheme.to_string());
        } else {
            rest.push_str(grapheme);
        }
    }
    (rest, emojis)
}

#[cfg(test)]
mod tests {
    use super::find_emojis;

    #[test]
    fn extracts_in_order() {
        let (rest, emojis) = find_emojis("so funny 😂 love it ❤️!");
        assert_eq!(rest, "so funny  love it !");
        assert_eq!(emojis, vec!["😂", "❤️"]);
    }

    #[test]
    fn sequences_stay_whole() {
        let (_, emojis) = find_emojis("👍🏽 🇫🇷 👨‍👩‍👧");
        assert_eq!(emojis, vec!["👍🏽", "🇫🇷", "👨‍👩‍👧"]);
    }

    #[test]
    fn none() {
        let (rest, emojis) = find_emojis("plain text: 42 #tag");
        assert_eq!(rest, "plain text: 42 #tag");
        assert!(emojis.is_empty());
    }
}
