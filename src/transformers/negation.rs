//! Negation scope marking.
//!
//! Words following a negation get a [NEG_SUFFIX] until the end of the clause
//! (a lone `.`, `:`, `;`, `!` or `?` token). Negation words themselves are not marked,
//! except when they appear inside a scope that is already open.
use lazy_static::lazy_static;
use regex::Regex;

pub const NEG_SUFFIX: &str = "_NEG";

lazy_static! {
    static ref NEGATION: Regex = Regex::new(
        r"(?x)
        (?:^(?:never|no|nothing|nowhere|noone|none|not|
            havent|hasnt|hadnt|cant|couldnt|shouldnt|
            wont|wouldnt|dont|doesnt|didnt|isnt|arent|aint)$)
        |
        n't"
    )
    .unwrap();
    static ref CLAUSE_PUNCT: Regex = Regex::new(r"^[.:;!?]$").unwrap();
}

pub fn mark_negation(words: &[&str]) -> Vec<String> {
    let mut in_scope = false;
    words
        .iter()
        .map(|word| {
            if NEGATION.is_match(word) {
                if in_scope {
                    return format!("{}{}", word, NEG_SUFFIX);
                }
                in_scope = true;
            } else if CLAUSE_PUNCT.is_match(word) {
                in_scope = false;
            } else if in_scope {
                return format!("{}{}", word, NEG_SUFFIX);
            }
            word.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::mark_negation;

    #[test]
    fn scope_until_punctuation() {
        let words = ["i", "don't", "like", "it", ".", "but", "fine"];
        assert_eq!(
            mark_negation(&words),
            vec!["i", "don't", "like_NEG", "it_NEG", ".", "but", "fine"]
        );
    }

    #[test]
    fn second_negation_is_marked() {
        let words = ["not", "never", "good"];
        assert_eq!(mark_negation(&words), vec!["not", "never_NEG", "good_NEG"]);
    }

    #[test]
    fn no_negation() {
        assert_eq!(mark_negation(&["nothingness"]), vec!["nothingness"]);
    }
}
