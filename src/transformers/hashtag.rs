//! Camel case hashtag splitting.

/// Split a camel case hashtag (without `#`) into words.
///
/// A word ends before an upper case letter following a lower case one,
/// and before the last capital of an acronym followed by a lower case letter:
/// `"NewYorkNYCMarathon"` gives `["New", "York", "NYC", "Marathon"]`.
pub fn split_hashtag(hashtag: &str) -> Vec<String> {
    let chars: Vec<char> = hashtag.chars().collect();
    let mut words = Vec::new();
    let mut word = String::new();

    for (idx, c) in chars.iter().enumerate() {
        if idx > 0 && !word.is_empty() {
            let prev = chars[idx - 1];
            let next = chars.get(idx + 1);
            let lower_upper = prev.is_ascii_lowercase() && c.is_ascii_uppercase();
            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && next.map_or(false, char::is_ascii_lowercase);
            if lower_upper || acronym_end {
                words.push(std::mem::take(&mut word));
            }
        }
        word.push(*c);
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::split_hashtag;

    #[test]
    fn camel_case() {
        assert_eq!(split_hashtag("NewYork"), vec!["New", "York"]);
        assert_eq!(
            split_hashtag("NewYorkNYCMarathon"),
            vec!["New", "York", "NYC", "Marathon"]
        );
    }

    #[test]
    fn lower_case() {
        assert_eq!(split_hashtag("newyork"), vec!["newyork"]);
        assert_eq!(split_hashtag("iPhone"), vec!["i", "Phone"]);
        assert!(split_hashtag("").is_empty());
    }
}
