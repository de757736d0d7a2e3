/*! Deduplication

Removes rows sharing the same [TWEETID], keeping the last occurrence,
then derives the [PLACE] and [RETWEET] columns.
!*/
use std::collections::HashMap;

use log::info;

use crate::processing::place::find_city;
use crate::types::columns::{FALSE, PLACE, RETWEET, TEXT, TRUE, TWEETID};
use crate::types::{Record, TweetTable};

/// Retweet marker at the start of a (lower-cased) text.
const RETWEET_MARKER: &str = "rt";

/// Keep the last row of each [TWEETID], preserving relative row order.
///
/// Returns the number of removed rows.
pub fn dedup(table: &mut TweetTable) -> usize {
    let last_seen: HashMap<String, usize> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| (row.get_or_empty(TWEETID).to_string(), idx))
        .collect();

    let before = table.len();
    let mut idx = 0;
    table.retain(|row| {
        let keep = last_seen.get(row.get_or_empty(TWEETID)) == Some(&idx);
        idx += 1;
        keep
    });

    let removed = before - table.len();
    info!("removed {} duplicate rows", removed);
    removed
}

/// Check whether a text is a retweet (case-insensitive).
pub fn is_retweet(text: &str) -> bool {
    text.to_lowercase().starts_with(RETWEET_MARKER)
}

/// Replace [PLACE] with the city it contains (or nothing), and add the [RETWEET] flag.
pub fn derive_columns(table: &mut TweetTable) {
    table.derive_column(PLACE, |row: &Record| {
        find_city(row.get_or_empty(PLACE))
            .unwrap_or_default()
            .to_string()
    });
    table.derive_column(RETWEET, |row: &Record| {
        if is_retweet(row.get_or_empty(TEXT)) {
            TRUE.to_string()
        } else {
            FALSE.to_string()
        }
    });
}
