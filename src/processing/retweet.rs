/*! Retweet collapsing

Retweets of a same tweet are merged into a single record standing for the original tweet.

- retweets are grouped by text (the text still carries its `rt @handle: ` prefix),
- the last retweet of a group is kept, with missing values set to empty strings,
- the prefix is removed from its text,
- author-scoped fields (`*_Author`) override their generic counterpart when they are not empty.

Retweets are then replaced by the merged records, author-scoped columns are dropped
and the table is indexed by [TWEETID].
!*/
use itertools::Itertools;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;

use crate::error::Error;
use crate::types::columns::{CREATED_AT, RETWEET, TEXT, TRUE, TWEETID};
use crate::types::{Record, TweetTable};

/// Suffix of fields describing the original author of a retweeted tweet.
pub const AUTHOR_SUFFIX: &str = "_Author";

lazy_static! {
    static ref RETWEET_PREFIX: Regex = Regex::new(r"(?i)^rt\s@\w+:\s").unwrap();
}

/// Remove a leading `rt @handle: ` marker.
pub fn strip_retweet_prefix(text: &str) -> String {
    RETWEET_PREFIX.replace(text, "").into_owned()
}

/// Copy every non-empty `*_Author` field onto the field without suffix.
pub fn promote_author_fields(record: &mut Record) {
    let promoted: Vec<(String, String)> = record
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(name, value)| {
            name.strip_suffix(AUTHOR_SUFFIX)
                .map(|base| (base.to_string(), value.to_string()))
        })
        .collect();

    for (name, value) in promoted {
        record.insert(name, value);
    }
}

/// Merge a group of retweets sharing `text`.
fn merge_group(text: &str, group: &[&Record], columns: &[String]) -> Option<Record> {
    let last = group.last()?;

    let mut merged: Record = columns
        .iter()
        .map(|c| (c.as_str(), last.get_or_empty(c)))
        .collect();
    merged.insert(TEXT, strip_retweet_prefix(text));
    promote_author_fields(&mut merged);

    Some(merged)
}

/// Collapse retweets into original tweets, and index the table by [TWEETID].
pub fn collapse(mut table: TweetTable) -> Result<TweetTable, Error> {
    let merged: Vec<Record> = table
        .rows()
        .iter()
        .filter(|row| row.get(RETWEET) == Some(TRUE))
        .map(|row| (row.get_or_empty(TEXT), row))
        .into_group_map()
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .filter_map(|(text, group)| merge_group(text, &group, table.columns()))
        .collect();

    info!("collapsed retweets into {} tweets", merged.len());
    for record in merged.iter().filter(|r| r.get_or_empty(CREATED_AT).is_empty()) {
        warn!(
            "merged retweet {} has no creation date",
            record.get_or_empty(TWEETID)
        );
    }

    table.retain(|row| row.get(RETWEET) != Some(TRUE));
    for record in merged {
        table.push(record);
    }

    table.drop_columns(|c| c.ends_with(AUTHOR_SUFFIX));
    // every chunk was dropped: keep a header-only table
    if table.is_empty() && !table.has_column(TWEETID) {
        table.derive_column(TWEETID, |_| String::new());
    }
    table.ensure_unique(TWEETID)?;
    table.set_index(TWEETID)?;

    Ok(table)
}
