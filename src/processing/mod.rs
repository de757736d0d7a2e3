/*! Record reconstruction

Turns a raw tweet dump into a table of original tweets:

1. [extract]: split the dump in chunks and recover labeled fields,
1. [dedup]: keep the last record of each tweet id, derive place and retweet flag,
1. [retweet]: collapse retweets into the tweets they share.
!*/
pub mod dedup;
pub mod extract;
pub mod place;
pub mod retweet;

use log::{info, warn};

use crate::error::Error;
use crate::types::TweetTable;

/// Run extraction, deduplication and retweet collapsing on a raw dump.
pub fn reconstruct(data: &str) -> Result<TweetTable, Error> {
    let extraction = extract::extract(data)?;
    let nb_chunks = extraction.nb_chunks();
    info!(
        "extracted {} records from {} chunks",
        extraction.records.len(),
        nb_chunks
    );
    if extraction.dropped > 0 {
        warn!(
            "dropped {} malformed chunks ({:.2}%)",
            extraction.dropped,
            100.0 * extraction.dropped as f64 / nb_chunks as f64
        );
    }

    let mut table = TweetTable::from_records(extraction.records);
    dedup::dedup(&mut table);
    dedup::derive_columns(&mut table);

    retweet::collapse(table)
}
