/*! Tweet types.

A [TweetTable] is an ordered list of [Record]s, with well-known column names in [columns].
!*/
pub mod columns;
mod record;
mod table;

pub use record::Record;
pub use table::TweetTable;
