//! Transform trait.

use crate::error::Error;
use crate::types::TweetTable;

pub trait Transform {
    /// Takes ownership of [TweetTable] and returns it, with added/replaced columns.
    fn transform_own(&self, table: TweetTable) -> Result<TweetTable, Error>;
}
