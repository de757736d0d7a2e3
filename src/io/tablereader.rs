//! CSV table reader.
//!
//! Reads a [TweetTable] previously written by [super::write_table]:
//! the first column is taken as the index, and empty cells are missing values.
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::types::{Record, TweetTable};

/// Read a table from a CSV file, using the first column as index.
pub fn read_table(src: &Path) -> Result<TweetTable, Error> {
    debug!("reading table from {:?}", src);
    let reader = csv::ReaderBuilder::new().from_path(src)?;
    from_reader(reader)
}

/// Read a table from any CSV source (see [read_table]).
pub fn read_table_from<R: Read>(src: R) -> Result<TweetTable, Error> {
    let reader = csv::ReaderBuilder::new().from_reader(src);
    from_reader(reader)
}

fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<TweetTable, Error> {
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let mut table = TweetTable::new(headers.clone());

    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        table.push(record);
    }
    table.index_first_column();

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::read_table_from;

    #[test]
    fn first_column_is_index() {
        let data = "Tweetid,Texttw,Place\n1,hello,\n2,world,paris\n";
        let t = read_table_from(data.as_bytes()).unwrap();
        assert_eq!(t.index(), Some("Tweetid"));
        assert_eq!(t.columns(), &["Tweetid", "Texttw", "Place"]);
        assert_eq!(t.rows()[0].get("Place"), None);
        assert_eq!(t.rows()[1].get("Place"), Some("paris"));
    }

    #[test]
    fn ragged_rows_fail() {
        let data = "Tweetid,Texttw\n1,hello,extra\n";
        assert!(read_table_from(data.as_bytes()).is_err());
    }
}
