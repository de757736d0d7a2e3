//! Tweet table.
//!
//! An ordered collection of [Record]s sharing a column set.
//! The column order is the order in which fields first appeared.
//! A table can be indexed by one of its columns, in which case that
//! column is written first (see [crate::io]).
use std::collections::HashSet;

use crate::error::Error;

use super::Record;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TweetTable {
    columns: Vec<String>,
    rows: Vec<Record>,
    index: Option<String>,
}

impl TweetTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            index: None,
        }
    }

    /// Build a table from records.
    /// Columns are the union of record fields, in first-appearance order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut table = Self::default();
        for record in records {
            table.push(record);
        }
        table
    }

    /// Append a row, extending the column set if needed.
    pub fn push(&mut self, record: Record) {
        for name in record.names() {
            if !self.columns.iter().any(|c| c == name) {
                self.columns.push(name.to_string());
            }
        }
        self.rows.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get the index column name, if the table is indexed.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Fail with [Error::MissingColumn] on the first absent column.
    pub fn require(&self, names: &[&str]) -> Result<(), Error> {
        match names.iter().find(|name| !self.has_column(name)) {
            Some(name) => Err(Error::MissingColumn(name.to_string())),
            None => Ok(()),
        }
    }

    /// Values of `name`, with missing values as empty strings.
    pub fn column(&self, name: &str) -> Vec<&str> {
        self.rows.iter().map(|r| r.get_or_empty(name)).collect()
    }

    /// Set (or add) a column by computing a value for each row.
    pub fn derive_column<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&Record) -> String,
    {
        for row in self.rows.iter_mut() {
            let value = f(row);
            row.insert(name, value);
        }
        self.add_column(name);
    }

    /// Set (or add) a column from precomputed values, one per row.
    pub fn insert_column(&mut self, name: &str, values: Vec<String>) -> Result<(), Error> {
        if values.len() != self.rows.len() {
            return Err(Error::Custom(format!(
                "column {:?} has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(name, value);
        }
        self.add_column(name);
        Ok(())
    }

    fn add_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    /// Remove every column matching `predicate`, from the schema and from rows.
    pub fn drop_columns<P>(&mut self, predicate: P)
    where
        P: Fn(&str) -> bool,
    {
        let dropped: Vec<String> = self
            .columns
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect();
        self.columns.retain(|c| !predicate(c));
        for row in self.rows.iter_mut() {
            for name in &dropped {
                row.remove(name);
            }
        }
    }

    /// Keep only rows matching `predicate`, preserving their order.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&Record) -> bool,
    {
        self.rows.retain(predicate);
    }

    /// Keep only the first `n` rows.
    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    /// Fail with [Error::DuplicateTweetid] if two rows share a value of `name`.
    pub fn ensure_unique(&self, name: &str) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(self.rows.len());
        for value in self.column(name) {
            if !seen.insert(value) {
                return Err(Error::DuplicateTweetid(value.to_string()));
            }
        }
        Ok(())
    }

    /// Index the table by `name`, moving the column in first position.
    pub fn set_index(&mut self, name: &str) -> Result<(), Error> {
        let pos = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
        let column = self.columns.remove(pos);
        self.columns.insert(0, column);
        self.index = Some(name.to_string());
        Ok(())
    }

    /// Mark the first column as the index, as is the case when reading back a
    /// table that has been written with its index.
    pub(crate) fn index_first_column(&mut self) {
        self.index = self.columns.first().cloned();
    }
}
