/*!
# IO utilities

Tabular data saving and loading.

Every stage reads a CSV table and writes a new one. Tables written with an index
are read back with that index as the first column.
!*/
mod tablereader;
mod tablewriter;

pub use tablereader::{read_table, read_table_from};
pub use tablewriter::{write_table, write_table_to};
