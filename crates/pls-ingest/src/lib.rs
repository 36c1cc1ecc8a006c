pub mod subjects;
pub mod table;

pub use subjects::{AgeNormalizer, ParsedSubjects, parse_subjects};
pub use table::{DataTable, Delimiter, read_table, read_table_with_delimiter};
