//! Report generation: one importable CSV per batch run, fixed column
//! whitelist, dated filename.

pub mod row;
pub mod writer;

pub use writer::{output_file_name, write_report, write_report_dated};
