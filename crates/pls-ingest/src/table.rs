//! Delimited table reading.
//!
//! Input files come out of data-capture exports with inconsistent
//! whitespace, the occasional UTF-8 BOM, and trailing blank lines, so
//! every header and cell is normalized on the way in.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

/// A fully loaded table: normalized headers plus string rows padded or
/// truncated to the header width.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Field delimiter, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Pick a delimiter from the file extension. Spreadsheet formats
    /// are rejected up front rather than mis-parsed as text.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Delimiter::Comma),
            "tsv" | "txt" => Ok(Delimiter::Tab),
            "xlsx" | "xls" => bail!(
                "spreadsheet input is not supported: export {} as CSV first",
                path.display()
            ),
            other => bail!("unsupported input extension {other:?}: {}", path.display()),
        }
    }

    fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file with the delimiter inferred from its
/// extension. The first non-blank record is the header.
pub fn read_table(path: &Path) -> Result<DataTable> {
    let delimiter = Delimiter::from_path(path)?;
    read_table_with_delimiter(path, delimiter)
}

pub fn read_table_with_delimiter(path: &Path, delimiter: Delimiter) -> Result<DataTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.byte())
        .from_path(path)
        .with_context(|| format!("read table: {}", path.display()))?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let raw: Vec<String> = record.iter().map(normalize_cell).collect();
        if raw.iter().all(|value| value.is_empty()) {
            continue;
        }
        match headers.as_ref() {
            None => {
                headers = Some(raw.iter().map(|value| normalize_header(value)).collect());
            }
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for idx in 0..header_row.len() {
                    row.push(raw.get(idx).cloned().unwrap_or_default());
                }
                rows.push(row);
            }
        }
    }

    Ok(DataTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}
