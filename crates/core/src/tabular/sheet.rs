use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use csv::ReaderBuilder;

use crate::errors::CoreError;

/// A single parsed cell. Numbers stay numeric so spreadsheet date serials
/// survive until the importer decides what the column means.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// A tabular file reduced to a header row plus data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Pick a parser from the file name; anything that is not `.xlsx` is
    /// treated as delimited text.
    pub fn from_file_bytes(file_name: &str, data: &[u8]) -> Result<Self, CoreError> {
        if file_name.to_lowercase().ends_with(".xlsx") {
            Self::from_xlsx_bytes(data)
        } else {
            Self::from_csv_bytes(data)
        }
    }

    /// Parse delimited text. Portuguese bank exports commonly use `;`, so
    /// the delimiter is sniffed from the header line.
    pub fn from_csv_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(sniff_delimiter(data))
            .from_reader(data);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|field| {
                        let field = field.trim();
                        if field.is_empty() {
                            Cell::Empty
                        } else {
                            Cell::Text(field.to_string())
                        }
                    })
                    .collect(),
            );
        }

        Ok(Self { headers, rows })
    }

    /// Parse the first worksheet of an xlsx workbook.
    pub fn from_xlsx_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let mut workbook = Xlsx::new(Cursor::new(data))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| CoreError::Spreadsheet("Workbook has no sheets".into()))??;

        let mut row_iter = range.rows();
        let headers = match row_iter.next() {
            Some(row) => row.iter().map(header_text).collect(),
            None => Vec::new(),
        };
        let rows = row_iter
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    /// Lower-cased header set used by the import classifier.
    #[must_use]
    pub fn headers_lower(&self) -> Vec<String> {
        self.headers.iter().map(|h| h.to_lowercase()).collect()
    }
}

fn sniff_delimiter(data: &[u8]) -> u8 {
    let first_line = data.split(|b| *b == b'\n').next().unwrap_or(data);
    if first_line.contains(&b';') && !first_line.contains(&b',') {
        b';'
    } else {
        b','
    }
}

fn header_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.to_string())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        // Date cells come back as their underlying serial number; the
        // importer converts serials when the column is a date.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
