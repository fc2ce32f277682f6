//! Tabular file parsing for the import pipeline.
//!
//! Turns an uploaded CSV/TSV/XLSX buffer into a header row plus a string
//! matrix. Delimiters are sniffed from the first few lines; spreadsheet
//! cells are stringified with dates rendered as `YYYY-MM-DD`.

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use sha2::{Digest, Sha256};

use crate::errors::{ImportError, ImportResult};

/// Rows materialised when `preview_only` is set.
const PREVIEW_ROW_LIMIT: usize = 20;

#[derive(Clone, Debug, Default)]
pub struct ParseResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
    pub delimiter: Option<u8>,
    pub sheet_name: Option<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub max_rows: Option<usize>,
    pub sheet_index: usize,
    pub preview_only: bool,
}

impl ParseOptions {
    pub fn preview() -> Self {
        Self {
            preview_only: true,
            ..Self::default()
        }
    }

    fn row_limit(&self) -> usize {
        if self.preview_only {
            PREVIEW_ROW_LIMIT
        } else {
            self.max_rows.unwrap_or(usize::MAX)
        }
    }
}

/// Pick the delimiter with the highest count over the first five lines.
fn detect_delimiter(content: &str) -> u8 {
    let sample: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let mut best = b',';
    let mut best_count = 0;
    for candidate in [b',', b'\t', b';', b'|'] {
        let count = sample.bytes().filter(|b| *b == candidate).count();
        if count > best_count {
            best_count = count;
            best = candidate;
        }
    }
    best
}

pub fn parse_csv(content: &str, options: ParseOptions) -> ImportResult<ParseResult> {
    let delimiter = detect_delimiter(content);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ImportError::ParseError(e.to_string()))?;
        let row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }
        records.push(row);
    }

    if records.is_empty() {
        return Ok(ParseResult {
            delimiter: Some(delimiter),
            ..ParseResult::default()
        });
    }

    let columns = records.remove(0);
    let total_rows = records.len();
    records.truncate(options.row_limit());

    Ok(ParseResult {
        columns,
        rows: records,
        total_rows,
        delimiter: Some(delimiter),
        sheet_name: None,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.date().to_string())
            .unwrap_or_else(|| dt.to_string()),
        Data::DateTimeIso(s) => s.split('T').next().unwrap_or(s).to_string(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}

pub fn parse_excel(buffer: &[u8], options: ParseOptions) -> ImportResult<ParseResult> {
    let cursor = Cursor::new(buffer);
    let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor)
        .map_err(|e| ImportError::ParseError(format!("Failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet_name) = sheet_names
        .get(options.sheet_index)
        .or_else(|| sheet_names.first())
        .cloned()
    else {
        return Ok(ParseResult::default());
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::ParseError(format!("Failed to read sheet: {}", e)))?;

    let mut raw: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    if raw.is_empty() {
        return Ok(ParseResult {
            sheet_name: Some(sheet_name),
            ..ParseResult::default()
        });
    }

    let columns: Vec<String> = raw.remove(0).iter().map(|c| c.trim().to_string()).collect();
    let total_rows = raw.len();
    raw.truncate(options.row_limit());

    Ok(ParseResult {
        columns,
        rows: raw,
        total_rows,
        delimiter: None,
        sheet_name: Some(sheet_name),
    })
}

/// Parse an uploaded buffer, dispatching on extension and MIME type.
pub fn parse_file(
    content: &[u8],
    mime_type: &str,
    file_name: &str,
    options: ParseOptions,
) -> ImportResult<ParseResult> {
    let ext = file_name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext == "xlsx"
        || ext == "xls"
        || mime_type.contains("spreadsheet")
        || mime_type.contains("excel")
    {
        return parse_excel(content, options);
    }

    let text = String::from_utf8_lossy(content);
    parse_csv(&text, options)
}

/// Fingerprint of a file's column set, used to suggest saved mappings for
/// files with the same shape. Order-insensitive and case-insensitive.
pub fn source_hash(columns: &[String]) -> String {
    let mut normalized: Vec<String> = columns
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect();
    normalized.sort();

    let digest = Sha256::digest(normalized.join("|").as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_basic() {
        let result = parse_csv("a,b,c\n1,2,3\n4,5,6\n", ParseOptions::default()).unwrap();
        assert_eq!(result.columns, vec!["a", "b", "c"]);
        assert_eq!(result.total_rows, 2);
        assert_eq!(result.rows[1], vec!["4", "5", "6"]);
        assert_eq!(result.delimiter, Some(b','));
    }

    #[test]
    fn test_detects_semicolon_delimiter() {
        let result = parse_csv("a;b;c\n1;2;3\n", ParseOptions::default()).unwrap();
        assert_eq!(result.columns, vec!["a", "b", "c"]);
        assert_eq!(result.delimiter, Some(b';'));
    }

    #[test]
    fn test_detects_tab_delimiter() {
        let result = parse_csv("a\tb\n1\t2\n", ParseOptions::default()).unwrap();
        assert_eq!(result.delimiter, Some(b'\t'));
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let result = parse_csv("a,b,c\n1,2\n", ParseOptions::default()).unwrap();
        assert_eq!(result.rows[0], vec!["1", "2"]);
        assert_eq!(result.total_rows, 1);
    }

    #[test]
    fn test_empty_input_yields_no_columns() {
        let result = parse_csv("", ParseOptions::default()).unwrap();
        assert!(result.columns.is_empty());
        assert_eq!(result.total_rows, 0);
    }

    #[test]
    fn test_preview_caps_rows_but_reports_true_total() {
        let mut content = String::from("a\n");
        for i in 0..50 {
            content.push_str(&format!("{}\n", i));
        }
        let result = parse_csv(&content, ParseOptions::preview()).unwrap();
        assert_eq!(result.rows.len(), 20);
        assert_eq!(result.total_rows, 50);
    }

    #[test]
    fn test_skips_blank_lines() {
        let result = parse_csv("a,b\n1,2\n\n3,4\n", ParseOptions::default()).unwrap();
        assert_eq!(result.total_rows, 2);
    }

    #[test]
    fn test_source_hash_is_order_and_case_insensitive() {
        let a = source_hash(&["Date".to_string(), "hotelId".to_string()]);
        let b = source_hash(&["HOTELID".to_string(), "date".to_string()]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);

        let c = source_hash(&["date".to_string(), "occupancy".to_string()]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_spreadsheet_date_cells_render_iso() {
        use calamine::{ExcelDateTime, ExcelDateTimeType};

        // Excel serial 45306 is 2024-01-15.
        let cell = Data::DateTime(ExcelDateTime::new(45306.0, ExcelDateTimeType::DateTime, false));
        assert_eq!(cell_to_string(&cell), "2024-01-15");

        let iso = Data::DateTimeIso("2024-01-15T10:30:00".to_string());
        assert_eq!(cell_to_string(&iso), "2024-01-15");
    }

    #[test]
    fn test_parse_file_dispatches_csv_by_extension() {
        let result =
            parse_file(b"x,y\n1,2\n", "text/csv", "data.csv", ParseOptions::default()).unwrap();
        assert_eq!(result.columns, vec!["x", "y"]);
    }
}
