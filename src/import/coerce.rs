//! Shared cell coercion for the validation and commit stages.
//!
//! Both stages parse the same file with the same mapping, so the type rules
//! live here once: a cell is coerced according to the target field's kind
//! (date, number, integer, text) and the result is collected into a
//! [`Record`] plus any per-cell errors.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::schema::{field_kind, FieldKind};

/// A coerced cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Date(NaiveDate),
    Number(f64),
    Int(i64),
    Text(String),
    Null,
}

impl Value {
    /// Required-field presence check. Numeric zero counts as present;
    /// empty text and null do not.
    pub fn satisfies_required(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Text(s) => !s.is_empty(),
            Value::Date(_) | Value::Number(_) | Value::Int(_) => true,
        }
    }
}

/// One row's worth of coerced fields, keyed by target field name.
#[derive(Clone, Debug, Default)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn set(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        match self.fields.get(field) {
            Some(Value::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        match self.fields.get(field) {
            Some(Value::Number(n)) => Some(*n),
            Some(Value::Int(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn int(&self, field: &str) -> Option<i32> {
        match self.fields.get(field) {
            Some(Value::Int(i)) => Some(*i as i32),
            Some(Value::Number(n)) => Some(*n as i32),
            _ => None,
        }
    }

    /// Non-empty text for `field`, if any.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field) {
            Some(Value::Text(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// First field in `names` carrying a number.
    pub fn first_number(&self, names: &[&str]) -> Option<f64> {
        names.iter().find_map(|n| self.number(n))
    }

    /// First field in `names` carrying an integer.
    pub fn first_int(&self, names: &[&str]) -> Option<i32> {
        names.iter().find_map(|n| self.int(n))
    }

    /// First field in `names` carrying non-empty text.
    pub fn first_text(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|n| self.text(n))
    }

    pub fn satisfies_required(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .map(Value::satisfies_required)
            .unwrap_or(false)
    }

    /// JSON view used for validation previews. Dates render `YYYY-MM-DD`.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    Value::Date(d) => serde_json::Value::String(d.to_string()),
                    Value::Number(n) => serde_json::json!(n),
                    Value::Int(i) => serde_json::json!(i),
                    Value::Text(s) => serde_json::Value::String(s.clone()),
                    Value::Null => serde_json::Value::Null,
                };
                (k.clone(), value)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

/// A coercion failure for a single cell.
#[derive(Clone, Debug)]
pub struct CellError {
    pub column: String,
    pub message: String,
}

static DATE_FALLBACKS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap(),
        Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").unwrap(),
        Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$").unwrap(),
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap(),
    ]
});

/// Parse a date cell. ISO forms are tried first, then four fallback
/// patterns (`M/D/YYYY`, `M-D-YYYY`, `YYYY/M/D`, `YYYY-M-D`), with the
/// year position decided by which segment is four digits wide.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(cleaned, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(cleaned) {
        return Some(dt.date_naive());
    }

    for regex in DATE_FALLBACKS.iter() {
        let Some(caps) = regex.captures(cleaned) else {
            continue;
        };
        let parts: Vec<u32> = (1..=3).filter_map(|i| caps[i].parse().ok()).collect();
        let [a, b, c] = parts[..] else { continue };
        let (year, month, day) = if caps[1].len() == 4 {
            (a, b, c)
        } else if caps[3].len() == 4 {
            (c, a, b)
        } else {
            continue;
        };
        if let Some(d) = NaiveDate::from_ymd_opt(year as i32, month, day) {
            return Some(d);
        }
    }

    None
}

/// Parse a number cell, tolerating `$`, thousands separators, and
/// whitespace padding.
pub fn parse_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Coerce one raw row into a [`Record`] using the column mapping.
///
/// Cells mapped to `__ignore__` are skipped, as are mapping entries whose
/// source column is absent from the file. Date and number failures are
/// reported only for non-empty cells; blank integer cells coerce silently
/// to null. Rows shorter than the header are padded with empty strings.
pub fn coerce_row(
    columns: &[String],
    row: &[String],
    column_to_field: &HashMap<String, String>,
) -> (Record, Vec<CellError>) {
    let mut record = Record::default();
    let mut errors = Vec::new();

    for (col_name, field_name) in column_to_field {
        if field_name == "__ignore__" || field_name.is_empty() {
            continue;
        }
        let Some(col_index) = columns.iter().position(|c| c == col_name) else {
            continue;
        };
        let raw = row.get(col_index).map(String::as_str).unwrap_or("");

        match field_kind(field_name) {
            FieldKind::Date => match parse_date(raw) {
                Some(d) => record.set(field_name, Value::Date(d)),
                None => {
                    if !raw.trim().is_empty() {
                        errors.push(CellError {
                            column: col_name.clone(),
                            message: format!("Invalid date format: \"{}\"", raw),
                        });
                    }
                    record.set(field_name, Value::Null);
                }
            },
            FieldKind::Number => match parse_number(raw) {
                Some(n) => record.set(field_name, Value::Number(n)),
                None => {
                    if !raw.trim().is_empty() {
                        errors.push(CellError {
                            column: col_name.clone(),
                            message: format!("Invalid number: \"{}\"", raw),
                        });
                    }
                    record.set(field_name, Value::Null);
                }
            },
            FieldKind::Integer => {
                let trimmed = raw.trim();
                match trimmed.parse::<i64>() {
                    Ok(i) if !trimmed.is_empty() => record.set(field_name, Value::Int(i)),
                    _ => record.set(field_name, Value::Null),
                }
            }
            FieldKind::Text => record.set(field_name, Value::Text(raw.trim().to_string())),
        }
    }

    (record, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_iso() {
        let d = parse_date("2024-01-15").expect("ISO date");
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let d = parse_date("2024-01-15T10:30:00Z").expect("RFC 3339 date");
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_fallback_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("1/15/2024"), Some(expected));
        assert_eq!(parse_date("1-15-2024"), Some(expected));
        assert_eq!(parse_date("2024/1/15"), Some(expected));
        assert_eq!(parse_date("2024-1-15"), Some(expected));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("13/45/2024"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("1/2/24"), None);
    }

    #[test]
    fn test_parse_number_strips_formatting() {
        assert_eq!(parse_number("$1,234.50"), Some(1234.5));
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("-3.25"), Some(-3.25));
        assert_eq!(parse_number("bad"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_zero_satisfies_required() {
        assert!(Value::Number(0.0).satisfies_required());
        assert!(Value::Int(0).satisfies_required());
        assert!(!Value::Null.satisfies_required());
        assert!(!Value::Text(String::new()).satisfies_required());
        assert!(Value::Text("x".to_string()).satisfies_required());
    }

    #[test]
    fn test_coerce_row_collects_cell_errors() {
        let columns = vec!["date".to_string(), "hotelId".to_string(), "occupancy".to_string()];
        let mapping: HashMap<String, String> = [
            ("date".to_string(), "date".to_string()),
            ("hotelId".to_string(), "hotelId".to_string()),
            ("occupancy".to_string(), "occupancy".to_string()),
        ]
        .into();

        let row = vec!["13/45/2024".to_string(), "5".to_string(), "bad".to_string()];
        let (record, errors) = coerce_row(&columns, &row, &mapping);

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.column == "date"));
        assert!(errors.iter().any(|e| e.column == "occupancy"));
        assert_eq!(record.int("hotelId"), Some(5));
    }

    #[test]
    fn test_coerce_row_tolerates_ragged_rows() {
        let columns = vec!["name".to_string(), "notes".to_string()];
        let mapping: HashMap<String, String> = [
            ("name".to_string(), "name".to_string()),
            ("notes".to_string(), "notes".to_string()),
        ]
        .into();

        let row = vec!["Acme".to_string()];
        let (record, errors) = coerce_row(&columns, &row, &mapping);

        assert!(errors.is_empty());
        assert_eq!(record.text("name"), Some("Acme".to_string()));
        assert_eq!(record.text("notes"), None);
    }

    #[test]
    fn test_blank_integer_is_silent_null() {
        let columns = vec!["ventureId".to_string()];
        let mapping: HashMap<String, String> =
            [("ventureId".to_string(), "ventureId".to_string())].into();

        let (record, errors) = coerce_row(&columns, &[String::new()], &mapping);
        assert!(errors.is_empty());
        assert_eq!(record.get("ventureId"), Some(&Value::Null));
    }
}
