use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
    #[error("Malformed quoting on line {line}")]
    MalformedQuote { line: usize },
    #[error("Invalid number on line {line}: {text}")]
    InvalidNumber { line: usize, text: String },
    #[error("Invalid JSON catalog: {0}")]
    Json(String),
}

/// A catalog entry as read from a file, before cleaning.
///
/// Fields that are missing or empty in the source are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line (CSV) or array index (JSON) the record came from
    pub position: usize,
    pub name: Option<String>,
    pub calories: Option<i64>,
    pub price: Option<i64>,
}

impl RawRecord {
    pub fn new(position: usize, name: &str, calories: i64, price: i64) -> Self {
        Self {
            position,
            name: Some(name.to_string()),
            calories: Some(calories),
            price: Some(price),
        }
    }
}

#[derive(Deserialize)]
struct JsonRecord {
    name: Option<String>,
    calories: Option<f64>,
    price: Option<f64>,
}

/// Fractional values are truncated toward zero
pub(crate) fn truncate(value: f64) -> Option<i64> {
    if value.is_nan() {
        None
    } else {
        Some(value.trunc() as i64)
    }
}

/// Read a JSON array of `{ "name", "calories", "price" }` objects
pub fn read_json(source: &str) -> Result<Vec<RawRecord>, ReadError> {
    let entries: Vec<JsonRecord> =
        serde_json::from_str(source).map_err(|e| ReadError::Json(e.to_string()))?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RawRecord {
            position: i + 1,
            name: entry.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            calories: entry.calories.and_then(truncate),
            price: entry.price.and_then(truncate),
        })
        .collect())
}
