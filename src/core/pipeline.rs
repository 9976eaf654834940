use crate::core::{ConfigProvider, FieldValue, Pipeline, Record, Storage};
use crate::utils::error::{ConvertError, Result};
use serde_json::Number;
use std::str::FromStr;

pub const QUANTITY_FIELD: &str = "quantity";
pub const IS_PROMO_FIELD: &str = "is_promo";

/// Reads a comma-delimited file, coerces `quantity` and `is_promo`, and
/// renders the records as a pretty-printed JSON array.
pub struct CsvJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvJsonPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        tracing::debug!("Reading input file: {}", path.display());
        let data = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", data.len());

        parse_records(&data)
    }

    fn transform(&self, mut data: Vec<Record>) -> Result<Vec<Record>> {
        for record in data.iter_mut() {
            coerce_record(record)?;
        }
        Ok(data)
    }

    fn load(&self, data: &[Record]) -> Result<String> {
        let document = serde_json::to_string_pretty(data)?;
        Ok(document)
    }
}

/// Parses delimited text whose first row is the header.
///
/// Rows shorter than the header get [`FieldValue::Missing`] for the absent
/// trailing columns. Empty values past the last header column (a trailing
/// comma) are dropped; any other extra value rejects the row.
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    tracing::debug!("Header fields: {:?}", headers);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();

        if row.iter().skip(headers.len()).any(|value| !value.is_empty()) {
            return Err(ConvertError::RaggedRowError {
                line,
                expected: headers.len(),
                found: row.len(),
            });
        }

        let mut record = Record::new(line);
        for (index, name) in headers.iter().enumerate() {
            let value = match row.get(index) {
                Some(text) => FieldValue::Text(text.to_string()),
                None => FieldValue::Missing,
            };
            record.insert(name, value);
        }
        records.push(record);
    }

    tracing::debug!("Parsed {} records", records.len());
    Ok(records)
}

pub fn coerce_record(record: &mut Record) -> Result<()> {
    let quantity = integer_field(record, QUANTITY_FIELD)?;
    let quantity =
        Number::from_str(&quantity).map_err(|_| invalid_integer(record, QUANTITY_FIELD))?;
    let is_promo = integer_field(record, IS_PROMO_FIELD)? != "0";

    record.insert(QUANTITY_FIELD, FieldValue::Integer(quantity));
    record.insert(IS_PROMO_FIELD, FieldValue::Boolean(is_promo));
    Ok(())
}

/// Reads `field` as base-10 integer text and returns it as a JSON number literal.
fn integer_field(record: &Record, field: &str) -> Result<String> {
    match record.get(field) {
        Some(FieldValue::Text(text)) => {
            normalize_integer(text).ok_or_else(|| invalid_integer(record, field))
        }
        _ => Err(ConvertError::MissingFieldError {
            line: record.line(),
            field: field.to_string(),
        }),
    }
}

fn invalid_integer(record: &Record, field: &str) -> ConvertError {
    let value = match record.get(field) {
        Some(FieldValue::Text(text)) => text.clone(),
        _ => String::new(),
    };
    ConvertError::InvalidIntegerError {
        line: record.line(),
        field: field.to_string(),
        value,
    }
}

/// Normalizes integer text: surrounding whitespace, an optional sign and
/// single underscores between digits are accepted. The result has no `+`,
/// no leading zeros, and `-0` becomes `0`.
pub fn normalize_integer(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if body.is_empty()
        || body.starts_with('_')
        || body.ends_with('_')
        || body.contains("__")
        || !body.bytes().all(|b| b.is_ascii_digit() || b == b'_')
    {
        return None;
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    let significant = digits.trim_start_matches('0');
    Some(if significant.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{significant}")
    } else {
        significant.to_string()
    })
}
