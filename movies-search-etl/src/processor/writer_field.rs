//! Decoding of person id lists.
//!
//! Actor ids always arrive as a comma-separated list. The writer field comes
//! in two shapes: the same comma-separated list, or a JSON array of objects
//! with an `id` key. Both decode to one canonical list of ids.

use serde_json::Value;

/// The two shapes of the raw writer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterField<'a> {
    /// A JSON array such as `[{"id": "1"}, {"id": "2"}]`.
    JsonArray(&'a str),
    /// A comma-separated list such as `1,2`.
    IdList(&'a str),
}

impl<'a> WriterField<'a> {
    /// Classify a raw writer field. A field whose first non-whitespace
    /// character is `[` is a JSON array, anything else an id list.
    pub fn detect(raw: &'a str) -> Self {
        if raw.trim_start().starts_with('[') {
            Self::JsonArray(raw)
        } else {
            Self::IdList(raw)
        }
    }

    /// Decode into writer ids, in source order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<i64>)` - The ids, possibly empty
    /// * `Err(String)` - The reason the field could not be decoded
    pub fn into_ids(self) -> Result<Vec<i64>, String> {
        match self {
            Self::JsonArray(raw) => parse_json_ids(raw),
            Self::IdList(raw) => parse_id_list(raw),
        }
    }
}

/// Parse a comma-separated list of integer ids. Blank entries are skipped.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<i64>()
                .map_err(|_| format!("invalid person id '{}'", entry))
        })
        .collect()
}

fn parse_json_ids(raw: &str) -> Result<Vec<i64>, String> {
    let entries: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| format!("malformed writer JSON: {}", e))?;

    entries
        .iter()
        .map(|entry| match entry.get("id") {
            Some(Value::Number(id)) => id
                .as_i64()
                .ok_or_else(|| format!("invalid person id '{}'", id)),
            Some(Value::String(id)) => id
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid person id '{}'", id)),
            _ => Err(format!("writer entry without an id: {}", entry)),
        })
        .collect()
}
