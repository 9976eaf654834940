use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single field's value. Everything loads as `Text`; coercion turns
/// selected fields into `Integer` or `Boolean`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Arbitrary-precision integer, kept as its normalized decimal literal.
    Integer(serde_json::Number),
    Boolean(bool),
    /// The row ended before this column. Serializes as `null`.
    Missing,
}

/// One decoded row: field names in header order mapped to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
    line: u64,
}

impl Record {
    pub fn new(line: u64) -> Self {
        Self {
            fields: Vec::new(),
            line,
        }
    }

    /// Source line the row started on, used in error messages.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Replaces the value in place if `name` is already present, keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
