//! Untyped lab records
//!
//! A [`Record`] is whatever a form or table row hands to the engine: an
//! insertion-ordered map from field name to [`FieldValue`]. Records are never
//! checked against an experiment type; foreign or missing fields simply show up
//! as validation results.

use crate::error::ModelError;
use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Id used when a record carries neither `id` nor `sampleCode`
pub const UNKNOWN_RECORD_ID: &str = "unknown";

static ABSENT: FieldValue = FieldValue::Absent;

/// Key/value record supplied by a caller
///
/// Deserializing goes through [`Record::from_json_value`], so nested arrays
/// and objects load the same way as with [`Record::from_json_str`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create empty record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[inline]
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(field.into(), value.into())
    }

    /// Remove a field, keeping the order of the others
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.shift_remove(field)
    }

    /// Value of a field, [`FieldValue::Absent`] when the key is missing
    #[inline]
    #[must_use]
    pub fn value(&self, field: &str) -> &FieldValue {
        self.fields.get(field).unwrap_or(&ABSENT)
    }

    /// True when the field holds a non-empty value
    #[inline]
    #[must_use]
    pub fn has_value(&self, field: &str) -> bool {
        !self.value(field).is_empty()
    }

    /// Identifier used to key per-record results
    ///
    /// First non-empty of `id`, `sampleCode`, else [`UNKNOWN_RECORD_ID`].
    #[must_use]
    pub fn resolve_id(&self) -> String {
        self.value("id")
            .to_text()
            .or_else(|| self.value("sampleCode").to_text())
            .unwrap_or_else(|| UNKNOWN_RECORD_ID.to_string())
    }

    /// Number of stored fields (including explicit nulls)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a record from a JSON object
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRecord`] when `value` is not an object.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ModelError> {
        match value {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from(v)))
                .collect()),
            other => Err(ModelError::InvalidRecord {
                reason: format!("expected JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Parse a record from JSON text
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or when the top level is not an object.
    pub fn from_json_str(s: &str) -> Result<Self, ModelError> {
        Self::from_json_value(serde_json::from_str(s)?)
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = ModelError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json_value(value)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(serde::de::Error::custom)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Parse a JSON array of record objects
///
/// # Errors
///
/// Fails on malformed JSON, a non-array top level, or any non-object item.
pub fn records_from_json_str(s: &str) -> Result<Vec<Record>, ModelError> {
    match serde_json::from_str::<serde_json::Value>(s)? {
        serde_json::Value::Array(items) => {
            items.into_iter().map(Record::from_json_value).collect()
        }
        other => Err(ModelError::InvalidRecord {
            reason: format!("expected JSON array of records, found {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_field_reads_absent() {
        let record = Record::new().with("sampleCode", "S1");
        assert_eq!(record.value("dnaConcentration"), &FieldValue::Absent);
        assert!(!record.has_value("dnaConcentration"));
        assert!(record.has_value("sampleCode"));
    }

    #[test]
    fn resolve_id_prefers_id_then_sample_code() {
        let record = Record::new().with("id", 7).with("sampleCode", "S1");
        assert_eq!(record.resolve_id(), "7");

        let record = Record::new().with("id", "").with("sampleCode", "S1");
        assert_eq!(record.resolve_id(), "S1");

        let record = Record::new().with("dnaVolume", 50.0);
        assert_eq!(record.resolve_id(), UNKNOWN_RECORD_ID);
    }

    #[test]
    fn from_json_object() {
        let record =
            Record::from_json_str(r#"{"sampleCode":"PCR001","pcrProduct":2,"bandSize":null}"#)
                .unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.value("pcrProduct"), &FieldValue::Number(2.0));
        assert!(record.value("bandSize").is_empty());
        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["sampleCode", "pcrProduct", "bandSize"]);
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Record::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ModelError::InvalidRecord { .. }));

        let err = Record::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn records_from_json_array() {
        let records =
            records_from_json_str(r#"[{"sampleCode":"A"},{"sampleCode":"B"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].resolve_id(), "B");

        assert!(records_from_json_str(r#"{"sampleCode":"A"}"#).is_err());
    }

    #[test]
    fn remove_keeps_order() {
        let mut record = Record::new().with("a", 1).with("b", 2).with("c", 3);
        assert_eq!(record.remove("b"), Some(FieldValue::Number(2.0)));
        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn serde_and_from_json_agree_on_nested_values() {
        let json = r#"{"sampleCode":"S1","meta":{"operator":"lee","runs":[1,2]},"dnaVolume":50}"#;
        let parsed = Record::from_json_str(json).unwrap();
        let deserialized: Record = serde_json::from_str(json).unwrap();

        assert_eq!(deserialized, parsed);
        assert_eq!(
            deserialized.value("meta"),
            &FieldValue::Text(r#"{"operator":"lee","runs":[1,2]}"#.to_string())
        );
        let batch: Vec<Record> = serde_json::from_str(&format!("[{json}]")).unwrap();
        assert_eq!(batch, vec![parsed]);
    }

    #[test]
    fn deserialize_rejects_non_objects() {
        let err = serde_json::from_str::<Record>("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("expected JSON object"));

        let err = Record::try_from(serde_json::json!("S1")).unwrap_err();
        assert!(matches!(err, ModelError::InvalidRecord { .. }));
    }
}
