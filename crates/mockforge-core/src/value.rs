use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<MockValue>),
    Record(MockRecord),
}

impl MockValue {
    pub fn is_null(&self) -> bool {
        matches!(self, MockValue::Null)
    }

    /// Scalar kind name, used for shape assertions and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            MockValue::Null => "null",
            MockValue::Bool(_) => "bool",
            MockValue::Int(_) => "int",
            MockValue::Float(_) => "float",
            MockValue::Text(_) => "text",
            MockValue::List(_) => "list",
            MockValue::Record(_) => "record",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MockValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MockValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MockValue::Int(value) => Some(*value as f64),
            MockValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MockValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[MockValue]> {
        match self {
            MockValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&MockRecord> {
        match self {
            MockValue::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Render as a CSV cell. Nested values become embedded JSON.
    pub fn to_csv(&self) -> String {
        match self {
            MockValue::Null => String::new(),
            MockValue::Bool(value) => value.to_string(),
            MockValue::Int(value) => value.to_string(),
            MockValue::Float(value) => value.to_string(),
            MockValue::Text(value) => value.clone(),
            MockValue::List(_) | MockValue::Record(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }
}

impl Serialize for MockValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MockValue::Null => serializer.serialize_unit(),
            MockValue::Bool(value) => serializer.serialize_bool(*value),
            MockValue::Int(value) => serializer.serialize_i64(*value),
            MockValue::Float(value) => serializer.serialize_f64(*value),
            MockValue::Text(value) => serializer.serialize_str(value),
            MockValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            MockValue::Record(record) => record.serialize(serializer),
        }
    }
}

/// Ordered field-name to value mapping for one generated record.
///
/// Keys follow the composite type's declaration order, which matters
/// for CSV headers and stable JSON output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockRecord {
    fields: Vec<(String, MockValue)>,
}

impl MockRecord {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Declaration order is the insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: MockValue) {
        self.fields.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&MockValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MockValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for MockRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_in_insertion_order() {
        let mut record = MockRecord::new();
        record.insert("zulu", MockValue::Int(1));
        record.insert("alpha", MockValue::Text("a".to_string()));
        record.insert("mike", MockValue::Null);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"zulu":1,"alpha":"a","mike":null}"#);
    }

    #[test]
    fn nested_values_render_as_json_in_csv() {
        let mut inner = MockRecord::new();
        inner.insert("id", MockValue::Int(7));
        let value = MockValue::List(vec![MockValue::Record(inner)]);
        assert_eq!(value.to_csv(), r#"[{"id":7}]"#);
        assert_eq!(MockValue::Null.to_csv(), "");
        assert_eq!(MockValue::Bool(true).to_csv(), "true");
    }

    #[test]
    fn kind_names_cover_all_variants() {
        assert_eq!(MockValue::Float(1.5).kind(), "float");
        assert_eq!(MockValue::List(Vec::new()).kind(), "list");
        assert_eq!(MockValue::Record(MockRecord::new()).kind(), "record");
    }
}
