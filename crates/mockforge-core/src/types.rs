use serde::{Deserialize, Serialize};

/// Tag assigned to fields declared without any type.
pub const UNKNOWN_TAG: &str = "unknown";

const NULL_TAG: &str = "null";

/// Declared definition of a composite type: an ordered field list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// One declared field: a name plus its type alternatives in declaration
/// order. `"null"` among the alternatives marks the field nullable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, types: &[&str]) -> Self {
        Self {
            name: name.into(),
            types: types.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

/// Inspection result for one field, ready for generator dispatch.
///
/// `type_tags` preserves declaration order with `"null"` stripped out;
/// a field declared without types carries the single `"unknown"` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_tags: Vec<String>,
    pub nullable: bool,
}

impl FieldDescriptor {
    pub fn from_def(def: &FieldDef) -> Self {
        let nullable = def.types.iter().any(|tag| tag == NULL_TAG);
        let mut type_tags: Vec<String> = def
            .types
            .iter()
            .filter(|tag| tag.as_str() != NULL_TAG)
            .cloned()
            .collect();
        if type_tags.is_empty() {
            type_tags.push(UNKNOWN_TAG.to_string());
        }
        Self {
            name: def.name.clone(),
            type_tags,
            nullable,
        }
    }

    /// Tag used for dispatch: the first declared non-null alternative.
    pub fn primary_tag(&self) -> &str {
        self.type_tags
            .first()
            .map(String::as_str)
            .unwrap_or(UNKNOWN_TAG)
    }

    pub fn is_union(&self) -> bool {
        self.type_tags.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_strips_null_and_preserves_order() {
        let def = FieldDef::new("parent", &["int", "null", "string"]);
        let descriptor = FieldDescriptor::from_def(&def);
        assert!(descriptor.nullable);
        assert_eq!(descriptor.type_tags, vec!["int", "string"]);
        assert_eq!(descriptor.primary_tag(), "int");
        assert!(descriptor.is_union());
    }

    #[test]
    fn descriptor_defaults_to_unknown_tag() {
        let def = FieldDef::new("mystery", &[]);
        let descriptor = FieldDescriptor::from_def(&def);
        assert!(!descriptor.nullable);
        assert_eq!(descriptor.type_tags, vec![UNKNOWN_TAG]);
    }

    #[test]
    fn null_only_field_is_nullable_unknown() {
        let def = FieldDef::new("ghost", &["null"]);
        let descriptor = FieldDescriptor::from_def(&def);
        assert!(descriptor.nullable);
        assert_eq!(descriptor.primary_tag(), UNKNOWN_TAG);
    }
}
