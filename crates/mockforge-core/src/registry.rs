use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{FieldDef, FieldDescriptor, TypeDef};

/// Registry of composite type definitions, the structural inspector of
/// the engine. Types resolve by name; inspection returns ordered field
/// descriptors ready for generator dispatch.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDef>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the WordPress-flavored types the tool ships.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for def in builtin_types() {
            // Builtins are hand-maintained and hold the invariants.
            let _ = registry.register(def);
        }
        registry
    }

    /// Register a type definition, replacing any previous one of the
    /// same name.
    pub fn register(&mut self, def: TypeDef) -> Result<()> {
        validate_def(&def)?;
        self.types.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Registered type names, sorted for stable listings.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Ordered field descriptors for a composite type.
    pub fn inspect(&self, name: &str) -> Result<Vec<FieldDescriptor>> {
        let def = self
            .types
            .get(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))?;
        Ok(def.fields.iter().map(FieldDescriptor::from_def).collect())
    }

    /// Add definitions from a JSON document: either a single type object
    /// or an array of them. Returns how many types were registered.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize> {
        let defs: Vec<TypeDef> = match serde_json::from_str::<Vec<TypeDef>>(json) {
            Ok(defs) => defs,
            Err(_) => vec![serde_json::from_str::<TypeDef>(json)?],
        };
        let count = defs.len();
        for def in defs {
            self.register(def)?;
        }
        Ok(count)
    }

    pub fn load_json(&mut self, path: &Path) -> Result<usize> {
        let json = std::fs::read_to_string(path)?;
        self.extend_from_json(&json)
    }
}

fn validate_def(def: &TypeDef) -> Result<()> {
    if def.name.trim().is_empty() {
        return Err(Error::InvalidDefinition(
            "type name must not be empty".to_string(),
        ));
    }
    let mut seen = std::collections::HashSet::new();
    for field in &def.fields {
        if field.name.trim().is_empty() {
            return Err(Error::InvalidDefinition(format!(
                "type '{}' has a field with an empty name",
                def.name
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(Error::InvalidDefinition(format!(
                "type '{}' declares field '{}' more than once",
                def.name, field.name
            )));
        }
    }
    Ok(())
}

fn builtin_types() -> Vec<TypeDef> {
    vec![
        TypeDef::new(
            "wp.post",
            vec![
                FieldDef::new("author", &["string"]),
                FieldDef::new("date", &["datetime"]),
                FieldDef::new("date_gmt", &["datetime"]),
                FieldDef::new("content", &["string"]),
                FieldDef::new("title", &["string"]),
                FieldDef::new("excerpt", &["string", "null"]),
                FieldDef::new("status", &["string"]),
                FieldDef::new("comment_status", &["string"]),
                FieldDef::new("ping_status", &["string"]),
                FieldDef::new("password", &["string", "null"]),
                FieldDef::new("name", &["string"]),
                FieldDef::new("to_ping", &["string", "null"]),
                FieldDef::new("pinged", &["string", "null"]),
                FieldDef::new("modified", &["datetime"]),
                FieldDef::new("modified_gmt", &["datetime"]),
                FieldDef::new("content_filtered", &["string", "null"]),
                FieldDef::new("parent", &["int"]),
                FieldDef::new("guid", &["string"]),
                FieldDef::new("menu_order", &["int"]),
                FieldDef::new("type", &["string"]),
                FieldDef::new("mime_type", &["string", "null"]),
                FieldDef::new("comment_count", &["int"]),
                FieldDef::new("filter", &["string"]),
            ],
        ),
        TypeDef::new(
            "wp.user",
            vec![
                FieldDef::new("id", &["int"]),
                FieldDef::new("user_login", &["string"]),
                FieldDef::new("user_email", &["string"]),
                FieldDef::new("user_url", &["string", "null"]),
                FieldDef::new("user_registered", &["datetime"]),
                FieldDef::new("display_name", &["string"]),
                FieldDef::new("description", &["string", "null"]),
                FieldDef::new("is_active", &["bool"]),
                FieldDef::new("roles", &["array"]),
            ],
        ),
        TypeDef::new(
            "wp.category",
            vec![
                FieldDef::new("term_id", &["int"]),
                FieldDef::new("name", &["string"]),
                FieldDef::new("slug", &["string"]),
                FieldDef::new("description", &["string", "null"]),
                FieldDef::new("parent", &["int", "null"]),
                FieldDef::new("count", &["int"]),
            ],
        ),
    ]
}
