//! Type-tag generator registry.
//!
//! Maps a primitive type tag to a value generator parameterized by the
//! field name. The default set covers the tags the built-in types use;
//! callers may register additional generators before a run. The
//! registry is never mutated while a run is in flight.

use std::collections::HashMap;

use rand::RngCore;

use mockforge_core::MockValue;

use crate::heuristics;

/// A value source for one primitive type tag. The field name is passed
/// through so generators can apply name heuristics.
pub trait ValueGenerator: Send + Sync {
    fn generate(&self, field: &str, rng: &mut dyn RngCore) -> MockValue;
}

impl<F> ValueGenerator for F
where
    F: Fn(&str, &mut dyn RngCore) -> MockValue + Send + Sync,
{
    fn generate(&self, field: &str, rng: &mut dyn RngCore) -> MockValue {
        self(field, rng)
    }
}

/// Registry of primitive generators keyed by type tag.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Box<dyn ValueGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in primitive tags registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("int", Box::new(IntGenerator));
        registry.register("integer", Box::new(IntGenerator));
        registry.register("string", Box::new(StringGenerator));
        registry.register("text", Box::new(StringGenerator));
        registry.register("float", Box::new(FloatGenerator));
        registry.register("double", Box::new(FloatGenerator));
        registry.register("bool", Box::new(BoolGenerator));
        registry.register("boolean", Box::new(BoolGenerator));
        registry.register("array", Box::new(ArrayGenerator));
        registry.register("list", Box::new(ArrayGenerator));
        registry.register("date", Box::new(DateGenerator));
        registry.register("datetime", Box::new(TimestampGenerator));
        registry.register("timestamp", Box::new(TimestampGenerator));
        registry.register("uuid", Box::new(UuidGenerator));
        registry
    }

    /// Register a generator for a tag, replacing any existing one.
    pub fn register(&mut self, tag: &str, generator: Box<dyn ValueGenerator>) {
        self.generators.insert(tag.to_string(), generator);
    }

    /// Closure-friendly registration for caller extensions.
    pub fn register_fn<F>(&mut self, tag: &str, generator: F)
    where
        F: Fn(&str, &mut dyn RngCore) -> MockValue + Send + Sync + 'static,
    {
        self.register(tag, Box::new(generator));
    }

    pub fn resolve(&self, tag: &str) -> Option<&dyn ValueGenerator> {
        self.generators.get(tag).map(Box::as_ref)
    }

    /// Registered tags, sorted for stable listings.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

struct IntGenerator;

impl ValueGenerator for IntGenerator {
    fn generate(&self, field: &str, rng: &mut dyn RngCore) -> MockValue {
        MockValue::Int(heuristics::integer(field, rng))
    }
}

struct StringGenerator;

impl ValueGenerator for StringGenerator {
    fn generate(&self, field: &str, rng: &mut dyn RngCore) -> MockValue {
        MockValue::Text(heuristics::string(field, rng))
    }
}

struct FloatGenerator;

impl ValueGenerator for FloatGenerator {
    fn generate(&self, _field: &str, rng: &mut dyn RngCore) -> MockValue {
        MockValue::Float(heuristics::float(rng))
    }
}

struct BoolGenerator;

impl ValueGenerator for BoolGenerator {
    fn generate(&self, field: &str, rng: &mut dyn RngCore) -> MockValue {
        MockValue::Bool(heuristics::boolean(field, rng))
    }
}

struct ArrayGenerator;

impl ValueGenerator for ArrayGenerator {
    fn generate(&self, field: &str, rng: &mut dyn RngCore) -> MockValue {
        heuristics::array(field, rng)
    }
}

struct DateGenerator;

impl ValueGenerator for DateGenerator {
    fn generate(&self, _field: &str, rng: &mut dyn RngCore) -> MockValue {
        MockValue::Text(heuristics::date(rng))
    }
}

struct TimestampGenerator;

impl ValueGenerator for TimestampGenerator {
    fn generate(&self, _field: &str, rng: &mut dyn RngCore) -> MockValue {
        MockValue::Text(heuristics::timestamp(rng))
    }
}

struct UuidGenerator;

impl ValueGenerator for UuidGenerator {
    fn generate(&self, _field: &str, rng: &mut dyn RngCore) -> MockValue {
        MockValue::Text(heuristics::random_uuid(rng))
    }
}
