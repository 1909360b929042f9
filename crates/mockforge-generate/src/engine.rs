use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use mockforge_core::{Error as CoreError, FieldDescriptor, MockRecord, MockValue, TypeRegistry};

use crate::errors::GenerationError;
use crate::generators::GeneratorRegistry;
use crate::heuristics;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Seed for the run RNG. `None` draws one from OS entropy; the
    /// drawn seed is logged so a run can be replayed.
    pub seed: Option<u64>,
    /// Probability that a nullable field is emitted as null.
    pub null_rate: f64,
    /// Recursion budget for nested composite types.
    pub max_depth: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            null_rate: 0.2,
            max_depth: 8,
        }
    }
}

/// Type-driven mock data engine.
///
/// Holds the type registry, the primitive generator registry, and run
/// options. Performs no I/O; callers own serialization of the records.
pub struct MockEngine {
    types: TypeRegistry,
    generators: GeneratorRegistry,
    options: GenerateOptions,
}

impl MockEngine {
    pub fn new(types: TypeRegistry) -> Self {
        Self::with_options(types, GenerateOptions::default())
    }

    pub fn with_options(types: TypeRegistry, options: GenerateOptions) -> Self {
        Self {
            types,
            generators: GeneratorRegistry::with_defaults(),
            options,
        }
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Access for registering extra generators before a run starts.
    pub fn generators_mut(&mut self) -> &mut GeneratorRegistry {
        &mut self.generators
    }

    /// Generate `count` independent records of the named composite type.
    ///
    /// Field descriptors are computed once per call; each record is
    /// built all-or-nothing. Fails only when the type identifier does
    /// not resolve or a self-referential type exceeds the recursion
    /// budget.
    pub fn generate(
        &self,
        type_name: &str,
        count: usize,
    ) -> Result<Vec<MockRecord>, GenerationError> {
        let start = Instant::now();
        let descriptors = self.types.inspect(type_name)?;
        let seed = match self.options.seed {
            Some(seed) => seed,
            None => ChaCha8Rng::from_os_rng().random(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        info!(
            type_name,
            count,
            seed,
            fields = descriptors.len(),
            "mock generation started"
        );

        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            let mut stack = vec![type_name.to_string()];
            records.push(self.fill_record(&descriptors, &mut stack, &mut rng)?);
        }

        info!(
            type_name,
            records = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "mock generation completed"
        );
        Ok(records)
    }

    fn fill_record(
        &self,
        descriptors: &[FieldDescriptor],
        stack: &mut Vec<String>,
        rng: &mut ChaCha8Rng,
    ) -> Result<MockRecord, GenerationError> {
        let mut record = MockRecord::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let value = self.field_value(descriptor, stack, rng)?;
            record.insert(descriptor.name.clone(), value);
        }
        Ok(record)
    }

    fn field_value(
        &self,
        descriptor: &FieldDescriptor,
        stack: &mut Vec<String>,
        rng: &mut ChaCha8Rng,
    ) -> Result<MockValue, GenerationError> {
        if descriptor.nullable && rng.random_bool(self.options.null_rate.clamp(0.0, 1.0)) {
            return Ok(MockValue::Null);
        }

        // Union fields dispatch on the first declared alternative, a
        // deterministic tie-break that keeps output types predictable.
        let tag = descriptor.primary_tag();

        if let Some(generator) = self.generators.resolve(tag) {
            return Ok(generator.generate(&descriptor.name, rng));
        }

        if self.types.contains(tag) {
            let nested = self.build_record(tag, stack, rng)?;
            return Ok(MockValue::Record(nested));
        }

        debug!(
            field = %descriptor.name,
            tag,
            "no generator or type for tag, falling back to name heuristics"
        );
        Ok(heuristics::guess(&descriptor.name, rng))
    }

    fn build_record(
        &self,
        type_name: &str,
        stack: &mut Vec<String>,
        rng: &mut ChaCha8Rng,
    ) -> Result<MockRecord, GenerationError> {
        if stack.len() >= self.options.max_depth {
            return Err(CoreError::CyclicType {
                type_name: type_name.to_string(),
                depth: self.options.max_depth,
            }
            .into());
        }
        let descriptors = self.types.inspect(type_name)?;
        stack.push(type_name.to_string());
        let record = self.fill_record(&descriptors, stack, rng);
        stack.pop();
        record
    }
}
