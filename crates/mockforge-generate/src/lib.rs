//! Type-driven synthetic data engine for MockForge.
//!
//! Given a composite type registered in the [`mockforge_core::TypeRegistry`],
//! the engine recursively produces structurally valid, plausible
//! records: nullable fields go null at a configurable rate, union
//! fields dispatch on their first declared alternative, class-typed
//! fields recurse, and unknown tags degrade to name heuristics instead
//! of failing.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod heuristics;
pub mod output;

pub use engine::{GenerateOptions, MockEngine};
pub use errors::GenerationError;
pub use generators::{GeneratorRegistry, ValueGenerator};
