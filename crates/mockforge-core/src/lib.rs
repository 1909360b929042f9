//! Core contracts for MockForge.
//!
//! This crate defines the structural type model (type definitions and
//! field descriptors), the generated value tree, the type registry used
//! for inspection, and the error type shared across crates.

pub mod error;
pub mod registry;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use registry::TypeRegistry;
pub use types::{FieldDef, FieldDescriptor, TypeDef, UNKNOWN_TAG};
pub use value::{MockRecord, MockValue};
