use thiserror::Error;

/// Core error type shared across MockForge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested identifier does not resolve to a registered type.
    #[error("type '{0}' not found in registry")]
    TypeNotFound(String),
    /// A self-referential type exceeded the recursion budget.
    #[error("cyclic type '{type_name}' exceeded max depth {depth}")]
    CyclicType { type_name: String, depth: usize },
    /// A type definition violates registry invariants.
    #[error("invalid type definition: {0}")]
    InvalidDefinition(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by MockForge crates.
pub type Result<T> = std::result::Result<T, Error>;
