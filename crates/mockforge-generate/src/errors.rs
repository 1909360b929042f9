use thiserror::Error;

/// Errors emitted by the generation engine and its writers.
///
/// Only two conditions abort a generation call: an unresolvable
/// top-level type and a recursion-budget overflow, both carried by the
/// `Core` variant. Unknown field tags never error; they degrade to
/// name heuristics.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Core(#[from] mockforge_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl GenerationError {
    /// True when the top-level type identifier failed to resolve.
    pub fn is_type_not_found(&self) -> bool {
        matches!(self, Self::Core(mockforge_core::Error::TypeNotFound(_)))
    }
}
