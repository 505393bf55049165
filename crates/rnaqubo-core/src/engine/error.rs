use crate::core::models::sequence::SequenceError;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid sequence: {0}")]
    Sequence(#[from] SequenceError),

    /// The objective container refused a variable or the objective. The container's own
    /// error is kept as the source so callers can downcast it.
    #[error("Objective container rejected the formulation: {source}")]
    Objective {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The objective container handed out one index for two different variables.
    #[error("Objective container assigned index {index} to both '{first}' and '{second}'")]
    DuplicateVariableIndex {
        index: usize,
        first: String,
        second: String,
    },
}

impl EngineError {
    pub(crate) fn objective<E: Error + Send + Sync + 'static>(source: E) -> Self {
        Self::Objective {
            source: Box::new(source),
        }
    }
}
