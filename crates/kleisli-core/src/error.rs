use thiserror::Error;

/// Top-level error type for the kleisli toolkit.
///
/// The statically-typed composers never produce one of these themselves; user
/// errors travel inside the chainable (`Result`, task output) unchanged.
#[derive(Debug, Error)]
pub enum KleisliError {
    #[error("Value of kind '{kind}' does not support chain")]
    NotChainable { kind: String },

    #[error("Kleisli composition needs at least one function")]
    EmptyComposition,

    #[error("Step {index} failed: {source}")]
    Step {
        index: usize,
        source: Box<KleisliError>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl KleisliError {
    pub fn not_chainable(kind: impl Into<String>) -> Self {
        Self::NotChainable { kind: kind.into() }
    }

    /// Wrap an error raised by the step at `index` of a pipeline.
    pub fn at_step(index: usize, source: KleisliError) -> Self {
        Self::Step {
            index,
            source: Box::new(source),
        }
    }

    /// Strip any `Step` wrappers and return the originating error.
    pub fn root_cause(&self) -> &KleisliError {
        match self {
            Self::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, KleisliError>;
