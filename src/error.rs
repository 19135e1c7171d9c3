use thiserror::Error;

/// Failures surfaced by the registry and the entity model.
///
/// Stage-counter saturation is deliberately not represented here; it is reported
/// through [`crate::sim::effects::StageOutcome::Saturated`].
#[derive(Debug, Error)]
pub enum DexError {
    #[error("species '{0}' not found")]
    SpeciesNotFound(String),

    #[error("form '{form}' not found for {species}")]
    FormNotFound { species: String, form: String },

    #[error("unknown game title '{0}'")]
    GameNotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("malformed corpus: {0}")]
    MalformedCorpus(String),
}

impl From<serde_json::Error> for DexError {
    fn from(err: serde_json::Error) -> Self {
        DexError::MalformedCorpus(err.to_string())
    }
}
