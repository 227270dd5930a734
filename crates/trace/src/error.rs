use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to write trace file {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("failed to serialize trace record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<TraceError> for research_core::Error {
    fn from(err: TraceError) -> Self {
        research_core::Error::TraceIo(err.to_string())
    }
}
