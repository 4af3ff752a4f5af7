use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to open source database '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: diesel::ConnectionError,
    },

    #[error("source read failed: {0}")]
    SourceRead(#[from] diesel::result::Error),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}
