use std::path::PathBuf;

/// Failure to obtain the raw record set. Any of these aborts the whole load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset source error: {0}")]
    Source(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("top_n must be between 1 and {max}, got {got}")]
    TopNOutOfRange { got: usize, max: usize },
}
