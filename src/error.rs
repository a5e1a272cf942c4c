use thiserror::Error;

/// Erreurs d'une génération de planning. Toutes sont fatales pour le run.
#[derive(Error, Debug)]
pub enum RotaError {
    #[error("holiday feed unreachable: {0}")]
    Feed(#[from] reqwest::Error),
    #[error("unexpected holiday feed shape: {0}")]
    FeedShape(String),
    #[error("missing data: {0}")]
    MissingData(String),
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
