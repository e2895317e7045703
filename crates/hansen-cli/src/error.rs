use hansen_core::core::registry::repository::TableLoadError;
use hansen_core::workflows::evaluate::EvaluationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Table(#[from] TableLoadError),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
