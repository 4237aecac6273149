use crate::submit::SubmitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("submit failed: {0}")]
    Submit(#[from] SubmitError),

    #[error("record serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
