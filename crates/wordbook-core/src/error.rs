#[derive(Debug, thiserror::Error)]
pub enum PhoneticError {
    #[error("Phonetic source unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid phonetic table: {0}")]
    InvalidTable(#[from] serde_json::Error),
}
