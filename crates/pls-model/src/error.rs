use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlsError {
    #[error("unsupported age format: {token:?}")]
    AgeFormat { token: String },
    #[error("unsupported age-equivalent format: {token:?}")]
    AgeEquivalentFormat { token: String },
    #[error("reference table error: {0}")]
    Table(String),
}

pub type Result<T> = std::result::Result<T, PlsError>;
