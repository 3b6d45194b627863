use thiserror::Error;

#[derive(Debug, Error)]
pub enum CellError {
    #[error("Malformed launch field on cell {index}: `{value}`. Expected `<year>, Announced, <year> Released, <year>`.")]
    MalformedLaunch { index: usize, value: String },
    #[error("Unable to read cells csv. Reason: `{0}`.")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Unable to serialize report. Reason: `{0}`.")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CellError>;
