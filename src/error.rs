use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("slot `{slot}` already has a live chart handle")]
    DuplicateHandle { slot: String },

    #[error("chart backend failed for slot `{slot}`: {message}")]
    Backend { slot: String, message: String },
}
