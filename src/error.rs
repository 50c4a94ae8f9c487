use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart data: {0}")]
    InvalidData(String),

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),
}
