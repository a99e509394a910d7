use thiserror::Error;

pub type TrackResult<T> = Result<T, TrackError>;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(
        "slice columns must have equal lengths: starts={starts}, ends={ends}, owners={owners}"
    )]
    SliceColumnMismatch {
        starts: usize,
        ends: usize,
        owners: usize,
    },
}
