use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("invalid time scale: {scale} (must be finite and > 0)")]
    InvalidScale { scale: f64 },

    #[error("invalid canvas width: {width} (must be > 0)")]
    InvalidWidth { width: u32 },

    #[error("invalid duration: {duration} (must be finite and > 0)")]
    InvalidDuration { duration: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
