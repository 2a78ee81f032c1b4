use std::result;

use thiserror::Error;

/// A type alias for handling errors related to metalgpu.
pub type Result<T> = result::Result<T, GpuError>;

/// An error that can occur while inspecting GPUs.
///
/// These are user-facing. For consistency, use _single quotes_ (e.g. `'5'`)
/// when highlighting values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GpuError {
    /// The default device was asked for, but the platform didn't report one.
    #[error("No default GPU was found on this system.")]
    DeviceNotFound,
    /// The requested index doesn't address any device in the gathered list.
    #[error("'{index}' is not a valid index, the number of GPUs found was '{len}'.")]
    IndexOutOfRange { index: i64, len: usize },
    /// An error when there is an IO exception, e.g. while writing the output.
    #[error("IO exception, {0}")]
    InvalidIo(String),
}

impl From<std::io::Error> for GpuError {
    fn from(err: std::io::Error) -> Self {
        GpuError::InvalidIo(err.to_string())
    }
}
